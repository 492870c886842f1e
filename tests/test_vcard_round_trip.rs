//! Round-trip tests: map, serialize, parse back.

mod e2e;

use csv_vcard::models::{EmailEntry, PhoneEntry, PostalAddress, StructuredName};
use csv_vcard::vcard::writer::MAX_LINE_OCTETS;
use csv_vcard::{map_row, parse_cards, to_vcard, AddressCategory, Contact, CsvSource, PhoneCategory};
use e2e::fixtures::{full_contact, outlook_csv};

fn round_trip(contact: &Contact) -> Contact {
    let text = to_vcard(contact).unwrap();
    let mut cards = parse_cards(&text).unwrap();
    assert_eq!(cards.len(), 1);
    cards.remove(0)
}

#[test]
fn test_full_contact_round_trip() {
    let values = full_contact();
    let text = outlook_csv(&[values.as_slice()]);
    let row = CsvSource::from_text(text).unwrap().next().unwrap().unwrap();
    let contact = map_row(&row);

    let parsed = round_trip(&contact);

    assert_eq!(parsed.name, contact.name);
    assert_eq!(parsed.formatted_name, contact.formatted_name);
    assert_eq!(parsed.organization, contact.organization);
    assert_eq!(parsed.job_title, contact.job_title);
    assert_eq!(parsed.emails, contact.emails);
    assert_eq!(parsed.phones, contact.phones);
    assert_eq!(parsed.addresses, contact.addresses);
    assert_eq!(parsed, contact);
}

#[test]
fn test_duplicate_phone_categories_survive() {
    let mut contact = Contact::new(StructuredName {
        given: "Ann".to_string(),
        ..Default::default()
    });
    contact.phones = vec![
        PhoneEntry::new("1", PhoneCategory::Work),
        PhoneEntry::new("2", PhoneCategory::Work),
        PhoneEntry::new("3", PhoneCategory::Work),
        PhoneEntry::new("4", PhoneCategory::Fax),
        PhoneEntry::new("5", PhoneCategory::Fax),
    ];

    let parsed = round_trip(&contact);
    assert_eq!(parsed.phones_of(PhoneCategory::Work), vec!["1", "2", "3"]);
    assert_eq!(parsed.phones_of(PhoneCategory::Fax), vec!["4", "5"]);
}

#[test]
fn test_special_characters_and_long_lines_round_trip() {
    let mut contact = Contact::new(StructuredName {
        family: "Núñez; de la Vega".to_string(),
        given: "José, María".to_string(),
        additional: "back\\slash".to_string(),
        prefix: String::new(),
        suffix: String::new(),
    });
    contact.job_title = Some(format!("Head of {}", "Very Long Department Names ".repeat(6)));
    contact.emails = vec![EmailEntry::internet("jose@example.com")];
    let mut other = PostalAddress::empty(AddressCategory::Other);
    other.street = "Calle Mayor, 1\nPiso 3".to_string();
    other.country = "España".to_string();
    contact.addresses = vec![other];

    let text = to_vcard(&contact).unwrap();
    for line in text.split("\r\n") {
        assert!(line.len() <= MAX_LINE_OCTETS, "line too long: {:?}", line);
    }

    assert_eq!(round_trip(&contact), contact);
}

#[test]
fn test_every_address_category_round_trips() {
    let mut contact = Contact::default();
    for category in AddressCategory::ALL {
        let mut address = PostalAddress::empty(category);
        address.city = format!("{} city", category);
        contact.addresses.push(address);
    }

    let parsed = round_trip(&contact);
    for category in AddressCategory::ALL {
        assert_eq!(
            parsed.address(category).unwrap().city,
            format!("{} city", category)
        );
    }
}
