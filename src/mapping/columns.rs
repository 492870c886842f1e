//! Source column names and the ordered mapping tables.

use crate::domain::{AddressCategory, PhoneCategory};

pub const FIRST_NAME: &str = "First Name";
pub const MIDDLE_NAME: &str = "Middle Name";
pub const LAST_NAME: &str = "Last Name";
pub const TITLE: &str = "Title";
pub const SUFFIX: &str = "Suffix";
pub const COMPANY: &str = "Company";
pub const DEPARTMENT: &str = "Department";
pub const JOB_TITLE: &str = "Job Title";

/// Email columns, in the order addresses are emitted.
pub const EMAIL_COLUMNS: [&str; 3] = [
    "E-mail 1 Address",
    "E-mail 2 Address",
    "E-mail 3 Address",
];

/// Phone columns and the category each maps to, in emission order.
pub const PHONE_COLUMNS: [(&str, PhoneCategory); 19] = [
    ("Primary Phone", PhoneCategory::Voice),
    ("Home Phone", PhoneCategory::Home),
    ("Home Phone 2", PhoneCategory::Home),
    ("Mobile Phone", PhoneCategory::Cell),
    ("Pager", PhoneCategory::Pager),
    ("Home Fax", PhoneCategory::Fax),
    ("Company Main Phone", PhoneCategory::Work),
    ("Business Phone", PhoneCategory::Work),
    ("Business Phone 2", PhoneCategory::Work),
    ("Business Fax", PhoneCategory::Fax),
    ("Assistant's Phone", PhoneCategory::Work),
    ("Other Phone", PhoneCategory::Other),
    ("Other Fax", PhoneCategory::Fax),
    ("Callback", PhoneCategory::Callback),
    ("Car Phone", PhoneCategory::Car),
    ("ISDN", PhoneCategory::Isdn),
    ("Radio Phone", PhoneCategory::Radio),
    ("TTY/TDD Phone", PhoneCategory::TtyTdd),
    ("Telex", PhoneCategory::Telex),
];

/// The nine source columns that describe one postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressColumns {
    pub category: AddressCategory,
    pub label: &'static str,
    pub street: &'static str,
    pub street_2: &'static str,
    pub street_3: &'static str,
    pub po_box: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

impl AddressColumns {
    /// Every column of the group, in source table order.
    ///
    /// The label and third street line only take part in the presence test;
    /// neither is stored on the mapped address.
    pub fn all(&self) -> [&'static str; 9] {
        [
            self.label,
            self.street,
            self.street_2,
            self.street_3,
            self.po_box,
            self.city,
            self.region,
            self.postal_code,
            self.country,
        ]
    }
}

/// Address column groups, in emission order.
pub const ADDRESS_COLUMNS: [AddressColumns; 3] = [
    AddressColumns {
        category: AddressCategory::Home,
        label: "Home Address",
        street: "Home Street",
        street_2: "Home Street 2",
        street_3: "Home Street 3",
        po_box: "Home Address PO Box",
        city: "Home City",
        region: "Home State",
        postal_code: "Home Postal Code",
        country: "Home Country",
    },
    AddressColumns {
        category: AddressCategory::Work,
        label: "Business Address",
        street: "Business Street",
        street_2: "Business Street 2",
        street_3: "Business Street 3",
        po_box: "Business Address PO Box",
        city: "Business City",
        region: "Business State",
        postal_code: "Business Postal Code",
        country: "Business Country",
    },
    AddressColumns {
        category: AddressCategory::Other,
        label: "Other Address",
        street: "Other Street",
        street_2: "Other Street 2",
        street_3: "Other Street 3",
        po_box: "Other Address PO Box",
        city: "Other City",
        region: "Other State",
        postal_code: "Other Postal Code",
        country: "Other Country",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_phone_columns_are_unique() {
        let names: HashSet<&str> = PHONE_COLUMNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), PHONE_COLUMNS.len());
    }

    #[test]
    fn test_phone_columns_cover_every_category() {
        for category in PhoneCategory::ALL {
            assert!(
                PHONE_COLUMNS.iter().any(|(_, c)| *c == category),
                "no column maps to {}",
                category
            );
        }
    }

    #[test]
    fn test_address_columns_follow_category_order() {
        let categories: Vec<AddressCategory> =
            ADDRESS_COLUMNS.iter().map(|group| group.category).collect();
        assert_eq!(categories, AddressCategory::ALL.to_vec());
    }
}
