//! csv-vcard - Main entry point
//!
//! Usage: `csv-vcard [INPUT_CSV] [OUTPUT_DIR]`
//!
//! Positional arguments override `VCARD_INPUT_PATH` and `VCARD_OUTPUT_DIR`.

use anyhow::{Context, Result};
use csv_vcard::{Config, ConversionService, DirectorySink};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?.with_args(std::env::args().skip(1));

    // Initialize logging (stderr only)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        input = %config.input_path.display(),
        output = %config.output_dir.display(),
        encoding = %config.input_encoding,
        "Configuration loaded successfully"
    );

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let service = ConversionService::new(DirectorySink::new(&config.output_dir));
    let report = match service.convert_file(&config.input_path, &config.input_encoding) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to convert contacts: {}", e);
            return Err(e.into());
        }
    };

    if let Some(report_path) = &config.report_path {
        let json = report.to_json()?;
        std::fs::write(report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        info!(path = %report_path.display(), "Report written");
    }

    if !report.is_clean() {
        warn!(
            "{} of {} contacts were skipped",
            report.summary.rows_failed, report.summary.rows_total
        );
    }

    info!("Wrote {} vCards", report.summary.rows_written);
    Ok(())
}
