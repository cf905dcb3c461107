pub mod csv;
pub mod error;
pub mod format;
pub mod html;
pub mod json;
pub mod xlsx;

pub use error::{IoError, Result};
pub use format::{ContactFormat, ReportFormat};

use rostercheck_core::{DiscrepancyVerdict, RawContact};
use std::fs;
use std::path::Path;

/// Reads a contact file, picking the parser from its extension.
pub fn load_contacts(path: &Path) -> Result<Vec<RawContact>> {
    let format = ContactFormat::from_path(path)?;
    let data = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_contacts(&data, format)
}

pub fn parse_contacts(data: &str, format: ContactFormat) -> Result<Vec<RawContact>> {
    match format {
        ContactFormat::Csv => csv::parse_contacts(data),
        ContactFormat::Json => json::parse_contacts(data),
    }
}

pub fn render_report(verdicts: &[DiscrepancyVerdict], format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Csv => csv::render_report(verdicts).map(String::into_bytes),
        ReportFormat::Json => json::render_report(verdicts).map(String::into_bytes),
        ReportFormat::Html => Ok(html::render_report(verdicts).into_bytes()),
        ReportFormat::Xlsx => xlsx::render_report(verdicts),
    }
}
