use crate::error::{IoError, Result};
use rostercheck_core::{DiscrepancyVerdict, RawContact};

const NAME_COLUMNS: [&str; 2] = ["name", "Name"];
const EMAIL_COLUMNS: [&str; 2] = ["email", "Email"];
const PHONE_COLUMNS: [&str; 2] = ["phone", "Phone"];

/// Parses a headered CSV into raw contacts.
///
/// Lowercase headers win over capitalized ones when both are present and
/// non-empty. Missing columns and short rows read as empty strings.
pub fn parse_contacts(data: &str) -> Result<Vec<RawContact>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let name_cols = NAME_COLUMNS.map(position);
    let email_cols = EMAIL_COLUMNS.map(position);
    let phone_cols = PHONE_COLUMNS.map(position);

    let mut contacts = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |cols: &[Option<usize>; 2]| -> String {
            cols.iter()
                .flatten()
                .filter_map(|&idx| record.get(idx))
                .find(|value| !value.is_empty())
                .unwrap_or_default()
                .to_string()
        };
        contacts.push(RawContact::new(
            field(&name_cols),
            field(&email_cols),
            field(&phone_cols),
        ));
    }

    Ok(contacts)
}

pub fn render_report(verdicts: &[DiscrepancyVerdict]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(DiscrepancyVerdict::COLUMNS)?;
    for verdict in verdicts {
        writer.write_record(verdict.fields())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| IoError::Encode(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| IoError::Encode(err.to_string()))
}
