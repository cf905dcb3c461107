use crate::error::Result;
use rostercheck_core::{DiscrepancyVerdict, RawContact};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonContact {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl From<JsonContact> for RawContact {
    fn from(entry: JsonContact) -> Self {
        RawContact::new(
            entry.name.unwrap_or_default(),
            entry.email.unwrap_or_default(),
            entry.phone.unwrap_or_default(),
        )
    }
}

/// Parses a JSON array of `{name, email, phone}` objects. Absent or null
/// fields read as empty; extra keys are ignored.
pub fn parse_contacts(data: &str) -> Result<Vec<RawContact>> {
    let entries: Vec<JsonContact> = serde_json::from_str(data)?;
    Ok(entries.into_iter().map(RawContact::from).collect())
}

pub fn render_report(verdicts: &[DiscrepancyVerdict]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(verdicts)?;
    out.push('\n');
    Ok(out)
}
