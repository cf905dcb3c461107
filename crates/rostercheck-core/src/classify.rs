use crate::domain::CanonicalContact;
use crate::matching::MatchOutcome;
use serde::Serialize;

pub const REASON_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscrepancyReason {
    NameNotFound,
    EmailMismatch,
    PhoneMismatch,
}

impl DiscrepancyReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiscrepancyReason::NameNotFound => "Name not found in official records",
            DiscrepancyReason::EmailMismatch => "Email mismatch",
            DiscrepancyReason::PhoneMismatch => "Phone mismatch",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Name not found in official records" => Some(DiscrepancyReason::NameNotFound),
            "Email mismatch" => Some(DiscrepancyReason::EmailMismatch),
            "Phone mismatch" => Some(DiscrepancyReason::PhoneMismatch),
            _ => None,
        }
    }

    pub const fn all() -> &'static [DiscrepancyReason] {
        &[
            DiscrepancyReason::NameNotFound,
            DiscrepancyReason::EmailMismatch,
            DiscrepancyReason::PhoneMismatch,
        ]
    }
}

/// One flagged suspect record. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscrepancyVerdict {
    pub name: String,
    pub suspect_email: String,
    pub suspect_phone: String,
    pub official_email: String,
    pub official_phone: String,
    pub reason: String,
}

impl DiscrepancyVerdict {
    pub const COLUMNS: [&'static str; 6] = [
        "name",
        "suspect_email",
        "suspect_phone",
        "official_email",
        "official_phone",
        "reason",
    ];

    pub fn fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.suspect_email.as_str(),
            self.suspect_phone.as_str(),
            self.official_email.as_str(),
            self.official_phone.as_str(),
            self.reason.as_str(),
        ]
    }

    pub fn reasons(&self) -> Vec<DiscrepancyReason> {
        self.reason
            .split(REASON_SEPARATOR)
            .filter_map(DiscrepancyReason::parse)
            .collect()
    }
}

/// Compares a suspect against its resolved official record.
///
/// Returns `None` when the candidate's email and phone both match.
pub fn classify(suspect: &CanonicalContact, outcome: &MatchOutcome<'_>) -> Option<DiscrepancyVerdict> {
    let Some(official) = outcome.candidate() else {
        return Some(build_verdict(
            suspect,
            "",
            "",
            &[DiscrepancyReason::NameNotFound],
        ));
    };

    let mut reasons = Vec::new();
    if suspect.email() != official.email() {
        reasons.push(DiscrepancyReason::EmailMismatch);
    }
    if suspect.phone() != official.phone() {
        reasons.push(DiscrepancyReason::PhoneMismatch);
    }

    if reasons.is_empty() {
        return None;
    }

    Some(build_verdict(
        suspect,
        official.email(),
        official.phone(),
        &reasons,
    ))
}

fn build_verdict(
    suspect: &CanonicalContact,
    official_email: &str,
    official_phone: &str,
    reasons: &[DiscrepancyReason],
) -> DiscrepancyVerdict {
    let reason = reasons
        .iter()
        .map(|reason| reason.as_str())
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR);

    DiscrepancyVerdict {
        name: suspect.name().to_string(),
        suspect_email: suspect.email().to_string(),
        suspect_phone: suspect.phone().to_string(),
        official_email: official_email.to_string(),
        official_phone: official_phone.to_string(),
        reason,
    }
}
