use crate::domain::CanonicalContact;
use crate::error::CoreError;
use crate::matching::similarity::similarity_ratio;
use crate::roster::RosterIndex;
use serde::Serialize;

pub const DEFAULT_FUZZY_THRESHOLD: u8 = 90;
pub const MAX_FUZZY_THRESHOLD: u8 = 100;

/// Per-call matching parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchOptions {
    pub fuzzy_enabled: bool,
    pub fuzzy_threshold: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            fuzzy_enabled: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl MatchOptions {
    pub fn fuzzy(threshold: u8) -> Self {
        Self {
            fuzzy_enabled: true,
            fuzzy_threshold: threshold,
        }
    }
}

pub fn validate_threshold(value: i64) -> Result<u8, CoreError> {
    if !(0..=i64::from(MAX_FUZZY_THRESHOLD)).contains(&value) {
        return Err(CoreError::InvalidThreshold(value));
    }
    u8::try_from(value).map_err(|_| CoreError::InvalidThreshold(value))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchedBy {
    Exact,
    Fuzzy { score: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome<'a> {
    Resolved {
        candidate: &'a CanonicalContact,
        matched_by: MatchedBy,
    },
    Unresolved,
}

impl<'a> MatchOutcome<'a> {
    pub fn candidate(&self) -> Option<&'a CanonicalContact> {
        match self {
            MatchOutcome::Resolved { candidate, .. } => Some(candidate),
            MatchOutcome::Unresolved => None,
        }
    }
}

/// Finds the official record a suspect should be compared against.
///
/// Exact name lookup first; with fuzzy matching enabled, falls back to the
/// best-scoring roster name. Ties keep the earliest name in roster order.
pub fn resolve<'a>(
    suspect: &CanonicalContact,
    index: &'a RosterIndex,
    options: MatchOptions,
) -> MatchOutcome<'a> {
    if let Some(candidate) = index.lookup_exact(suspect.name()) {
        return MatchOutcome::Resolved {
            candidate,
            matched_by: MatchedBy::Exact,
        };
    }

    if !options.fuzzy_enabled {
        return MatchOutcome::Unresolved;
    }

    let mut best: Option<(&'a CanonicalContact, f64)> = None;
    for candidate in index.contacts() {
        let score = similarity_ratio(suspect.name(), candidate.name());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    match best {
        Some((candidate, score)) if score >= f64::from(options.fuzzy_threshold) => {
            MatchOutcome::Resolved {
                candidate,
                matched_by: MatchedBy::Fuzzy { score },
            }
        }
        _ => MatchOutcome::Unresolved,
    }
}
