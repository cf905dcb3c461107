use crate::classify::{classify, DiscrepancyVerdict};
use crate::domain::{CanonicalContact, RawContact};
use crate::matching::{resolve, MatchOptions, MatchOutcome, MatchedBy};
use crate::roster::RosterIndex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub official_count: usize,
    pub suspect_count: usize,
    pub skipped_official_empty_name: usize,
    pub skipped_suspect_empty_name: usize,
    pub duplicate_official_names: Vec<String>,
    pub empty_roster: bool,
    pub options: MatchOptions,
    pub fuzzy_matches: Vec<FuzzyMatchNote>,
    // Ordered like the suspect input.
    pub verdicts: Vec<DiscrepancyVerdict>,
}

/// A suspect that only resolved through name similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyMatchNote {
    pub suspect_name: String,
    pub official_name: String,
    pub score: f64,
}

impl ComparisonReport {
    pub fn has_discrepancies(&self) -> bool {
        !self.verdicts.is_empty()
    }
}

/// Flags suspect contacts that are missing from, or disagree with, the official roster.
pub fn find_suspect_contacts(
    official: &[RawContact],
    suspect: &[RawContact],
    options: MatchOptions,
) -> Vec<DiscrepancyVerdict> {
    compare(official, suspect, options).verdicts
}

pub fn compare(
    official: &[RawContact],
    suspect: &[RawContact],
    options: MatchOptions,
) -> ComparisonReport {
    let index = RosterIndex::build(official.iter().map(CanonicalContact::from));

    let mut report = ComparisonReport {
        official_count: official.len(),
        suspect_count: suspect.len(),
        skipped_official_empty_name: index.skipped_empty_names(),
        skipped_suspect_empty_name: 0,
        duplicate_official_names: index.duplicate_names().to_vec(),
        empty_roster: index.is_empty(),
        options,
        fuzzy_matches: Vec::new(),
        verdicts: Vec::new(),
    };

    for raw in suspect {
        let contact = raw.normalize();
        if !contact.is_indexable() {
            report.skipped_suspect_empty_name += 1;
            continue;
        }

        let outcome = resolve(&contact, &index, options);
        if let MatchOutcome::Resolved {
            candidate,
            matched_by: MatchedBy::Fuzzy { score },
        } = outcome
        {
            report.fuzzy_matches.push(FuzzyMatchNote {
                suspect_name: contact.name().to_string(),
                official_name: candidate.name().to_string(),
                score,
            });
        }

        if let Some(verdict) = classify(&contact, &outcome) {
            report.verdicts.push(verdict);
        }
    }

    report
}
