pub mod classify;
pub mod compare;
pub mod domain;
pub mod error;
pub mod matching;
pub mod roster;

pub use classify::{classify, DiscrepancyReason, DiscrepancyVerdict};
pub use compare::{compare, find_suspect_contacts, ComparisonReport, FuzzyMatchNote};
pub use domain::*;
pub use error::CoreError;
pub use matching::{
    resolve, similarity_ratio, validate_threshold, MatchOptions, MatchOutcome, MatchedBy,
    DEFAULT_FUZZY_THRESHOLD,
};
pub use roster::RosterIndex;
