pub mod resolve;
pub mod similarity;

pub use resolve::{
    resolve, validate_threshold, MatchOptions, MatchOutcome, MatchedBy, DEFAULT_FUZZY_THRESHOLD,
};
pub use similarity::similarity_ratio;
