use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid fuzzy threshold: {0} (expected 0-100)")]
    InvalidThreshold(i64),
}
