use crate::error::{IoError, Result};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormat {
    Csv,
    Json,
}

impl ContactFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(ContactFormat::Csv),
            "json" => Ok(ContactFormat::Json),
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Html,
    Xlsx,
}

impl ReportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Xlsx => "xlsx",
        }
    }

    /// Binary formats cannot be streamed to a terminal.
    pub const fn is_binary(self) -> bool {
        matches!(self, ReportFormat::Xlsx)
    }
}

impl FromStr for ReportFormat {
    type Err = IoError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "html" | "htm" => Ok(ReportFormat::Html),
            "xlsx" => Ok(ReportFormat::Xlsx),
            other => Err(IoError::UnsupportedFormat(other.to_string())),
        }
    }
}
