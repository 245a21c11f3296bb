// errors.rs
use std::fmt;

/// Errors from writing the final dataset or report out.
#[derive(Debug)]
pub enum ExportError {
    Io(String),
    Csv(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "I/O error: {msg}"),
            ExportError::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
