//! Errors raised while processing stage input.

use thiserror::Error;

/// Errors that can occur while parsing or converting record data.
///
/// A stage never recovers from these: upstream data is expected to be clean,
/// so a format violation means a pipeline bug or a corrupt partition and is
/// surfaced immediately instead of being dropped.
#[derive(Error, Debug)]
pub enum DataError {
    /// Line does not match the field count, separator structure, or
    /// digit-content rules of its stage. Carries the offending raw line.
    #[error("{message}: `{line}`")]
    LineFormat { message: String, line: String },

    /// None of the accepted calendar formats matched the given string.
    #[error("could not convert `{0}` to a timestamp")]
    TimestampParse(String),
}

impl DataError {
    pub fn line_format(message: impl Into<String>, line: impl Into<String>) -> Self {
        DataError::LineFormat {
            message: message.into(),
            line: line.into(),
        }
    }
}

/// Result type for record parsing and stage processing.
pub type Result<T> = std::result::Result<T, DataError>;
