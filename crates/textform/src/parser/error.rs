//! Parse error types for message formats.

use thiserror::Error;

/// An error that occurred while parsing a message format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A malformed conversion specification.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },
}
