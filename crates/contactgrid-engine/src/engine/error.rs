//! Error types for cell extraction.

use std::fmt;
use thiserror::Error;

/// The field an extraction rule was looking for.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    EmailDomain,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
            Field::EmailDomain => "email domain",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while extracting a single cell
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("No {0} found")]
    NoMatch(Field),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ExtractError {
    /// Spreadsheet error value shown in place of the cell result.
    pub fn display_value(&self) -> &'static str {
        match self {
            ExtractError::NoMatch(_) => "#N/A",
            ExtractError::InvalidInput(_) => "#VALUE!",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
