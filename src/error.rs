//! Error types for the contactgrid CLI

use thiserror::Error;

/// Errors in command-line usage
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid column '{0}': expected letters such as A or AB")]
    InvalidColumn(String),

    #[error("No input file given")]
    MissingInput,
}
