//! Error types for contactgrid core.

use contactgrid_engine::engine::ExtractError;
use thiserror::Error;

/// Errors that can occur while loading, sorting or saving a contact sheet
#[derive(Error, Debug)]
pub enum ContactgridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("CSV file is empty")]
    EmptyCsv,

    #[error("Column {column} is outside the sheet ({width} columns)")]
    ColumnOutOfRange { column: String, width: usize },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

pub type Result<T> = std::result::Result<T, ContactgridError>;
