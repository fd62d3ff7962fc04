//! contactgrid-core - Contact sheet model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{ContactRow, ContactSheet, HEADERS, SortOptions, eval_function};
pub use error::{ContactgridError, Result};

pub use contactgrid_engine::engine::CellRef;
