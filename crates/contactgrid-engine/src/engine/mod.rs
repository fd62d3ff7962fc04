//! Contact extraction engine API.
//!
//! - [`CellValue`], [`Grid`] - Cells as handed over by a host sheet
//! - [`CellRef`] - Cell coordinates and column letters
//! - [`normalize`], [`normalize_company_name`] - Text cleanup pipelines
//! - [`ContactExtractor`] - First/last name, email, ".com" email, domain
//! - [`broadcast`] - Apply a scalar rule to a single cell or a whole range
//! - [`ExtractError`] - `NoMatch` / `InvalidInput`

mod cell;
mod cell_ref;
mod error;
mod extract;
mod grid;
mod normalize;

pub use cell::CellValue;
pub use cell_ref::CellRef;
pub use error::{ExtractError, Field, Result};
pub use extract::{
    ContactExtractor, extract_dotcom_email, extract_email, extract_email_domain,
    extract_first_name, extract_last_name,
};
pub use grid::{CellInput, CellOutput, CellResult, Grid, broadcast, display_value};
pub use normalize::{NormalizeOptions, normalize, normalize_company_name, normalize_with};
