//! contactgrid_engine - Contact field extraction for spreadsheet cells.
//!
//! Turns loosely formatted cells such as
//! `Dr. Ann (Annie) B. Lee, MBA (ann@lee.com)` into first name, last name,
//! email, ".com" email, email domain and company name. Every rule is a pure
//! function of one cell and can be broadcast over a rectangular range.

pub mod builtins;
pub mod engine;
