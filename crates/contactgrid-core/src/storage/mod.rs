//! CSV import/export and Markdown export

mod csv;
mod md;

pub use csv::{parse_csv, parse_csv_content, write_csv, write_csv_to};
pub use md::{write_markdown, write_markdown_to};
