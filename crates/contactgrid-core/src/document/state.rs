use contactgrid_engine::engine::{CellResult, NormalizeOptions};

/// Output columns of a sorted contact sheet, in order.
pub const HEADERS: [&str; 6] = [
    "First Name",
    "Last Name",
    "Email",
    ".com Emails",
    "Email Host",
    "Company Name",
];

/// The six fields extracted from one source row.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRow {
    pub first_name: CellResult,
    pub last_name: CellResult,
    pub email: CellResult,
    pub dotcom_email: CellResult,
    pub email_domain: CellResult,
    pub company_name: CellResult,
}

impl ContactRow {
    /// Fields in `HEADERS` order.
    pub fn fields(&self) -> [&CellResult; 6] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.dotcom_email,
            &self.email_domain,
            &self.company_name,
        ]
    }
}

/// Where to find contact data in the source grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortOptions {
    /// Column holding the "Name (email)" text (0-indexed)
    pub contact_column: usize,
    /// Column holding the company name, if any
    pub company_column: Option<usize>,
    /// Skip the first source row
    pub has_header: bool,
    pub normalize: NormalizeOptions,
}

/// A source grid sorted into the six contact columns.
#[derive(Clone, Debug)]
pub struct ContactSheet {
    /// One entry per data row of the source grid
    pub rows: Vec<ContactRow>,
}
