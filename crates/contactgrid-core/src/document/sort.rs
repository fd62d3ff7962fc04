use super::{ContactRow, ContactSheet, HEADERS, SortOptions};
use crate::error::{ContactgridError, Result};
use contactgrid_engine::engine::{
    CellRef, CellResult, CellValue, ContactExtractor, Grid, display_value,
};

type FieldOp = fn(&ContactExtractor, &str) -> CellResult;

fn check_column(col: usize, width: usize) -> Result<()> {
    if col >= width {
        return Err(ContactgridError::ColumnOutOfRange {
            column: CellRef::col_to_letters(col),
            width,
        });
    }
    Ok(())
}

fn sort_row(
    extractor: &ContactExtractor,
    contact: &CellValue,
    company: Option<&CellValue>,
) -> ContactRow {
    let text = contact.as_text();
    let field = |op: FieldOp| text.clone().and_then(|t| op(extractor, t));

    ContactRow {
        first_name: field(ContactExtractor::first_name),
        last_name: field(ContactExtractor::last_name),
        email: field(ContactExtractor::email),
        dotcom_email: field(ContactExtractor::dotcom_email),
        email_domain: field(ContactExtractor::email_domain),
        company_name: match company {
            Some(cell) => cell
                .as_text()
                .map(|t| extractor.normalize_company_name(t)),
            None => Ok(String::new()),
        },
    }
}

impl ContactSheet {
    /// Sort every data row of `source` into the six contact columns.
    ///
    /// Cells fail independently: a row whose contact text has no email still
    /// gets its first name, and one bad row never stops the sheet.
    pub fn sort(source: &Grid<CellValue>, options: &SortOptions) -> Result<Self> {
        let width = source.width();
        check_column(options.contact_column, width)?;
        if let Some(col) = options.company_column {
            check_column(col, width)?;
        }

        let extractor = ContactExtractor::new(options.normalize);
        let first_data_row = usize::from(options.has_header);

        let mut rows = Vec::with_capacity(source.height().saturating_sub(first_data_row));
        for (row_idx, cells) in source.rows().iter().enumerate().skip(first_data_row) {
            let contact = &cells[options.contact_column];
            let company = options.company_column.map(|col| &cells[col]);
            let row = sort_row(&extractor, contact, company);

            for (header, result) in HEADERS.iter().zip(row.fields()) {
                if let Err(e) = result {
                    let col = match (*header, options.company_column) {
                        ("Company Name", Some(col)) => col,
                        _ => options.contact_column,
                    };
                    tracing::debug!(
                        cell = %CellRef::new(col, row_idx),
                        column = *header,
                        error = %e,
                        "extraction failed"
                    );
                }
            }
            rows.push(row);
        }

        let sheet = Self { rows };
        tracing::info!(
            contacts = sheet.rows.len(),
            errors = sheet.error_count(),
            "sorted contact sheet"
        );
        Ok(sheet)
    }

    /// Number of failed cells across all rows.
    pub fn error_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.fields())
            .filter(|result| result.is_err())
            .count()
    }

    /// Header row plus one row per contact, errors as sheet error values.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(HEADERS.iter().map(|h| h.to_string()).collect());
        for row in &self.rows {
            out.push(row.fields().into_iter().map(display_value).collect());
        }
        out
    }
}
