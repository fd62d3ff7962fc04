use super::{ContactSheet, SortOptions};
use crate::error::Result;
use crate::storage::{parse_csv, write_csv, write_markdown};
use std::path::Path;

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

impl ContactSheet {
    /// Read a CSV file and sort it.
    pub fn load_csv(path: &Path, options: &SortOptions) -> Result<Self> {
        let source = parse_csv(path)?;
        tracing::debug!(
            path = %path.display(),
            rows = source.height(),
            cols = source.width(),
            "loaded csv"
        );
        Self::sort(&source, options)
    }

    /// Write the sorted sheet. `.md`/`.markdown` paths get a markdown table,
    /// anything else CSV.
    pub fn save(&self, path: &Path) -> Result<()> {
        let rows = self.display_rows();
        if is_markdown(path) {
            write_markdown(path, &rows)
        } else {
            write_csv(path, &rows)
        }
    }
}
