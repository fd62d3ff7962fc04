//! Markdown export functionality

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Write rows to a markdown file. The first row is the table header.
pub fn write_markdown(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_markdown_to(&mut file, rows)
}

/// Write rows as a markdown table to any writer.
pub fn write_markdown_to<W: Write>(w: &mut W, rows: &[Vec<String>]) -> Result<()> {
    writeln!(w, "# Contacts")?;
    writeln!(w)?;

    let Some((header, body)) = rows.split_first() else {
        writeln!(w, "*No contacts*")?;
        return Ok(());
    };
    if body.is_empty() {
        writeln!(w, "*No contacts*")?;
        return Ok(());
    }

    write!(w, "|")?;
    for name in header {
        write!(w, " {} |", escape_markdown(name))?;
    }
    writeln!(w)?;

    write!(w, "|")?;
    for _ in header {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in body {
        write!(w, "|")?;
        for value in row {
            write!(w, " {} |", escape_markdown(value))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
