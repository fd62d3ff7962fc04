//! CSV import/export functionality

use crate::error::{ContactgridError, Result};
use contactgrid_engine::engine::{CellValue, Grid};
use std::io::Write;
use std::path::Path;

const MAX_CSV_FILE_BYTES: u64 = 64 * 1_048_576; // 64 MiB

/// Read a CSV file into a rectangular grid of cells.
pub fn parse_csv(path: &Path) -> Result<Grid<CellValue>> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_CSV_FILE_BYTES {
        return Err(ContactgridError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Refusing to read {}: CSV file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CSV_FILE_BYTES
            ),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_csv_content(&content)
}

/// Parse CSV text into a grid. Short rows are padded with empty cells.
///
/// A leading byte order mark ("CSV UTF-8" exports) is dropped.
pub fn parse_csv_content(content: &str) -> Result<Grid<CellValue>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let records = parse_records(content)?;
    if records.is_empty() {
        return Err(ContactgridError::EmptyCsv);
    }

    let width = records.iter().map(Vec::len).max().unwrap_or(0);
    let rows = records
        .into_iter()
        .map(|record| {
            let mut cells: Vec<CellValue> = record.iter().map(|f| parse_csv_field(f)).collect();
            cells.resize(width, CellValue::Empty);
            cells
        })
        .collect();

    Ok(Grid::from_rows(rows)?)
}

/// Split CSV text into records, handling quoted fields.
///
/// Quoted fields may span lines; contact cells often carry a line break
/// between the name and the email.
pub(crate) fn parse_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut line = 1usize;
    let mut quote_line = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                field_was_quoted = true;
                quote_line = line;
            }
            ',' => fields.push(finish_field(&mut current, &mut field_was_quoted)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                fields.push(finish_field(&mut current, &mut field_was_quoted));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(ContactgridError::Parse {
            line: quote_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !current.is_empty() || field_was_quoted || !fields.is_empty() {
        fields.push(finish_field(&mut current, &mut field_was_quoted));
        records.push(fields);
    }
    Ok(records)
}

fn finish_field(current: &mut String, field_was_quoted: &mut bool) -> String {
    let field = std::mem::take(current);
    if std::mem::replace(field_was_quoted, false) {
        field
    } else {
        field.trim().to_string()
    }
}

/// Parse a CSV field into a cell value
/// - Empty string -> Empty
/// - Finite number without leading zeros -> Number
/// - Otherwise -> Text
pub(crate) fn parse_csv_field(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }

    // Quoted fields keep surrounding whitespace; such cells are text.
    let trimmed = field.trim();
    if field != trimmed {
        return CellValue::new_text(field);
    }

    // Preserve strings that look like numbers but have leading zeros (e.g., "007")
    // unless they're just "0" or start with "0."
    if trimmed.starts_with('0')
        && trimmed.len() > 1
        && !trimmed.starts_with("0.")
        && trimmed.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return CellValue::new_text(trimmed);
    }

    // "nan" and "inf" parse as floats but are names as far as we care.
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::new_text(trimmed),
    }
}

/// Write rows to a CSV file.
pub fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv_to(&mut file, rows)
}

/// Write rows as CSV to any writer.
pub fn write_csv_to<W: Write>(w: &mut W, rows: &[Vec<String>]) -> Result<()> {
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        writeln!(w, "{}", fields.join(","))?;
    }
    Ok(())
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    // Guard against CSV formula injection in spreadsheet apps.
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    let safe_field = if matches!(first_non_space, Some('=' | '+' | '-' | '@')) {
        format!("'{}", field)
    } else {
        field.to_string()
    };

    if safe_field.contains(',')
        || safe_field.contains('"')
        || safe_field.contains('\n')
        || safe_field.contains('\r')
    {
        format!("\"{}\"", safe_field.replace('"', "\"\""))
    } else {
        safe_field
    }
}
