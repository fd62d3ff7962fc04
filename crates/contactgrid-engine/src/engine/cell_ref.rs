//! Cell coordinates and column letters.
//!
//! Coordinates are zero-indexed. They print in A1 notation ("B3") so log
//! lines and error messages point at the cell a user sees in their sheet.
//! Column settings are given as letters ("A", "ab") and parsed with
//! [`CellRef::parse_column`].

use std::fmt;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse column letters ("A", "b", "AA") into a 0-indexed column.
    pub fn parse_column(letters: &str) -> Option<usize> {
        let letters = letters.trim();
        if letters.is_empty() || !letters.bytes().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let mut col_acc = 0usize;
        for c in letters.to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        col_acc.checked_sub(1)
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}
