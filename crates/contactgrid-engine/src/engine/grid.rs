//! Rectangular grids and element-wise broadcasting.
//!
//! A host hands over either one cell or a rectangular range. [`broadcast`]
//! applies a scalar rule to every cell and returns the same shape. Cells are
//! independent: a failing cell yields an error in its own position and the
//! rest of the range is still computed.

use super::cell::CellValue;
use super::cell_ref::CellRef;
use super::error::{ExtractError, Result};

/// Outcome of applying a rule to one cell.
pub type CellResult = Result<String>;

/// A rectangular block of cells, stored row by row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid<T> {
    width: usize,
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ExtractError::InvalidInput(format!(
                "grid is not rectangular: row {} has {} cells, expected {}",
                idx + 1,
                row.len(),
                width
            )));
        }
        Ok(Self { width, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, cell_ref: &CellRef) -> Option<&T> {
        self.rows.get(cell_ref.row)?.get(cell_ref.col)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Iterate over `(CellRef, &T)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &T)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (CellRef::new(col, row), cell))
        })
    }
}

/// Input to a contact function: one cell or a whole range.
#[derive(Clone, Debug, PartialEq)]
pub enum CellInput {
    Scalar(CellValue),
    Range(Grid<CellValue>),
}

impl From<&str> for CellInput {
    fn from(s: &str) -> Self {
        CellInput::Scalar(CellValue::from(s))
    }
}

impl From<CellValue> for CellInput {
    fn from(value: CellValue) -> Self {
        CellInput::Scalar(value)
    }
}

impl From<Grid<CellValue>> for CellInput {
    fn from(grid: Grid<CellValue>) -> Self {
        CellInput::Range(grid)
    }
}

/// Output of a contact function, shaped like its input.
#[derive(Clone, Debug, PartialEq)]
pub enum CellOutput {
    Scalar(CellResult),
    Range(Grid<CellResult>),
}

impl CellOutput {
    pub fn error_count(&self) -> usize {
        match self {
            CellOutput::Scalar(result) => usize::from(result.is_err()),
            CellOutput::Range(grid) => grid.cells().filter(|(_, r)| r.is_err()).count(),
        }
    }

    /// Render results as sheet values, errors as `#N/A` / `#VALUE!`.
    pub fn to_display(&self) -> Grid<String> {
        match self {
            CellOutput::Scalar(result) => Grid {
                width: 1,
                rows: vec![vec![display_value(result)]],
            },
            CellOutput::Range(grid) => grid.map(display_value),
        }
    }
}

/// Sheet-facing text for a cell result.
pub fn display_value(result: &CellResult) -> String {
    match result {
        Ok(s) => s.clone(),
        Err(e) => e.display_value().to_string(),
    }
}

/// Apply a scalar rule to every cell of `input`.
pub fn broadcast<F>(input: &CellInput, op: F) -> CellOutput
where
    F: Fn(&str) -> CellResult,
{
    let apply = |cell: &CellValue| cell.as_text().and_then(&op);
    match input {
        CellInput::Scalar(cell) => CellOutput::Scalar(apply(cell)),
        CellInput::Range(grid) => CellOutput::Range(grid.map(apply)),
    }
}
