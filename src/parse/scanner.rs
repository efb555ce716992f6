//! Row/column scanning of the raw grid text.

use crate::{
    foundation::core::{Cell, Extent},
    parse::alphabet::Glyph,
};

/// Character that terminates a row.
pub const ROW_SEPARATOR: char = '\n';

/// A glyph seen at a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub glyph: Glyph,
    pub cell: Cell,
}

/// Successful scan: grid size plus glyph observations in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    pub extent: Extent,
    pub observations: Vec<Observation>,
}

/// Why a grid was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// The input contained no rows.
    Empty,
    /// `row` occupied `found` columns where the first row occupied `expected`.
    RowWidthMismatch {
        row: u32,
        expected: u32,
        found: u32,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no rows"),
            Self::RowWidthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, expected {expected} (from row 0)"
            ),
        }
    }
}

/// Scans `text` into an [`Extent`] and the list of glyph observations.
///
/// Whitespace other than [`ROW_SEPARATOR`] takes no column. Any other character takes one;
/// only alphabet glyphs are recorded. A trailing row without a separator still counts.
pub fn scan(text: impl IntoIterator<Item = char>) -> Result<Scan, ScanError> {
    let mut observations = Vec::new();
    let mut expected: Option<u32> = None;
    let mut row = 0u32;
    let mut column = 0u32;

    let mut finish_row = |row: &mut u32, column: &mut u32| -> Result<(), ScanError> {
        match expected {
            None => expected = Some(*column),
            Some(width) if width != *column => {
                return Err(ScanError::RowWidthMismatch {
                    row: *row,
                    expected: width,
                    found: *column,
                });
            }
            Some(_) => {}
        }
        *column = 0;
        *row += 1;
        Ok(())
    };

    for c in text {
        if c == ROW_SEPARATOR {
            finish_row(&mut row, &mut column)?;
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        if let Some(glyph) = Glyph::new(c) {
            observations.push(Observation {
                glyph,
                cell: Cell::new(column, row),
            });
        }
        column += 1;
    }

    if column != 0 {
        finish_row(&mut row, &mut column)?;
    }

    match expected {
        None => Err(ScanError::Empty),
        Some(columns) => Ok(Scan {
            extent: Extent::new(row, columns),
            observations,
        }),
    }
}
