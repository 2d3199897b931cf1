//! Grid configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 8;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 8;

/// Dimensions of a backpack grid.
///
/// Cells are addressed `(x, y)` with `x` in `0..cols` and `y` in `0..rows`.
///
/// ```rust
/// use backpack_core::GridConfig;
///
/// let grid = GridConfig::new().with_rows(4).with_cols(6);
/// assert_eq!(grid.cell_count(), 24);
/// assert!(grid.contains(5, 3));
/// assert!(!grid.contains(6, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Number of rows (height).
    pub rows: usize,

    /// Number of columns (width).
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridConfig {
    /// Creates the default 8 x 8 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid of `rows x cols`.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Sets the row count.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the column count.
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns whether `(x, y)` addresses a cell of this grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.cols as u64 && (y as u64) < self.rows as u64
    }

    /// Validates the dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidGrid(format!(
                "Grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}
