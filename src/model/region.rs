//! Rectangular grid regions used for holes and multi-tile ranges

use crate::io::error::MosaicError;
use std::fmt;
use std::str::FromStr;

/// A 1-based grid cell position
///
/// Rows are counted upward from the bottom course, columns left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Row index, 1 is the bottom row
    pub row: usize,
    /// Column index, 1 is the leftmost column
    pub column: usize,
}

impl GridCell {
    /// Create a grid cell position
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Inclusive rectangular range of grid cells
///
/// The end corner may precede the start corner; consumers go through
/// [`Region::start`] and [`Region::end`], which always return the
/// normalized corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Row of the first corner
    pub start_row: usize,
    /// Column of the first corner
    pub start_column: usize,
    /// Row of the opposite corner
    pub end_row: usize,
    /// Column of the opposite corner
    pub end_column: usize,
}

impl Region {
    /// Create a region from two corners in any order
    pub const fn new(
        start_row: usize,
        start_column: usize,
        end_row: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start_row,
            start_column,
            end_row,
            end_column,
        }
    }

    /// Lowest row and column covered
    pub fn start(&self) -> GridCell {
        GridCell::new(
            self.start_row.min(self.end_row),
            self.start_column.min(self.end_column),
        )
    }

    /// Highest row and column covered
    pub fn end(&self) -> GridCell {
        GridCell::new(
            self.start_row.max(self.end_row),
            self.start_column.max(self.end_column),
        )
    }

    /// Copy of this region with ordered corners
    pub fn normalized(&self) -> Self {
        let start = self.start();
        let end = self.end();
        Self::new(start.row, start.column, end.row, end.column)
    }

    /// Check whether a cell lies inside the region
    pub fn contains(&self, cell: GridCell) -> bool {
        let start = self.start();
        let end = self.end();
        (start.row..=end.row).contains(&cell.row)
            && (start.column..=end.column).contains(&cell.column)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}:{},{}",
            self.start_row, self.start_column, self.end_row, self.end_column
        )
    }
}

impl FromStr for Region {
    type Err = MosaicError;

    /// Parse `START_ROW,START_COLUMN:END_ROW,END_COLUMN`, or a single
    /// `ROW,COLUMN` cell
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || MosaicError::InvalidRegion {
            text: text.to_string(),
        };

        let parse_cell = |part: &str| -> Result<GridCell, MosaicError> {
            let (row, column) = part.split_once(',').ok_or_else(invalid)?;
            let row = row.trim().parse().map_err(|_parse_error| invalid())?;
            let column = column.trim().parse().map_err(|_parse_error| invalid())?;
            if row == 0 || column == 0 {
                return Err(invalid());
            }
            Ok(GridCell::new(row, column))
        };

        let (start, end) = match text.split_once(':') {
            Some((start, end)) => (parse_cell(start)?, parse_cell(end)?),
            None => {
                let cell = parse_cell(text)?;
                (cell, cell)
            }
        };

        Ok(Self::new(start.row, start.column, end.row, end.column))
    }
}
