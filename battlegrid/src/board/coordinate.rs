//! Conversion from the input coordinate scheme to grid positions.
//!
//! Fleet descriptions and guesses address cells with `x` counting columns from the
//! left edge and `y` counting rows up from the bottom edge. The grid itself is stored
//! row-major from the top-left corner, so every input pair goes through [`convert`]
//! before it touches the grid.

use std::convert::TryFrom;

use crate::board::BOARD_SIZE;

/// Convert an input `(x, y)` pair into a `(row, col)` pair.
///
/// The input `x` becomes the column unchanged. The row is reflected around the middle
/// of the board. The result is not bounds checked; use [`Coordinate::from_input`] for
/// that.
pub fn convert(x: i32, y: i32) -> (i64, i64) {
    let (x, y) = (i64::from(x), i64::from(y));
    let row = if y > 4 {
        y + 1 - 2 * (y - 4)
    } else {
        y + 1 + 2 * (4 - y)
    };
    (row, x)
}

/// Position of a cell in the grid, counted from the top-left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`], returning `None` if either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Convert an input `(x, y)` pair with [`convert`] and bounds check the result.
    pub fn from_input(x: i32, y: i32) -> Option<Self> {
        let (row, col) = convert(x, y);
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Self::new(row, col),
            _ => None,
        }
    }

    /// Get back the input `(x, y)` pair that addresses this cell.
    pub fn to_input(self) -> (i32, i32) {
        // Both indices are below BOARD_SIZE, so they fit.
        (self.col as i32, (BOARD_SIZE - 1 - self.row) as i32)
    }

    /// Row index, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
