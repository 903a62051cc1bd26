//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::ops::{Index, IndexMut};

use crate::board::{Coordinate, BOARD_SIZE};

/// Index of a ship in the board's ship list.
pub(super) type ShipIdx = usize;

/// A single cell in the grid.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(super) struct GridCell {
    /// Index of the ship that occupies this cell, if any. Only written during setup.
    pub(super) ship: Option<ShipIdx>,

    /// Whether this cell has been guessed. Never reset once set.
    pub(super) guessed: bool,
}

/// Fixed-size grid structure shared between [`BoardSetup`] and [`Board`].
///
/// [`BoardSetup`]: crate::board::setup::BoardSetup
/// [`Board`]: crate::board::Board
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Cells that make up this board, row-major.
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    fn linearize(coord: Coordinate) -> usize {
        coord.row() * BOARD_SIZE + coord.col()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

// Coordinates can only be constructed in bounds, so indexing never panics.
impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[Self::linearize(coord)]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        &mut self.cells[Self::linearize(coord)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_and_unguessed() {
        let grid = Grid::new();
        assert_eq!(grid.rows().count(), BOARD_SIZE);
        assert!(grid.rows().all(|row| {
            row.len() == BOARD_SIZE && row.iter().all(|cell| *cell == GridCell::default())
        }));
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = Grid::new();
        grid[Coordinate::new(2, 7).unwrap()].guessed = true;
        let row = grid.rows().nth(2).unwrap();
        assert!(row[7].guessed);
        assert_eq!(row.iter().filter(|cell| cell.guessed).count(), 1);
    }
}
