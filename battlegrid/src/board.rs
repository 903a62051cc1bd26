//! Types that make up the game board.

use std::fmt;

use log::trace;

use crate::{
    fleet::ShipRecord,
    ships::{Ship, ShipKind},
};

use self::grid::Grid;
pub use self::{
    coordinate::{convert, Coordinate},
    errors::SetupError,
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// The four states a cell can be in during play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    UnguessedEmpty,
    UnguessedOccupied,
    GuessedEmpty,
    GuessedOccupied,
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was guessed.
    guessed: bool,

    /// The ship that occupies this cell if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been guessed previously.
    pub fn guessed(&self) -> bool {
        self.guessed
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }

    /// Combine the guessed flag and occupancy into one state.
    pub fn state(&self) -> CellState {
        match (self.guessed, self.ship.is_some()) {
            (false, false) => CellState::UnguessedEmpty,
            (false, true) => CellState::UnguessedOccupied,
            (true, false) => CellState::GuessedEmpty,
            (true, true) => CellState::GuessedOccupied,
        }
    }
}

/// Result of a guess at an on-board cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The cell was empty.
    Miss,
    /// The cell was empty and had already been guessed.
    MissAgain,
    /// The shot hit the ship with the given kind, but did not sink it.
    Hit(ShipKind),
    /// The cell holds part of the given ship and had already been guessed.
    HitAgain(ShipKind),
    /// The shot hit the last intact segment of the given ship.
    Sunk(ShipKind),
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotOutcome::Miss => f.write_str("miss"),
            ShotOutcome::MissAgain => f.write_str("miss (again)"),
            ShotOutcome::Hit(_) => f.write_str("hit"),
            ShotOutcome::HitAgain(_) => f.write_str("hit (again)"),
            ShotOutcome::Sunk(kind) => write!(f, "{} sunk", kind),
        }
    }
}

/// The board during play: the grid and the fleet placed on it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Every placed ship, including sunk ones. Cells hold indexes into this list.
    ships: Vec<Ship>,
}

impl Board {
    /// Validate and place a fleet description, producing a board ready for play.
    pub fn from_records(records: &[ShipRecord]) -> Result<Self, SetupError> {
        // Validation guarantees one ship of each kind, so the setup is always ready.
        BoardSetup::from_records(records)?
            .start()
            .map_err(|_| SetupError::FleetComposition)
    }

    /// Returns true if all ships have been sunk.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// Get all ships on this board in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get an iterator over the ships that have not been sunk.
    pub fn afloat(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.sunk())
    }

    /// Get a reference to the cell at the given coordinate.
    pub fn get_coord(&self, coord: Coordinate) -> CellRef {
        let cell = &self.grid[coord];
        CellRef {
            coord,
            guessed: cell.guessed,
            ship: cell.ship.map(|idx| &self.ships[idx]),
        }
    }

    /// Fire a shot at the given cell. Repeated shots at a cell report `MissAgain` or
    /// `HitAgain` and change nothing.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        let cell = &mut self.grid[coord];
        let first = !cell.guessed;
        cell.guessed = true;
        let outcome = match (cell.ship, first) {
            (None, true) => ShotOutcome::Miss,
            (None, false) => ShotOutcome::MissAgain,
            (Some(idx), false) => ShotOutcome::HitAgain(self.ships[idx].kind()),
            (Some(idx), true) => {
                let ship = &mut self.ships[idx];
                if ship.hit() {
                    ShotOutcome::Sunk(ship.kind())
                } else {
                    ShotOutcome::Hit(ship.kind())
                }
            }
        };
        trace!("shot at {:?}: {}", (coord.row(), coord.col()), outcome);
        outcome
    }
}

impl fmt::Display for Board {
    /// Render the board row by row, showing the kind letter of each occupied cell and
    /// `*` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match cell.ship {
                    Some(idx) => write!(f, "{}", self.ships[idx].kind())?,
                    None => f.write_str("*")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::parse_records;

    fn board() -> Board {
        let records = parse_records(&[
            "A 0 0 0 4",
            "B 1 0 1 3",
            "S 2 0 2 2",
            "D 3 0 3 2",
            "P 4 0 4 1",
        ])
        .unwrap();
        Board::from_records(&records).unwrap()
    }

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn miss_then_miss_again() {
        let mut board = board();
        assert_eq!(board.get_coord(c(0, 0)).state(), CellState::UnguessedEmpty);
        assert_eq!(board.shoot(c(0, 0)), ShotOutcome::Miss);
        assert_eq!(board.get_coord(c(0, 0)).state(), CellState::GuessedEmpty);
        let before = board.clone();
        assert_eq!(board.shoot(c(0, 0)), ShotOutcome::MissAgain);
        assert_eq!(board, before);
    }

    #[test]
    fn repeated_hit_decrements_once() {
        let mut board = board();
        assert_eq!(board.shoot(c(9, 0)), ShotOutcome::Hit(ShipKind::AircraftCarrier));
        assert_eq!(
            board.shoot(c(9, 0)),
            ShotOutcome::HitAgain(ShipKind::AircraftCarrier)
        );
        let carrier = board.get_coord(c(9, 0)).ship().unwrap();
        assert_eq!(carrier.remaining(), 4);
        assert_eq!(board.get_coord(c(9, 0)).state(), CellState::GuessedOccupied);
    }

    #[test]
    fn sinking_every_ship_defeats_the_board() {
        let mut board = board();
        let cells: Vec<_> = board
            .ships()
            .iter()
            .map(|ship| ship.ends()[0])
            .collect();
        assert!(!board.defeated());
        for (row, col) in (5..10)
            .map(|row| (row, 0))
            .chain((6..10).map(|row| (row, 1)))
            .chain((7..10).map(|row| (row, 2)))
            .chain((7..10).map(|row| (row, 3)))
            .chain((8..10).map(|row| (row, 4)))
        {
            board.shoot(c(row, col));
        }
        assert!(board.defeated());
        assert_eq!(board.afloat().count(), 0);
        assert_eq!(board.ships().len(), 5);
        assert!(cells
            .into_iter()
            .all(|coord| board.get_coord(coord).state() == CellState::GuessedOccupied));
    }

    #[test]
    fn last_segment_reports_sunk() {
        let mut board = board();
        assert_eq!(board.shoot(c(8, 4)), ShotOutcome::Hit(ShipKind::PatrolBoat));
        assert_eq!(board.shoot(c(9, 4)), ShotOutcome::Sunk(ShipKind::PatrolBoat));
        assert_eq!(board.shoot(c(8, 4)), ShotOutcome::HitAgain(ShipKind::PatrolBoat));
        assert_eq!(board.afloat().count(), 4);
    }

    #[test]
    fn outcome_text() {
        assert_eq!(ShotOutcome::Miss.to_string(), "miss");
        assert_eq!(ShotOutcome::MissAgain.to_string(), "miss (again)");
        assert_eq!(ShotOutcome::Hit(ShipKind::Destroyer).to_string(), "hit");
        assert_eq!(
            ShotOutcome::HitAgain(ShipKind::Destroyer).to_string(),
            "hit (again)"
        );
        assert_eq!(ShotOutcome::Sunk(ShipKind::Destroyer).to_string(), "D sunk");
    }

    #[test]
    fn renders_rows_top_to_bottom() {
        let rendered = board().to_string();
        let rows: Vec<_> = rendered.lines().collect();
        assert_eq!(rows.len(), BOARD_SIZE);
        assert_eq!(rows[0], "* * * * * * * * * *");
        assert_eq!(rows[5], "A * * * * * * * * *");
        assert_eq!(rows[6], "A B * * * * * * * *");
        assert_eq!(rows[7], "A B S D * * * * * *");
        assert_eq!(rows[9], "A B S D P * * * * *");
        assert!(rendered.ends_with('\n'));
    }
}
