//! Implements the setup phase of the board.
use log::debug;

use crate::{
    board::{grid::Grid, Board, Coordinate, SetupError},
    fleet::{self, ShipPlacement, ShipRecord},
    ships::{Ship, ShipKind, Span},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow guessing.
#[derive(Debug, Default)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ships placed so far. Cells refer to ships by their index in this list.
    ships: Vec<Ship>,
}

impl BoardSetup {
    /// Begin setup with an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a full fleet description and place every ship in order. Stops at the
    /// first validation failure or overlapping ship.
    pub fn from_records(records: &[ShipRecord]) -> Result<Self, SetupError> {
        let mut setup = Self::new();
        for placement in fleet::validate(records)? {
            setup.place(&placement)?;
        }
        Ok(setup)
    }

    /// Attempts to place a ship. The endpoints are converted to grid coordinates and
    /// every cell between them must be unoccupied; if any is occupied, nothing is
    /// written and an [`Overlapping`][SetupError::Overlapping] error is returned.
    pub fn place(&mut self, placement: &ShipPlacement) -> Result<(), SetupError> {
        let record = placement.record();
        let kind = placement.kind();
        let ((x1, y1), (x2, y2)) = (record.start(), record.end());
        let (start, end) = match (
            Coordinate::from_input(x1, y1),
            Coordinate::from_input(x2, y2),
        ) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(SetupError::OutOfBounds(record.text().to_owned())),
        };
        let span = Span::between(start, end)
            .ok_or_else(|| SetupError::NotHorizontalOrVertical(record.text().to_owned()))?;
        if span.len() != kind.len() {
            return Err(SetupError::IncorrectSize(record.text().to_owned()));
        }
        if span.clone().any(|coord| self.grid[coord].ship.is_some()) {
            return Err(SetupError::Overlapping(record.text().to_owned()));
        }
        // Already ensured that every position is free.
        let idx = self.ships.len();
        for coord in span {
            self.grid[coord].ship = Some(idx);
        }
        debug!(
            "placed {} from {:?} to {:?}",
            kind,
            (start.row(), start.col()),
            (end.row(), end.col())
        );
        self.ships.push(Ship::new(kind, [start, end]));
        Ok(())
    }

    /// Checks if this board is ready to start: exactly one ship of every kind has been
    /// placed.
    pub fn ready(&self) -> bool {
        self.ships.len() == ShipKind::ALL.len()
            && ShipKind::ALL
                .iter()
                .all(|&kind| self.ships.iter().filter(|s| s.kind() == kind).count() == 1)
    }

    /// Get the ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Tries to start the game. If the fleet is complete, returns a [`Board`] with the
    /// current placements, otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Board {
                grid: self.grid,
                ships: self.ships,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;

    fn placement(line: &str) -> ShipPlacement {
        let record: ShipRecord = line.parse().unwrap();
        let kind = record.kind().parse().unwrap();
        ShipPlacement::new(kind, record)
    }

    fn occupied(setup: &BoardSetup) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (row, cells_in_row) in setup.grid.rows().enumerate() {
            for (col, cell) in cells_in_row.iter().enumerate() {
                if cell.ship.is_some() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn places_converted_span() {
        let mut setup = BoardSetup::new();
        // x = 2, y from 0 to 2: rows 9..=7 of column 2.
        setup.place(&placement("S 2 0 2 2")).unwrap();
        assert_eq!(occupied(&setup), vec![(7, 2), (8, 2), (9, 2)]);
        let ship = &setup.ships()[0];
        assert_eq!(ship.kind(), ShipKind::Submarine);
        assert_eq!(ship.remaining(), 3);
        assert_eq!(
            ship.ends(),
            &[Coordinate::new(9, 2).unwrap(), Coordinate::new(7, 2).unwrap()]
        );
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        let mut forward = BoardSetup::new();
        forward.place(&placement("B 1 5 4 5")).unwrap();
        let mut backward = BoardSetup::new();
        backward.place(&placement("B 4 5 1 5")).unwrap();
        assert_eq!(occupied(&forward), occupied(&backward));
        assert_eq!(occupied(&forward), vec![(4, 1), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn overlap_is_rejected_without_writing() {
        let mut setup = BoardSetup::new();
        setup.place(&placement("A 0 4 4 4")).unwrap();
        let before = setup.grid.clone();
        let err = setup.place(&placement("D 2 3 2 5")).unwrap_err();
        assert_eq!(err, SetupError::Overlapping("D 2 3 2 5".to_owned()));
        assert_eq!(setup.grid, before);
        assert_eq!(setup.ships().len(), 1);
    }

    #[test]
    fn unvalidated_placements_are_still_checked() {
        let mut setup = BoardSetup::new();
        assert!(matches!(
            setup.place(&placement("P 0 9 0 10")),
            Err(SetupError::OutOfBounds(_))
        ));
        assert!(matches!(
            setup.place(&placement("P 0 0 1 1")),
            Err(SetupError::NotHorizontalOrVertical(_))
        ));
        assert!(matches!(
            setup.place(&placement("P 0 0 0 2")),
            Err(SetupError::IncorrectSize(_))
        ));
        assert!(setup.ships().is_empty());
    }

    #[test]
    fn from_records_halts_on_overlap() {
        let records = fleet::parse_records(&[
            "A 0 0 0 4",
            "B 1 0 1 3",
            "S 0 2 2 2",
            "D 3 0 3 2",
            "P 4 0 4 1",
        ])
        .unwrap();
        assert_eq!(
            BoardSetup::from_records(&records).unwrap_err(),
            SetupError::Overlapping("S 0 2 2 2".to_owned())
        );
    }

    #[test]
    fn start_requires_full_fleet() {
        let mut setup = BoardSetup::new();
        setup.place(&placement("P 0 0 0 1")).unwrap();
        let setup = setup.start().unwrap_err();
        assert!(!setup.ready());

        let records = fleet::parse_records(&[
            "P 4 0 4 1",
            "D 3 0 3 2",
            "S 2 0 2 2",
            "B 1 0 1 3",
            "A 0 0 0 4",
        ])
        .unwrap();
        let setup = BoardSetup::from_records(&records).unwrap();
        assert!(setup.ready());
        let board = setup.start().unwrap();
        assert_eq!(
            board.get_coord(Coordinate::new(9, 0).unwrap()).state(),
            CellState::UnguessedOccupied
        );
    }
}
