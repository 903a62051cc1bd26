use std::collections::HashSet;

use log::debug;

use crate::{
    board::{SetupError, BOARD_SIZE},
    fleet::ShipRecord,
    ships::ShipKind,
};

/// A record that passed every fleet check, paired with its parsed kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipPlacement {
    kind: ShipKind,
    record: ShipRecord,
}

impl ShipPlacement {
    pub(crate) fn new(kind: ShipKind, record: ShipRecord) -> Self {
        Self { kind, record }
    }

    /// Kind of ship being placed.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// The record the placement came from.
    pub fn record(&self) -> &ShipRecord {
        &self.record
    }
}

/// Check that every coordinate of every record lies on the board.
pub fn check_bounds(records: &[ShipRecord]) -> Result<(), SetupError> {
    let on_board = |v: &i32| (0..BOARD_SIZE as i32).contains(v);
    match records
        .iter()
        .find(|record| !record.coords().iter().all(on_board))
    {
        Some(record) => Err(SetupError::OutOfBounds(record.text().to_owned())),
        None => Ok(()),
    }
}

/// Check that every record runs strictly along a row or a column. A record whose
/// endpoints are identical matches both and is rejected too.
pub fn check_orientation(records: &[ShipRecord]) -> Result<(), SetupError> {
    match records.iter().find(|record| {
        let ((x1, y1), (x2, y2)) = (record.start(), record.end());
        (x1 == x2) == (y1 == y2)
    }) {
        Some(record) => Err(SetupError::NotHorizontalOrVertical(
            record.text().to_owned(),
        )),
        None => Ok(()),
    }
}

/// Check that the fleet is exactly one ship of each kind. Returns the parsed kinds in
/// record order.
pub fn check_composition(records: &[ShipRecord]) -> Result<Vec<ShipKind>, SetupError> {
    if records.len() != ShipKind::ALL.len() {
        return Err(SetupError::FleetComposition);
    }
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| match record.kind().parse::<ShipKind>() {
            Ok(kind) if seen.insert(kind) => Ok(kind),
            _ => Err(SetupError::FleetComposition),
        })
        .collect()
}

/// Check that the length of every record matches the size of its kind. A record with
/// an unknown kind has no size to match and fails as a composition error.
pub fn check_sizes(records: &[ShipRecord]) -> Result<(), SetupError> {
    for record in records {
        let kind: ShipKind = record
            .kind()
            .parse()
            .map_err(|_| SetupError::FleetComposition)?;
        let ((x1, y1), (x2, y2)) = (record.start(), record.end());
        // Only one axis varies once orientation has been checked; take the longer
        // difference so either endpoint order works.
        let dx = (i64::from(x1) - i64::from(x2)).abs();
        let dy = (i64::from(y1) - i64::from(y2)).abs();
        if dx.max(dy) + 1 != kind.len() as i64 {
            return Err(SetupError::IncorrectSize(record.text().to_owned()));
        }
    }
    Ok(())
}

/// Run every fleet check in order: bounds, orientation, composition, then size.
/// Stops at the first failure.
pub fn validate(records: &[ShipRecord]) -> Result<Vec<ShipPlacement>, SetupError> {
    check_bounds(records)?;
    check_orientation(records)?;
    let kinds = check_composition(records)?;
    check_sizes(records)?;
    debug!("fleet of {} ships passed validation", records.len());
    Ok(kinds
        .into_iter()
        .zip(records.iter().cloned())
        .map(|(kind, record)| ShipPlacement::new(kind, record))
        .collect())
}
