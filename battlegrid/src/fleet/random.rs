use rand::Rng;

use crate::{
    board::{BoardSetup, Coordinate, BOARD_SIZE},
    fleet::{ShipPlacement, ShipRecord},
    ships::ShipKind,
};

/// Generate a fleet description for a random, valid, non-overlapping fleet. Records are
/// in input coordinates, one per ship kind, in [`ShipKind::ALL`] order.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<ShipRecord> {
    let mut setup = BoardSetup::new();
    let mut records = Vec::with_capacity(ShipKind::ALL.len());
    for &kind in ShipKind::ALL {
        loop {
            let row = rng.gen_range(0, BOARD_SIZE);
            let col = rng.gen_range(0, BOARD_SIZE);
            let far = kind.len() - 1;
            let end = if rng.gen() {
                Coordinate::new(row, col + far)
            } else {
                Coordinate::new(row + far, col)
            };
            let (start, end) = match (Coordinate::new(row, col), end) {
                (Some(start), Some(end)) => (start, end),
                _ => continue,
            };
            // Randomize which endpoint is written first.
            let (start, end) = if rng.gen() { (start, end) } else { (end, start) };
            let record = ShipRecord::new(
                kind.letter().to_string(),
                start.to_input(),
                end.to_input(),
            );
            if setup.place(&ShipPlacement::new(kind, record.clone())).is_ok() {
                records.push(record);
                break;
            }
        }
    }
    records
}
