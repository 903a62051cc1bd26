//! Types used for defining ships and the cells they cover.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::board::Coordinate;

pub use self::span::{Axis, Span};

mod span;

/// The five kinds of ship in a fleet, identified in fleet descriptions by a single
/// letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Aircraft carrier (`A`): length 5.
    AircraftCarrier,
    /// Battleship (`B`): length 4.
    Battleship,
    /// Submarine (`S`): length 3.
    Submarine,
    /// Destroyer (`D`): length 3.
    Destroyer,
    /// Patrol boat (`P`): length 2.
    PatrolBoat,
}

impl ShipKind {
    /// Every ship kind, in the order they are usually listed.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::AircraftCarrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::PatrolBoat,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Get the letter that identifies this kind in fleet descriptions.
    pub fn letter(self) -> char {
        match self {
            ShipKind::AircraftCarrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::PatrolBoat => 'P',
        }
    }

    /// Look up the kind identified by `letter`. Letters are case sensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        ShipKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.letter() == letter)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.letter().encode_utf8(&mut buf))
    }
}

/// Error returned when a token does not name a ship kind.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship kind {0:?}")]
pub struct UnknownShipKind(String);

impl FromStr for ShipKind {
    type Err = UnknownShipKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                ShipKind::from_letter(letter).ok_or_else(|| UnknownShipKind(s.to_owned()))
            }
            _ => Err(UnknownShipKind(s.to_owned())),
        }
    }
}

/// A placed member of the fleet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,

    /// Number of segments that have not been hit yet.
    remaining: usize,

    /// The two endpoints of the ship, in the order they were given.
    ends: [Coordinate; 2],
}

impl Ship {
    pub(crate) fn new(kind: ShipKind, ends: [Coordinate; 2]) -> Self {
        Self {
            kind,
            remaining: kind.len(),
            ends,
        }
    }

    /// Get the kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Total number of segments.
    pub fn size(&self) -> usize {
        self.kind.len()
    }

    /// Number of segments that have not been hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The endpoints this ship was placed between.
    pub fn ends(&self) -> &[Coordinate; 2] {
        &self.ends
    }

    /// Returns true once every segment has been hit.
    pub fn sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Record a hit on a previously un-hit segment. Returns true if this sank the ship.
    pub(crate) fn hit(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.sunk()
    }
}
