//! Errors used by the `BoardSetup` and the fleet validators.

use thiserror::Error;

/// Fatal error raised while reading, validating or placing the fleet. Every variant
/// except [`FleetComposition`][SetupError::FleetComposition] carries the text of the
/// offending fleet record.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// The record did not have a kind followed by four integer coordinates.
    #[error("malformed ship record: {0}")]
    MalformedRecord(String),

    /// A coordinate of the record was outside `[0, 9]`.
    #[error("ship out-of-bounds: {0}")]
    OutOfBounds(String),

    /// The endpoints were diagonal to each other, or identical.
    #[error("ship not horizontal or vertical: {0}")]
    NotHorizontalOrVertical(String),

    /// The fleet was not exactly one of each ship kind.
    #[error("fleet composition incorrect")]
    FleetComposition,

    /// The distance between the endpoints did not match the size of the ship kind.
    #[error("incorrect ship size: {0}")]
    IncorrectSize(String),

    /// The ship covers a cell that another ship already occupies.
    #[error("overlapping ship: {0}")]
    Overlapping(String),
}

impl SetupError {
    /// Text of the fleet record that caused the error, if the error is about a single
    /// record.
    pub fn record(&self) -> Option<&str> {
        match self {
            SetupError::MalformedRecord(record)
            | SetupError::OutOfBounds(record)
            | SetupError::NotHorizontalOrVertical(record)
            | SetupError::IncorrectSize(record)
            | SetupError::Overlapping(record) => Some(record),
            SetupError::FleetComposition => None,
        }
    }
}
