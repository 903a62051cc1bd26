use thiserror::Error;

/// Reason a guess line was rejected. Every variant is reported to the player as
/// `illegal guess`.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum IllegalGuess {
    /// The line was empty or only whitespace.
    #[error("guess is empty")]
    Empty,

    /// The line did not have exactly two tokens.
    #[error("expected 2 coordinates, found {0}")]
    TokenCount(usize),

    /// One of the tokens was not a decimal integer.
    #[error("coordinate is not an integer")]
    NotAnInteger,

    /// The guess converts to a cell outside the board.
    #[error("guess ({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },
}
