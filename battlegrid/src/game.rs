//! Replaying a list of guesses against a placed fleet.
//!
//! Each guess line resolves to exactly one [`GuessOutcome`]. Illegal lines are reported
//! and skipped without touching the board. The replay stops as soon as the last ship
//! sinks, or when the guesses run out.

use std::{fmt, str::FromStr};

use log::{debug, trace};

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    ships::{Ship, ShipKind},
};

pub use self::errors::IllegalGuess;

mod errors;

/// A guess in input coordinates: `<x> <y>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Guess {
    pub x: i32,
    pub y: i32,
}

impl Guess {
    /// Convert the guess to a grid coordinate, rejecting guesses that land off the
    /// board.
    pub fn coordinate(self) -> Result<Coordinate, IllegalGuess> {
        Coordinate::from_input(self.x, self.y).ok_or(IllegalGuess::OffBoard {
            x: self.x,
            y: self.y,
        })
    }
}

impl FromStr for Guess {
    type Err = IllegalGuess;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = line.split_whitespace().collect();
        match tokens[..] {
            [] => Err(IllegalGuess::Empty),
            [x, y] => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => Ok(Guess { x, y }),
                _ => Err(IllegalGuess::NotAnInteger),
            },
            _ => Err(IllegalGuess::TokenCount(tokens.len())),
        }
    }
}

/// What a single guess line produced.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The line was rejected; nothing changed.
    Illegal(IllegalGuess),
    /// The guess was resolved against the board.
    Shot(ShotOutcome),
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GuessOutcome::Illegal(_) => f.write_str("illegal guess"),
            GuessOutcome::Shot(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

/// How a replay finished.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameEnd {
    /// Every ship was sunk. Guesses after the sinking shot were not consumed.
    AllSunk,
    /// The guesses ran out first. Carries the kinds of the ships still afloat.
    OutOfGuesses { afloat: Vec<ShipKind> },
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEnd::AllSunk => f.write_str("all ships sunk: game over"),
            GameEnd::OutOfGuesses { afloat } => {
                write!(f, "out of guesses: {} ship(s) afloat", afloat.len())?;
                for (i, kind) in afloat.iter().enumerate() {
                    f.write_str(if i == 0 { " (" } else { ", " })?;
                    write!(f, "{}", kind)?;
                }
                if !afloat.is_empty() {
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

/// Transcript of a replay: one outcome per consumed guess, and how it ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Replay {
    outcomes: Vec<GuessOutcome>,
    end: GameEnd,
}

impl Replay {
    /// Outcomes of every consumed guess, in order.
    pub fn outcomes(&self) -> &[GuessOutcome] {
        &self.outcomes
    }

    /// How the replay ended.
    pub fn end(&self) -> &GameEnd {
        &self.end
    }

    /// Number of guess lines consumed.
    pub fn consumed(&self) -> usize {
        self.outcomes.len()
    }
}

impl fmt::Display for Replay {
    /// The observable output of the game: one line per outcome, followed by the game
    /// over line if the fleet was sunk.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        if let GameEnd::AllSunk = self.end {
            writeln!(f, "{}", self.end)?;
        }
        Ok(())
    }
}

/// A game in progress: a placed board receiving guesses.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a game on a fully placed board.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Get the board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true once every ship has been sunk.
    pub fn is_over(&self) -> bool {
        self.board.defeated()
    }

    /// Resolve a single guess line.
    pub fn guess(&mut self, line: &str) -> GuessOutcome {
        match line.parse::<Guess>().and_then(Guess::coordinate) {
            Ok(coord) => GuessOutcome::Shot(self.board.shoot(coord)),
            Err(reason) => {
                trace!("illegal guess {:?}: {}", line, reason);
                GuessOutcome::Illegal(reason)
            }
        }
    }

    /// Replay guesses in order until every ship is sunk or the guesses run out.
    pub fn replay<I>(&mut self, guesses: I) -> Replay
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut guesses = guesses.into_iter();
        let mut outcomes = Vec::new();
        while !self.is_over() {
            match guesses.next() {
                Some(line) => outcomes.push(self.guess(line.as_ref())),
                None => break,
            }
        }
        let end = if self.is_over() {
            GameEnd::AllSunk
        } else {
            GameEnd::OutOfGuesses {
                afloat: self.board.afloat().map(Ship::kind).collect(),
            }
        };
        debug!("replay ended after {} guesses: {}", outcomes.len(), end);
        Replay { outcomes, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::parse_records;

    fn game() -> Game {
        let records = parse_records(&[
            "A 0 0 0 4",
            "B 1 0 1 3",
            "S 2 0 2 2",
            "D 3 0 3 2",
            "P 4 0 4 1",
        ])
        .unwrap();
        Game::new(Board::from_records(&records).unwrap())
    }

    #[test]
    fn parses_two_integers() {
        assert_eq!("3 7".parse(), Ok(Guess { x: 3, y: 7 }));
        assert_eq!("  -1\t12 ".parse(), Ok(Guess { x: -1, y: 12 }));
        assert_eq!("+4 0".parse(), Ok(Guess { x: 4, y: 0 }));
    }

    #[test]
    fn rejects_malformed_guesses() {
        assert_eq!("".parse::<Guess>(), Err(IllegalGuess::Empty));
        assert_eq!("   ".parse::<Guess>(), Err(IllegalGuess::Empty));
        assert_eq!("3".parse::<Guess>(), Err(IllegalGuess::TokenCount(1)));
        assert_eq!("3 4 5".parse::<Guess>(), Err(IllegalGuess::TokenCount(3)));
        assert_eq!("3 x".parse::<Guess>(), Err(IllegalGuess::NotAnInteger));
        assert_eq!("3.0 4".parse::<Guess>(), Err(IllegalGuess::NotAnInteger));
    }

    #[test]
    fn off_board_guesses_are_illegal() {
        let mut game = game();
        let before = game.board().clone();
        for line in &["0 10", "10 0", "-1 3", "3 -1"] {
            assert!(matches!(
                game.guess(line),
                GuessOutcome::Illegal(IllegalGuess::OffBoard { .. })
            ));
        }
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn patrol_boat_sinks_after_two_hits() {
        let mut game = game();
        let outcomes: Vec<_> = ["4 0", "4 1", "4 0"]
            .iter()
            .map(|line| game.guess(line).to_string())
            .collect();
        assert_eq!(outcomes, vec!["hit", "P sunk", "hit (again)"]);
    }

    #[test]
    fn illegal_lines_count_as_consumed_guesses() {
        let mut game = game();
        let replay = game.replay(&["", "9 9", "9 9", "nope"]);
        assert_eq!(
            replay.to_string(),
            "illegal guess\nmiss\nmiss (again)\nillegal guess\n"
        );
        assert_eq!(replay.consumed(), 4);
    }

    #[test]
    fn exhausted_guesses_report_afloat_ships() {
        let mut game = game();
        let replay = game.replay(&["4 0", "4 1"]);
        assert_eq!(
            replay.end(),
            &GameEnd::OutOfGuesses {
                afloat: vec![
                    ShipKind::AircraftCarrier,
                    ShipKind::Battleship,
                    ShipKind::Submarine,
                    ShipKind::Destroyer,
                ]
            }
        );
        assert_eq!(
            replay.end().to_string(),
            "out of guesses: 4 ship(s) afloat (A, B, S, D)"
        );
        // The game over line is only written when the fleet is sunk.
        assert!(!replay.to_string().contains("game over"));
    }
}
