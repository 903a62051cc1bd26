// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Engine for replaying a scripted game of Battleship on a fixed 10x10 grid.
//!
//! A fleet of five ships is read from a fleet description, checked by the
//! [`fleet`] validators, and placed onto a [`Board`]. A [`Game`] then replays a list of
//! guesses against that board until every ship is sunk or the guesses run out.
//!
//! ```
//! use battlegrid::{fleet, Board, Game, GameEnd};
//!
//! let records = fleet::parse_records(&[
//!     "A 0 0 0 4",
//!     "B 1 0 1 3",
//!     "S 2 0 2 2",
//!     "D 3 0 3 2",
//!     "P 4 0 4 1",
//! ])
//! .unwrap();
//! let mut game = Game::new(Board::from_records(&records).unwrap());
//! let replay = game.replay(&["4 0", "4 1", "9 9"]);
//! assert_eq!(replay.to_string(), "hit\nP sunk\nmiss\n");
//! assert!(matches!(replay.end(), GameEnd::OutOfGuesses { .. }));
//! ```

pub use self::{
    board::{Board, CellRef, CellState, Coordinate, SetupError, ShotOutcome, BOARD_SIZE},
    fleet::{ShipPlacement, ShipRecord},
    game::{Game, GameEnd, Guess, GuessOutcome, IllegalGuess, Replay},
    ships::{Ship, ShipKind},
};

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;
