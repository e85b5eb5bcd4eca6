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
//! Replay of a two-player Battleship match from pre-recorded input.
//!
//! Player one's fleet is read from a placement stream and validated into a [`Board`].
//! Player two's guesses are then resolved against that board one at a time, producing
//! an [`Outcome`] for each guess until either the guess stream runs out or every ship
//! has been sunk.
//!
//! [`game::replay`] drives both phases over text input. The pieces it is built from are
//! usable on their own:
//!
//! - [`record`] parses the text records of both streams.
//! - [`placement`] turns one placement record into a [`Ship`].
//! - [`board`] holds the grid and enforces that ships don't overlap.
//! - [`game`] provides the placement and guess phases.

pub mod board;
pub mod game;
pub mod placement;
pub mod record;
pub mod ships;

pub use crate::{
    board::{Board, Cell, Coordinate, BOARD_SIZE},
    game::{FleetSetup, GuessResolver, Outcome, Resolution},
    record::{GuessRecord, PlacementRecord},
    ships::{Ship, ShipKind},
};
