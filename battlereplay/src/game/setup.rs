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
//! Implements the placement phase of the game.
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    board::{Board, CannotPlaceReason, Coordinate},
    game::GuessResolver,
    placement::{self, PlacementError},
    record::PlacementRecord,
    ships::ShipKind,
};

/// Fatal error in the placement phase. Any of these aborts the game before a single guess
/// is resolved.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// The record itself was invalid.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// The ship would occupy a cell that already holds another ship.
    #[error("overlapping ship: {record}")]
    Overlap {
        record: PlacementRecord,
        coord: Coordinate,
        occupant: ShipKind,
    },
    /// A ship of the same kind was already placed.
    #[error("fleet composition incorrect: {record}")]
    DuplicateFleet { record: PlacementRecord },
    /// The placement stream ended without a ship of every kind.
    #[error("fleet composition incorrect: {placed} of {required} ships placed")]
    IncompleteFleet { placed: usize, required: usize },
}

/// Setup phase for a game. Allows placing ships and does not allow guessing.
#[derive(Debug, Default)]
pub struct FleetSetup {
    board: Board,
}

impl FleetSetup {
    /// Begin setup with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Validate a placement record and add the resulting ship to the board.
    pub fn place(&mut self, record: &PlacementRecord) -> Result<(), SetupError> {
        let result = placement::validate(record)
            .map_err(SetupError::from)
            .and_then(|ship| {
                self.board.add_ship(ship).map_err(|err| match err.reason() {
                    CannotPlaceReason::AlreadyPlaced(_) => {
                        SetupError::DuplicateFleet { record: *record }
                    }
                    CannotPlaceReason::AlreadyOccupied { coord, occupant } => {
                        SetupError::Overlap {
                            record: *record,
                            coord,
                            occupant,
                        }
                    }
                    // Validated ships are always on the board.
                    CannotPlaceReason::OutOfBounds(_) => {
                        PlacementError::OutOfBounds(*record).into()
                    }
                })
            });
        match &result {
            Ok(()) => debug!("accepted placement {}", record),
            Err(err) => warn!("rejected placement {}: {}", record, err),
        }
        result
    }

    /// The board as populated so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if a ship of every kind has been placed.
    pub fn ready(&self) -> bool {
        self.board.fleet_complete()
    }

    /// Finish the placement phase. Succeeds only if exactly one ship of every kind was
    /// placed.
    pub fn start(self) -> Result<GuessResolver, SetupError> {
        if self.ready() {
            info!("fleet ready with {} ships", self.board.ship_count());
            Ok(GuessResolver::new(self.board))
        } else {
            let err = SetupError::IncompleteFleet {
                placed: self.board.ship_count(),
                required: ShipKind::ALL.len(),
            };
            warn!("{}", err);
            Err(err)
        }
    }
}
