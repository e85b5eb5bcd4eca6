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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::Coordinate,
    ships::{Ship, ShipKind},
};

/// Reason why a ship could not be added to the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// A ship of the same kind was already added.
    #[error("a ship of kind {0} was already placed")]
    AlreadyPlaced(ShipKind),
    /// One of the ship's cells is already occupied by another ship.
    #[error("{coord} is already occupied by {occupant}")]
    AlreadyOccupied {
        coord: Coordinate,
        occupant: ShipKind,
    },
    /// One of the ship's cells is not on the board.
    #[error("{0} is not on the board")]
    OutOfBounds(Coordinate),
}

/// Error returned when a ship could not be added to the board. Gives the rejected ship
/// back to the caller.
#[derive(Error)]
#[error("could not place {}: {reason}", .ship.kind())]
pub struct AddShipError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl AddShipError {
    /// Construct an error from a reason and the ship that was rejected.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason the ship was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl Debug for AddShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
