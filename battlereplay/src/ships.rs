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
//! Types used for defining ships and the cells they occupy.
use std::fmt;

use enumflags2::BitFlags;

use crate::board::Coordinate;

pub use self::linear::{Line, Orientation};

mod linear;

/// The kinds of ship that make up a fleet. Each kind is identified in input records by a
/// one-letter code and has a fixed length. A valid fleet has exactly one of each.
///
/// Kinds are usable as [`BitFlags`] so that sets of kinds (such as the ships sunk so far)
/// can be tracked cheaply.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipKind {
    /// Aircraft carrier `A`: length 5.
    Carrier = 0b00001,
    /// Battleship `B`: length 4.
    Battleship = 0b00010,
    /// Submarine `S`: length 3.
    Submarine = 0b00100,
    /// Destroyer `D`: length 3.
    Destroyer = 0b01000,
    /// Patrol boat `P`: length 2.
    PatrolBoat = 0b10000,
}

impl ShipKind {
    /// All ship kinds, in the order of the size table.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::PatrolBoat,
    ];

    /// Look up the kind for a one-letter code. Codes are case sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(ShipKind::Carrier),
            'B' => Some(ShipKind::Battleship),
            'S' => Some(ShipKind::Submarine),
            'D' => Some(ShipKind::Destroyer),
            'P' => Some(ShipKind::PatrolBoat),
            _ => None,
        }
    }

    /// The one-letter code of this kind.
    pub fn code(self) -> char {
        match self {
            ShipKind::Carrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::PatrolBoat => 'P',
        }
    }

    /// The required length of this kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Full name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "aircraft carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
            ShipKind::PatrolBoat => "patrol boat",
        }
    }
}

impl fmt::Display for ShipKind {
    /// Displays the one-letter code.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A ship placed on the board.
///
/// A ship does no checking of its own: the placement validator guarantees its positions
/// are in bounds, in a straight line, and match the kind's length before one is built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    positions: Vec<Coordinate>,
    hits_remaining: usize,
}

impl Ship {
    /// Construct a ship of the given kind occupying the given positions. The ship starts
    /// with one remaining hit per position.
    pub fn new(kind: ShipKind, positions: Vec<Coordinate>) -> Self {
        debug_assert_eq!(positions.len(), kind.len());
        Self {
            kind,
            hits_remaining: positions.len(),
            positions,
        }
    }

    /// The kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Full name of this ship.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Coordinates occupied by this ship, in increasing order along its line.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// Number of hits this ship can still take before it is gone.
    pub fn remaining_hits(&self) -> usize {
        self.hits_remaining
    }

    /// Whether every segment of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Record a hit on this ship. The caller must only call this once per distinct cell.
    pub(crate) fn register_hit(&mut self) {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
    }
}
