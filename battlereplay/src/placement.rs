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
//! Validation of a single placement record into a [`Ship`].
//!
//! A placement is checked in order for bounds, orientation, a known kind and length. Checking that the
//! ship doesn't overlap another or repeat a kind is left to [`Board::add_ship`], and the
//! fleet as a whole is only checked once the placement stream is exhausted.
//!
//! [`Board::add_ship`]: crate::board::Board::add_ship

use thiserror::Error;

use crate::{
    board::Coordinate,
    record::PlacementRecord,
    ships::{Line, Ship},
};

/// Reason a placement record was rejected. Each carries the offending record.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// An endpoint lies off the board.
    #[error("ship out-of-bounds: {0}")]
    OutOfBounds(PlacementRecord),
    /// The endpoints share neither a row nor a column.
    #[error("ship not horizontal or vertical: {0}")]
    BadOrientation(PlacementRecord),
    /// The kind code isn't in the size table.
    #[error("unknown ship kind: {0}")]
    UnknownKind(PlacementRecord),
    /// The span between the endpoints doesn't match the length of the kind.
    #[error("incorrect ship size: {record}")]
    WrongSize {
        record: PlacementRecord,
        expected: usize,
        actual: usize,
    },
}

impl PlacementError {
    /// The record that was rejected.
    pub fn record(&self) -> &PlacementRecord {
        match self {
            PlacementError::OutOfBounds(record)
            | PlacementError::BadOrientation(record)
            | PlacementError::UnknownKind(record)
            | PlacementError::WrongSize { record, .. } => record,
        }
    }
}

/// Validate a placement record and build the ship it describes.
pub fn validate(record: &PlacementRecord) -> Result<Ship, PlacementError> {
    let (start, end) = match (
        Coordinate::checked(record.x1, record.y1),
        Coordinate::checked(record.x2, record.y2),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(PlacementError::OutOfBounds(*record)),
    };
    let line = Line::between(start, end).ok_or(PlacementError::BadOrientation(*record))?;
    let kind = record.kind().ok_or(PlacementError::UnknownKind(*record))?;
    let expected = kind.len();
    if line.len() != expected {
        return Err(PlacementError::WrongSize {
            record: *record,
            expected,
            actual: line.len(),
        });
    }
    Ok(Ship::new(kind, line.project()))
}
