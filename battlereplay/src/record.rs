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
//! Text records making up the two input streams.
//!
//! A placement record is `<kind> <x1> <y1> <x2> <y2>` and a guess record is `<x> <y>`,
//! with fields separated by whitespace. Coordinates are signed so that out-of-range
//! values reach the bounds checks instead of failing to parse, and values too large for
//! an `i64` saturate. The kind code is kept as written and only looked up once the
//! placement has passed its bounds and orientation checks. Anything after the required
//! fields is ignored.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::ships::ShipKind;

/// Error produced when a line can't be parsed as a record.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RecordError {
    /// The line is missing fields, has a field that isn't an integer, or has a kind that
    /// isn't a single character.
    #[error("malformed record: {0:?}")]
    Malformed(String),
}

/// One ship placement from player one: a kind code and the two endpoints of the ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementRecord {
    pub code: char,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl PlacementRecord {
    /// Construct a placement record for a known kind.
    pub fn new(kind: ShipKind, x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::with_code(kind.code(), x1, y1, x2, y2)
    }

    /// Construct a placement record from a raw kind code, which may not name any kind.
    pub fn with_code(code: char, x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            code,
            x1,
            y1,
            x2,
            y2,
        }
    }

    /// The kind named by this record's code, if any.
    pub fn kind(&self) -> Option<ShipKind> {
        ShipKind::from_code(self.code)
    }
}

impl FromStr for PlacementRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)
        (?P<kind>\S)\s+
        (?P<x1>[-+]?[0-9]+)\s+
        (?P<y1>[-+]?[0-9]+)\s+
        (?P<x2>[-+]?[0-9]+)\s+
        (?P<y2>[-+]?[0-9]+)
        (?:\s.*)?$",
            )
            .unwrap()
        });
        let line = s.trim();
        let captures = PLACEMENT
            .captures(line)
            .ok_or_else(|| RecordError::Malformed(line.to_owned()))?;
        let code = captures["kind"]
            .chars()
            .next()
            .ok_or_else(|| RecordError::Malformed(line.to_owned()))?;
        Ok(PlacementRecord {
            code,
            x1: int_field(&captures, "x1"),
            y1: int_field(&captures, "y1"),
            x2: int_field(&captures, "x2"),
            y2: int_field(&captures, "y2"),
        })
    }
}

impl fmt::Display for PlacementRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.code, self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// One guess from player two.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GuessRecord {
    pub x: i64,
    pub y: i64,
}

impl GuessRecord {
    /// Construct a guess record.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl FromStr for GuessRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static GUESS: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)
        (?P<x>[-+]?[0-9]+)\s+
        (?P<y>[-+]?[0-9]+)
        (?:\s.*)?$",
            )
            .unwrap()
        });
        let line = s.trim();
        let captures = GUESS
            .captures(line)
            .ok_or_else(|| RecordError::Malformed(line.to_owned()))?;
        Ok(GuessRecord {
            x: int_field(&captures, "x"),
            y: int_field(&captures, "y"),
        })
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parse a named integer capture. The regex guarantees a signed run of digits, so the
/// parse only fails on overflow, which saturates toward the sign.
fn int_field(captures: &Captures, name: &str) -> i64 {
    let field = &captures[name];
    field.parse().unwrap_or_else(|_| {
        if field.starts_with('-') {
            i64::min_value()
        } else {
            i64::max_value()
        }
    })
}
