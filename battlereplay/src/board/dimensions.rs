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
//! Fixed dimensions of the board.

use crate::board::Coordinate;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Total number of cells on the board.
pub(super) const TOTAL_SIZE: usize = BOARD_SIZE * BOARD_SIZE;

/// Returns true if a single signed axis value lies within the board.
#[inline]
pub fn in_bounds(v: i64) -> bool {
    v >= 0 && v < BOARD_SIZE as i64
}

/// Convert a coordinate to a linear index into the grid storage.
/// Returns `None` if the coordinate is out of bounds.
pub(super) fn try_linearize(coord: &Coordinate) -> Option<usize> {
    if coord.x < BOARD_SIZE && coord.y < BOARD_SIZE {
        Some(coord.x * BOARD_SIZE + coord.y)
    } else {
        None
    }
}

/// Get back a coordinate from a linearized index.
pub(super) fn un_linearize(idx: usize) -> Coordinate {
    Coordinate::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
}

/// Get an iterator over the rows of the board. Each row is an iterator over the
/// coordinates of that row, with `y` fixed and `x` increasing.
pub fn iter_coordinates() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
    (0..BOARD_SIZE).map(|y| (0..BOARD_SIZE).map(move |x| Coordinate { x, y }))
}
