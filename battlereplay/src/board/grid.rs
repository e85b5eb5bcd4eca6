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
//! Defines the cells that make up the board and the grid that stores them.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{dimensions, Coordinate},
    ships::ShipKind,
};

/// A single cell in the player's grid.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Cell {
    /// The kind of the ship that occupies this cell, if any.
    occupant: Option<ShipKind>,

    /// Whether this cell has been guessed previously or not.
    guessed: bool,
}

impl Cell {
    /// The ship occupying this cell, if any.
    pub fn occupant(&self) -> Option<ShipKind> {
        self.occupant
    }

    /// Whether this cell has been guessed previously.
    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    /// Occupy this cell with the given ship. An occupant is never replaced: if the cell
    /// is already occupied, the current occupant is returned as the error.
    pub(crate) fn set_occupant(&mut self, ship: ShipKind) -> Result<(), ShipKind> {
        match self.occupant {
            Some(existing) => Err(existing),
            None => {
                self.occupant = Some(ship);
                Ok(())
            }
        }
    }

    /// Record that this cell has been guessed. Idempotent.
    pub(crate) fn mark_guessed(&mut self) {
        self.guessed = true;
    }
}

/// Storage for all the cells of the board.
#[derive(Debug)]
pub(super) struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..dimensions::TOTAL_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        dimensions::try_linearize(coord.borrow()).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        dimensions::try_linearize(coord.borrow()).and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate all cells along with their coordinates.
    pub(super) fn iter<'a>(&'a self) -> impl 'a + Iterator<Item = (Coordinate, &'a Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (dimensions::un_linearize(i), cell))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
