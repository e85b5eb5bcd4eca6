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
//! Types that make up the game board.

use std::collections::{hash_map::Entry, HashMap};

use log::debug;

use crate::ships::{Ship, ShipKind};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::{in_bounds, iter_coordinates, BOARD_SIZE},
    errors::{AddShipError, CannotPlaceReason},
    grid::Cell,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Player one's board: the grid of cells and the ships placed on it.
///
/// Every cell is occupied by at most one ship, and each [`ShipKind`] is placed at most
/// once.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Ships placed on this board, keyed by kind.
    ships: HashMap<ShipKind, Ship>,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: HashMap::new(),
        }
    }

    /// Add a ship to the board, occupying all of its cells.
    ///
    /// Fails if a ship of the same kind was already added or if any of the ship's cells is
    /// already occupied. On failure the board is left unchanged and the ship is handed
    /// back in the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), AddShipError> {
        let kind = ship.kind();
        match self.ships.entry(kind) {
            Entry::Occupied(_) => Err(AddShipError::new(
                CannotPlaceReason::AlreadyPlaced(kind),
                ship,
            )),
            Entry::Vacant(entry) => {
                let grid = &self.grid;
                let conflict = ship.positions().iter().find_map(|&coord| match grid.get(coord) {
                    None => Some(CannotPlaceReason::OutOfBounds(coord)),
                    Some(cell) => cell
                        .occupant()
                        .map(|occupant| CannotPlaceReason::AlreadyOccupied { coord, occupant }),
                });
                if let Some(reason) = conflict {
                    return Err(AddShipError::new(reason, ship));
                }
                // Already ensured that every position is valid and not occupied.
                for coord in ship.positions() {
                    let placed = self.grid[coord].set_occupant(kind);
                    debug_assert!(placed.is_ok(), "{} was checked as unoccupied", coord);
                }
                debug!("placed {} at {:?}", kind, ship.positions());
                entry.insert(ship);
                Ok(())
            }
        }
    }

    /// Get the cell at the given coordinate. Panics if the coordinate is off the board;
    /// use [`get_cell`][Board::get_cell] when the coordinate hasn't been checked.
    pub fn cell_at(&self, coord: Coordinate) -> &Cell {
        &self.grid[coord]
    }

    /// Get the cell at the given coordinate, or `None` if it is off the board.
    pub fn get_cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.grid.get(coord)
    }

    pub(crate) fn get_cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.grid.get_mut(coord)
    }

    /// Number of distinct ship kinds placed on this board.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if exactly one ship of every kind has been placed.
    pub fn fleet_complete(&self) -> bool {
        self.ships.len() == ShipKind::ALL.len()
    }

    /// Get the ship of the given kind, if placed.
    pub fn get_ship(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships.get(&kind)
    }

    pub(crate) fn get_ship_mut(&mut self, kind: ShipKind) -> Option<&mut Ship> {
        self.ships.get_mut(&kind)
    }

    /// Get an iterator over all ships on this board, in size-table order.
    pub fn iter_ships<'a>(&'a self) -> impl 'a + Iterator<Item = &'a Ship> {
        let ships = &self.ships;
        ShipKind::ALL.iter().filter_map(move |kind| ships.get(kind))
    }

    /// Get an iterator over the cells of this board. The iterator's item is another
    /// iterator that iterates over a single row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, &'a Cell)>> {
        let grid = &self.grid;
        iter_coordinates().map(move |row| row.map(move |coord| (coord, &grid[coord])))
    }

    /// Get an iterator over every cell of this board along with its coordinate.
    pub fn iter_cells<'a>(&'a self) -> impl 'a + Iterator<Item = (Coordinate, &'a Cell)> {
        self.grid.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
