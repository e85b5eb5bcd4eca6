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
//! Resolution of player two's guesses against the finished board.
use std::fmt;

use enumflags2::BitFlags;
use log::{debug, info};

use crate::{
    board::{Board, Coordinate},
    record::GuessRecord,
    ships::ShipKind,
};

/// Message reported once, after the guess that sinks the last ship.
pub const GAME_OVER: &str = "all ships sunk: game over";

/// Outcome of a single guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing was hit.
    Miss,
    /// An empty cell that had already been guessed.
    MissRepeat,
    /// A ship was hit but not sunk.
    Hit,
    /// The given ship took its last hit.
    Sunk(ShipKind),
    /// A ship cell that had already been guessed.
    HitRepeat,
    /// The guess was off the board.
    IllegalGuess,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Miss => f.pad("miss"),
            Outcome::MissRepeat => f.pad("miss (again)"),
            Outcome::Hit => f.pad("hit"),
            Outcome::Sunk(kind) => write!(f, "{} sunk", kind),
            Outcome::HitRepeat => f.pad("hit (again)"),
            Outcome::IllegalGuess => f.pad("illegal guess"),
        }
    }
}

/// Result of resolving one guess: its outcome, and whether the game ended with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Resolution {
    outcome: Outcome,
    game_over: bool,
}

impl Resolution {
    /// Outcome of the guess.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if every ship is sunk after this guess. No further guesses should be
    /// resolved.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

/// Guess phase of the game. Owns the board and tracks which ships are still afloat.
#[derive(Debug)]
pub struct GuessResolver {
    board: Board,

    /// Kinds of the ships sunk so far.
    sunk: BitFlags<ShipKind>,

    /// Number of ships not yet sunk.
    live_ships: usize,
}

impl GuessResolver {
    /// Start the guess phase on a populated board.
    pub(super) fn new(board: Board) -> Self {
        let live_ships = board.ship_count();
        Self {
            board,
            sunk: BitFlags::empty(),
            live_ships,
        }
    }

    /// The board, including the guess history of every cell.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of ships still afloat.
    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    /// Kinds of the ships sunk so far.
    pub fn sunk(&self) -> BitFlags<ShipKind> {
        self.sunk
    }

    /// Returns true once every ship has been sunk.
    pub fn is_over(&self) -> bool {
        self.live_ships == 0
    }

    /// Resolve one guess, updating the board.
    ///
    /// Off-board guesses and guesses at cells already guessed leave the board untouched.
    pub fn resolve(&mut self, guess: &GuessRecord) -> Resolution {
        let outcome = match Coordinate::checked(guess.x, guess.y) {
            Some(coord) => self.shoot(coord),
            None => Outcome::IllegalGuess,
        };
        debug!("guess {} -> {}", guess, outcome);
        let game_over = self.is_over();
        if game_over {
            info!("all {} ships sunk", self.board.ship_count());
        }
        Resolution { outcome, game_over }
    }

    /// Fire at an on-board coordinate.
    fn shoot(&mut self, coord: Coordinate) -> Outcome {
        let occupant = match self.board.get_cell_mut(coord) {
            None => return Outcome::IllegalGuess,
            Some(cell) if cell.is_guessed() => {
                return match cell.occupant() {
                    None => Outcome::MissRepeat,
                    Some(_) => Outcome::HitRepeat,
                };
            }
            Some(cell) => {
                cell.mark_guessed();
                cell.occupant()
            }
        };
        let kind = match occupant {
            None => return Outcome::Miss,
            Some(kind) => kind,
        };
        let ship = match self.board.get_ship_mut(kind) {
            Some(ship) => ship,
            // The board only occupies cells with ships it has registered.
            None => unreachable!("{} occupied by unregistered ship {}", coord, kind),
        };
        // Threshold uses the hits remaining before this shot.
        let last_hit = ship.remaining_hits() <= 1;
        ship.register_hit();
        if last_hit {
            self.sunk.insert(kind);
            self.live_ships = self.live_ships.saturating_sub(1);
            Outcome::Sunk(kind)
        } else {
            Outcome::Hit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FleetSetup;

    fn fleet() -> GuessResolver {
        let mut setup = FleetSetup::new();
        for line in &["A 0 0 0 4", "B 1 0 1 3", "S 2 0 2 2", "D 3 0 3 2", "P 4 0 4 1"] {
            setup.place(&line.parse().unwrap()).unwrap();
        }
        setup.start().unwrap()
    }

    fn shoot(game: &mut GuessResolver, x: i64, y: i64) -> Outcome {
        game.resolve(&GuessRecord::new(x, y)).outcome()
    }

    #[test]
    fn miss_then_repeat() {
        let mut game = fleet();
        assert_eq!(shoot(&mut game, 9, 9), Outcome::Miss);
        assert!(game.board().cell_at(Coordinate::new(9, 9)).is_guessed());
        assert_eq!(shoot(&mut game, 9, 9), Outcome::MissRepeat);
    }

    #[test]
    fn carrier_goes_down() {
        let mut game = fleet();
        assert_eq!(shoot(&mut game, 0, 0), Outcome::Hit);
        assert_eq!(shoot(&mut game, 0, 0), Outcome::HitRepeat);
        for y in 1..4 {
            assert_eq!(shoot(&mut game, 0, y), Outcome::Hit);
        }
        let carrier = game.board().get_ship(ShipKind::Carrier).unwrap();
        assert_eq!(carrier.remaining_hits(), 1);
        assert_eq!(shoot(&mut game, 0, 4), Outcome::Sunk(ShipKind::Carrier));
        assert_eq!(shoot(&mut game, 0, 4), Outcome::HitRepeat);
        let carrier = game.board().get_ship(ShipKind::Carrier).unwrap();
        assert_eq!(carrier.remaining_hits(), 0);
        assert!(carrier.is_sunk());
        assert_eq!(game.live_ships(), 4);
        assert!(game.sunk().contains(ShipKind::Carrier));
    }

    #[test]
    fn illegal_guess_changes_nothing() {
        let mut game = fleet();
        assert_eq!(shoot(&mut game, 10, 0), Outcome::IllegalGuess);
        assert_eq!(shoot(&mut game, 0, -1), Outcome::IllegalGuess);
        assert!(game.board().iter_cells().all(|(_, cell)| !cell.is_guessed()));
        assert_eq!(game.live_ships(), 5);
    }

    #[test]
    fn last_sinking_ends_the_game() {
        let mut game = fleet();
        let mut last = None;
        for &(x, len) in &[(0i64, 5i64), (1, 4), (2, 3), (3, 3), (4, 2)] {
            for y in 0..len {
                last = Some(game.resolve(&GuessRecord::new(x, y)));
            }
        }
        let last = last.unwrap();
        assert_eq!(last.outcome(), Outcome::Sunk(ShipKind::PatrolBoat));
        assert!(last.is_game_over());
        assert!(game.is_over());
        assert!(game.sunk().is_all());
    }

    #[test]
    fn outcome_text() {
        let texts: Vec<String> = [
            Outcome::Miss,
            Outcome::MissRepeat,
            Outcome::Hit,
            Outcome::Sunk(ShipKind::Destroyer),
            Outcome::HitRepeat,
            Outcome::IllegalGuess,
        ]
        .iter()
        .map(|o| o.to_string())
        .collect();
        assert_eq!(
            texts,
            vec![
                "miss",
                "miss (again)",
                "hit",
                "D sunk",
                "hit (again)",
                "illegal guess"
            ]
        );
    }
}
