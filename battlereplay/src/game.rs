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
//! The two phases of a replayed game.
//!
//! [`FleetSetup`] covers the placement phase: player one's records are validated and
//! added to the board one at a time, and the phase ends with [`FleetSetup::start`]
//! checking that the fleet is complete. That yields a [`GuessResolver`], which owns the
//! finished board and resolves player two's guesses in order.
//!
//! [`replay`] runs both phases over text input.

pub use self::{
    replay::{play, replay, setup_fleet, PlaySummary, ReplayError},
    resolver::{GuessResolver, Outcome, Resolution, GAME_OVER},
    setup::{FleetSetup, SetupError},
};

pub mod replay;
mod resolver;
mod setup;
