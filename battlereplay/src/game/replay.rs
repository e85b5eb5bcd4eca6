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
//! Drives a full game over text input: the placement stream, then the guess stream.
use std::io::{self, BufRead, Write};

use log::info;
use thiserror::Error;

use crate::{
    game::{FleetSetup, GuessResolver, SetupError, GAME_OVER},
    record::{GuessRecord, PlacementRecord, RecordError},
};

/// Error that aborts a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A line of the placement stream couldn't be parsed.
    #[error("placement line {line}: {source}")]
    PlacementRecord {
        line: usize,
        #[source]
        source: RecordError,
    },
    /// The fleet was rejected.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A line of the guess stream couldn't be parsed.
    #[error("guess line {line}: {source}")]
    GuessRecord {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Summary of the guess phase of a replay.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlaySummary {
    /// Number of guesses resolved.
    pub resolved: usize,
    /// Whether the game ended with every ship sunk.
    pub game_over: bool,
}

/// Iterate the non-blank lines of a reader, numbered from 1.
fn records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|line| (idx + 1, line)))
        .filter(|line| match line {
            Ok((_, text)) => !text.trim().is_empty(),
            Err(_) => true,
        })
}

/// Read the whole placement stream and build the fleet. Fails on the first invalid
/// record, or at the end if the fleet is incomplete.
pub fn setup_fleet<R: BufRead>(reader: R) -> Result<GuessResolver, ReplayError> {
    let mut setup = FleetSetup::new();
    for record in records(reader) {
        let (line, text) = record?;
        let placement: PlacementRecord = text
            .parse()
            .map_err(|source| ReplayError::PlacementRecord { line, source })?;
        setup.place(&placement)?;
    }
    Ok(setup.start()?)
}

/// Resolve guesses from the reader in order, writing one outcome per line. Once the last
/// ship is sunk the game-over message is written and no more lines are read.
pub fn play<R: BufRead, W: Write>(
    game: &mut GuessResolver,
    reader: R,
    out: &mut W,
) -> Result<PlaySummary, ReplayError> {
    let mut summary = PlaySummary {
        resolved: 0,
        game_over: game.is_over(),
    };
    if summary.game_over {
        return Ok(summary);
    }
    for record in records(reader) {
        let (line, text) = record?;
        let guess: GuessRecord = text
            .parse()
            .map_err(|source| ReplayError::GuessRecord { line, source })?;
        let resolution = game.resolve(&guess);
        summary.resolved += 1;
        writeln!(out, "{}", resolution.outcome())?;
        if resolution.is_game_over() {
            writeln!(out, "{}", GAME_OVER)?;
            summary.game_over = true;
            break;
        }
    }
    info!(
        "resolved {} guesses, {} ships afloat",
        summary.resolved,
        game.live_ships()
    );
    Ok(summary)
}

/// Replay a whole game: build the fleet from `placements`, then play `guesses` against it.
/// Returns the final game state along with the summary of the guess phase.
pub fn replay<P, G, W>(
    placements: P,
    guesses: G,
    out: &mut W,
) -> Result<(GuessResolver, PlaySummary), ReplayError>
where
    P: BufRead,
    G: BufRead,
    W: Write,
{
    let mut game = setup_fleet(placements)?;
    let summary = play(&mut game, guesses, out)?;
    Ok((game, summary))
}
