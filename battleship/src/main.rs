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
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use thiserror::Error;

use battlereplay::{
    game::{self, GuessResolver, ReplayError},
    ShipKind,
};

mod logging;

/// Error that ends the program.
#[derive(Debug, Error)]
enum CliError {
    #[error("Could not open file: {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("no {0} file given")]
    MissingPath(&'static str),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    logging::init();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Replays a battleship game from a file of ship placements and a file of guesses.")
        .after_help(
            "Any file not given as an argument is read as a path from standard input, \
             placements first. Set BATTLESHIP_LOG to control log output on stderr.",
        )
        .arg(
            Arg::with_name("placements")
                .value_name("PLACEMENTS")
                .help("player one's ship placements, one \"<kind> <x1> <y1> <x2> <y2>\" per line")
                .index(1),
        )
        .arg(
            Arg::with_name("guesses")
                .value_name("GUESSES")
                .help("player two's guesses, one \"<x> <y>\" per line")
                .index(2),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("print the final board after the game"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        log::debug!("exiting after {:?}", err);
        println!("ERROR: {}", err);
        process::exit(1);
    }
}

/// Set up the fleet, then play out the guesses. The guess file isn't looked at until the
/// fleet has been accepted.
fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let placements = input.path(matches, "placements")?;
    let mut game = game::setup_fleet(open(&placements)?)?;

    let guesses = input.path(matches, "guesses")?;
    let guesses = open(&guesses)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    game::play(&mut game, guesses, &mut out)?;
    if matches.is_present("reveal") {
        writeln!(out)?;
        show_revealed_board(&mut out, &game)?;
    }
    out.flush()?;
    Ok(())
}

/// Open a file for buffered reading.
fn open(path: &str) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::Open {
            path: path.to_owned(),
            source,
        })
}

/// Print out the fully-revealed board.
fn show_revealed_board(out: &mut impl Write, game: &GuessResolver) -> io::Result<()> {
    enum RevealedCell {
        Empty,
        Shot,
        NotShot(ShipKind),
        Hit(ShipKind),
        Sunk(ShipKind),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::NotShot(kind) => f.pad(&kind.to_string()),
                RevealedCell::Hit(kind) => f.pad(&format!("x{}", kind)),
                RevealedCell::Sunk(kind) => f.pad(&format!("X{}", kind)),
            }
        }
    }
    let board = game.board();
    show_board(
        out,
        board.iter_rows().map(move |row| {
            row.map(move |(_, cell)| match cell.occupant() {
                None if cell.is_guessed() => RevealedCell::Shot,
                None => RevealedCell::Empty,
                Some(kind) if board.get_ship(kind).map_or(false, |s| s.is_sunk()) => {
                    RevealedCell::Sunk(kind)
                }
                Some(kind) if cell.is_guessed() => RevealedCell::Hit(kind),
                Some(kind) => RevealedCell::NotShot(kind),
            })
        }),
    )
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(
    out: &mut impl Write,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) -> io::Result<()> {
    write!(out, "   ")?;
    for i in 0..battlereplay::BOARD_SIZE {
        write!(out, "{:^4}", i)?;
    }
    writeln!(out)?;
    for (i, row) in rows.enumerate() {
        write!(out, "{:>2} ", i)?;
        for cell in row {
            write!(out, "{:^4}", cell)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Reads file paths that weren't given on the command line, one per line.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Get the path for the named argument, falling back to the next line of input.
    fn path(&mut self, matches: &ArgMatches, name: &'static str) -> Result<String, CliError> {
        if let Some(path) = matches.value_of(name) {
            return Ok(path.to_owned());
        }
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(CliError::MissingPath(name));
        }
        Ok(self.buf.trim().to_owned())
    }
}
