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
use battlereplay::{
    game::{replay, ReplayError, SetupError},
    placement::PlacementError,
    Coordinate, GuessResolver, PlacementRecord, ShipKind,
};

const FLEET: &str = "\
A 0 0 0 4
B 2 2 5 2
S 9 7 9 9
D 5 5 5 7
P 7 0 8 0
";

fn run(placements: &str, guesses: &str) -> Result<(String, GuessResolver), ReplayError> {
    let mut out = Vec::new();
    let (game, _) = replay(placements.as_bytes(), guesses.as_bytes(), &mut out)?;
    Ok((String::from_utf8(out).unwrap(), game))
}

#[test]
fn carrier_hit_repeat_and_sink() {
    let (out, game) = run(FLEET, "0 0\n0 0\n0 1\n0 2\n0 3\n0 4\n").unwrap();
    assert_eq!(out, "hit\nhit (again)\nhit\nhit\nhit\nA sunk\n");
    assert_eq!(game.live_ships(), 4);
    assert!(game.board().get_ship(ShipKind::Carrier).unwrap().is_sunk());
}

#[test]
fn illegal_guess_leaves_board_untouched() {
    let (out, game) = run(FLEET, "10 0\n-3 4\n4 10\n").unwrap();
    assert_eq!(out, "illegal guess\nillegal guess\nillegal guess\n");
    assert!(game.board().iter_cells().all(|(_, cell)| !cell.is_guessed()));
}

#[test]
fn oversized_guess_is_illegal_and_play_continues() {
    let guesses = "99999999999999999999 0\n0 -99999999999999999999\n0 0\n";
    let (out, game) = run(FLEET, guesses).unwrap();
    assert_eq!(out, "illegal guess\nillegal guess\nhit\n");
    assert_eq!(game.live_ships(), 5);
}

#[test]
fn oversized_placement_is_out_of_bounds() {
    let err = run("A 0 0 0 99999999999999999999\n", "").unwrap_err();
    match err {
        ReplayError::Setup(SetupError::Placement(PlacementError::OutOfBounds(record))) => {
            assert_eq!(record.kind(), Some(ShipKind::Carrier));
            assert_eq!(record.y2, i64::max_value());
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn misses_and_repeats() {
    let (out, _) = run(FLEET, "1 1\n1 1\n7 0\n7 0\n").unwrap();
    assert_eq!(out, "miss\nmiss (again)\nhit\nhit (again)\n");
}

#[test]
fn wrong_size_aborts_before_guesses() {
    let err = run("A 0 0 0 3\n", "0 0\n").unwrap_err();
    match err {
        ReplayError::Setup(SetupError::Placement(PlacementError::WrongSize {
            record,
            expected,
            actual,
        })) => {
            assert_eq!(record, PlacementRecord::new(ShipKind::Carrier, 0, 0, 0, 3));
            assert_eq!((expected, actual), (5, 4));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn overlap_aborts_before_guesses() {
    let fleet = "S 5 3 5 5\nD 3 5 5 5\n";
    let mut out = Vec::new();
    // The guess stream would fail to parse if it were ever read.
    let err = replay(fleet.as_bytes(), "not a guess\n".as_bytes(), &mut out).unwrap_err();
    match err {
        ReplayError::Setup(SetupError::Overlap { record, coord, occupant }) => {
            assert_eq!(record, PlacementRecord::new(ShipKind::Destroyer, 3, 5, 5, 5));
            assert_eq!(coord, Coordinate::new(5, 5));
            assert_eq!(occupant, ShipKind::Submarine);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn fatal_messages_name_the_record() {
    let cases = [
        ("A 0 0 0 10\n", "ship out-of-bounds: A 0 0 0 10"),
        ("B 0 0 3 3\n", "ship not horizontal or vertical: B 0 0 3 3"),
        ("P 0 0 0 2\n", "incorrect ship size: P 0 0 0 2"),
        ("Z 0 0 0 10\n", "ship out-of-bounds: Z 0 0 0 10"),
        ("Z 0 0 0 1\n", "unknown ship kind: Z 0 0 0 1"),
        (
            "P 0 0 0 1\nP 3 3 3 4\n",
            "fleet composition incorrect: P 3 3 3 4",
        ),
        (
            "P 0 0 0 1\n",
            "fleet composition incorrect: 1 of 5 ships placed",
        ),
    ];
    for (fleet, message) in cases.iter() {
        let err = run(fleet, "").unwrap_err();
        assert_eq!(err.to_string(), *message);
    }
}

#[test]
fn game_over_stops_reading_guesses() {
    let guesses = "\
0 0
0 1
0 2
0 3
0 4
2 2
3 2
4 2
5 2
9 7
9 8
9 9
5 5
5 6
5 7
7 0
8 0
1 1
this line is never parsed
";
    let (out, game) = run(FLEET, guesses).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 18);
    assert_eq!(lines[4], "A sunk");
    assert_eq!(lines[8], "B sunk");
    assert_eq!(lines[11], "S sunk");
    assert_eq!(lines[14], "D sunk");
    assert_eq!(lines[16], "P sunk");
    assert_eq!(lines[17], "all ships sunk: game over");
    assert!(game.is_over());
    assert!(!game.board().cell_at(Coordinate::new(1, 1)).is_guessed());
}

#[test]
fn guess_stream_may_end_early() {
    let (out, game) = run(FLEET, "7 0\n").unwrap();
    assert_eq!(out, "hit\n");
    assert!(!game.is_over());
    assert_eq!(
        game.board().get_ship(ShipKind::PatrolBoat).unwrap().remaining_hits(),
        1
    );
}

#[test]
fn every_occupied_cell_belongs_to_one_ship() {
    let (_, game) = run(FLEET, "").unwrap();
    let board = game.board();
    assert_eq!(board.ship_count(), 5);
    let occupied = board
        .iter_cells()
        .filter(|(_, cell)| cell.occupant().is_some())
        .count();
    let total: usize = ShipKind::ALL.iter().map(|k| k.len()).sum();
    assert_eq!(occupied, total);
    for ship in board.iter_ships() {
        for &coord in ship.positions() {
            assert_eq!(board.cell_at(coord).occupant(), Some(ship.kind()));
        }
    }
    assert!(matches!(
        board.get_cell(Coordinate::new(0, 0)).map(|c| c.occupant()),
        Some(Some(ShipKind::Carrier))
    ));
}
