//! Legal-move detection and capture computation.
//!
//! A move is legal on an open cell iff at least one of the 8 directions
//! holds a contiguous run of opponent discs, starting immediately next to
//! the cell, terminated by one of the mover's own discs before the board
//! edge or an open cell. The same run walk yields the discs a move would
//! flip, so legality and "flips at least one disc" coincide by
//! construction.

use smallvec::SmallVec;

use crate::board::{Board, Cell, Coord, Direction, Player, DIRECTIONS};

/// Coordinates captured by a move. Bounded by the board, usually short.
pub type CaptureLine = SmallVec<[Coord; 8]>;

/// The opponent discs a move at `coord` would flip along one direction.
///
/// Returns an empty line when the direction leaves the board, hits an
/// open cell, or never reaches one of `player`'s own discs. The walk
/// starts at the neighbor of `coord`; `coord` itself is not examined.
#[must_use]
pub fn captures_in_direction(
    board: &Board,
    coord: Coord,
    player: Player,
    direction: Direction,
) -> CaptureLine {
    let opponent = player.opponent().disc();
    let mut line = CaptureLine::new();
    let mut cursor = coord;

    while let Some(next) = cursor.step(direction) {
        let cell = board.get(next);
        if cell == opponent {
            line.push(next);
            cursor = next;
        } else if cell == player.disc() {
            // Bounded run: everything collected so far flips
            return line;
        } else {
            // Open cell ends the run with no terminator
            break;
        }
    }
    CaptureLine::new()
}

/// All opponent discs a move at `coord` would flip, across all 8 directions.
///
/// Empty iff the move is not legal for `player` (assuming `coord` is open).
#[must_use]
pub fn captures(board: &Board, coord: Coord, player: Player) -> CaptureLine {
    let mut all = CaptureLine::new();
    for direction in DIRECTIONS {
        all.extend(captures_in_direction(board, coord, player, direction));
    }
    all
}

/// Check whether `player` may move at `coord`.
///
/// Legal iff the cell is open (empty or marker) and at least one
/// direction yields a capture. Directions are independent: a single
/// qualifying direction makes the whole cell legal.
#[must_use]
pub fn is_legal_move(board: &Board, coord: Coord, player: Player) -> bool {
    board.get(coord).is_open()
        && DIRECTIONS
            .iter()
            .any(|&direction| !captures_in_direction(board, coord, player, direction).is_empty())
}

/// Recompute the legal-move markers for `player`.
///
/// Clears every stale marker, then marks each empty cell where `player`
/// has a legal move. Returns the number of cells marked; zero means the
/// player is blocked and must pass.
pub fn annotate_legal_moves(board: &mut Board, player: Player) -> usize {
    board.clear_markers();

    let mut marked = 0;
    for coord in Coord::all() {
        if is_legal_move(board, coord, player) {
            board.set(coord, Cell::LegalMove);
            marked += 1;
        }
    }
    marked
}
