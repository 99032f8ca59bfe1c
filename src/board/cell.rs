//! Cell states and players.
//!
//! ## Cell
//!
//! Every square on the board is exactly one of four states: empty, a
//! black disc, a white disc, or a transient legal-move marker. Markers
//! annotate empty squares and are recomputed every turn; they are never
//! treated as occupied.
//!
//! ## Player
//!
//! The two disc colors. Black moves first from the standard start.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by disc color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The player who moves first in a new game.
    #[must_use]
    pub const fn first() -> Self {
        Player::Black
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state of a disc owned by this player.
    #[must_use]
    pub const fn disc(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// State of a single board square.
///
/// `LegalMove` is a per-turn annotation on an empty square indicating the
/// current player may move there. It is cleared and recomputed before
/// every observation, and counts as unoccupied everywhere discs are
/// counted or capture lines are walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
    LegalMove,
}

impl Cell {
    /// Check if this cell holds a disc.
    #[must_use]
    pub const fn is_disc(self) -> bool {
        matches!(self, Cell::Black | Cell::White)
    }

    /// Check if this cell is open (empty or marker), i.e. not a disc.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !self.is_disc()
    }

    /// The player owning the disc in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty | Cell::LegalMove => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.disc()
    }
}
