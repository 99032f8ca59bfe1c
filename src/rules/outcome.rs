//! Disc tallies and winner determination.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds more discs.
    Winner(Player),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Disc counts for both players at some observation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Tally a board by scanning all 64 cells.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.disc_count(Player::Black),
            white: board.disc_count(Player::White),
        }
    }

    /// Total occupied cells.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.black + self.white
    }

    /// Determine the winner from the tallies: more Black discs means
    /// Black wins, more White means White wins, equal is a draw.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Black),
            std::cmp::Ordering::Less => GameResult::Winner(Player::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}
