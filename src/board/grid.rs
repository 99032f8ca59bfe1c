//! The 8x8 board aggregate.
//!
//! `Board` owns its grid; cells are read and written only through
//! coordinate-checked accessors, so the four-state cell invariant and
//! the bounds guarantee hold everywhere.
//!
//! ## Text Form
//!
//! `Display` and `FromStr` use an 8-line ASCII form for fixtures and
//! debugging: `.` empty, `B` black disc, `W` white disc, `*` legal-move
//! marker.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player};
use super::coord::{Coord, BOARD_SIZE};

/// An 8x8 grid of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a board with the canonical four-disc starting position:
    /// White on the (3,3)/(4,4) diagonal, Black on the (3,4)/(4,3) diagonal.
    #[must_use]
    pub fn standard_start() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    /// Set the cell at a coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row() as usize][coord.col() as usize] = cell;
    }

    /// Place a player's disc at a coordinate.
    pub fn place(&mut self, coord: Coord, player: Player) {
        self.set(coord, player.disc());
    }

    /// Iterate over all cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.get(coord)))
    }

    /// Coordinates currently carrying a legal-move marker.
    pub fn marked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::LegalMove)
            .map(|(coord, _)| coord)
    }

    /// Clear every legal-move marker back to empty.
    pub fn clear_markers(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                if *cell == Cell::LegalMove {
                    *cell = Cell::Empty;
                }
            }
        }
    }

    /// Count the discs owned by a player.
    #[must_use]
    pub fn disc_count(&self, player: Player) -> u8 {
        let disc = player.disc();
        let mut count = 0;
        for row in &self.cells {
            for &cell in row {
                if cell == disc {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total occupied cells (both colors).
    #[must_use]
    pub fn occupancy(&self) -> u8 {
        self.disc_count(Player::Black) + self.disc_count(Player::White)
    }

    /// Check if every cell holds a disc.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupancy() == BOARD_SIZE * BOARD_SIZE
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                    Cell::LegalMove => '*',
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = String;

    /// Parse the `Display` form: 8 lines of 8 cells each.
    /// Whitespace-only lines are skipped so fixtures can be indented.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut rows = 0usize;

        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if rows >= BOARD_SIZE as usize {
                return Err(format!("expected {} rows, got more", BOARD_SIZE));
            }
            let mut cols = 0usize;
            for ch in line.chars() {
                if cols >= BOARD_SIZE as usize {
                    return Err(format!("row {}: expected {} cells, got more", rows, BOARD_SIZE));
                }
                board.cells[rows][cols] = match ch {
                    '.' => Cell::Empty,
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    '*' => Cell::LegalMove,
                    other => return Err(format!("row {}: unknown cell '{}'", rows, other)),
                };
                cols += 1;
            }
            if cols != BOARD_SIZE as usize {
                return Err(format!("row {}: expected {} cells, got {}", rows, BOARD_SIZE, cols));
            }
            rows += 1;
        }

        if rows != BOARD_SIZE as usize {
            return Err(format!("expected {} rows, got {}", BOARD_SIZE, rows));
        }
        Ok(board)
    }
}
