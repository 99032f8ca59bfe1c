//! Board coordinates and compass directions.
//!
//! Coordinates are zero-indexed (row, col) pairs in 0..8. Construction
//! and directional stepping are both checked, so out-of-range positions
//! cannot be represented and capture walks stop at the edge instead of
//! indexing past it.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// A board position.
///
/// ```
/// use reversi_engine::Coord;
///
/// let center = Coord::new(3, 4).unwrap();
/// assert_eq!(center.row(), 3);
/// assert_eq!(center.col(), 4);
///
/// // Off-board coordinates cannot be constructed
/// assert!(Coord::new(8, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if either component is off-board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0..8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0..8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step one square in a direction, or `None` when leaving the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row as i8 + direction.delta_row;
        let col = self.col as i8 + direction.delta_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over every coordinate on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit or compound delta in {-1, 0, 1} x {-1, 0, 1}, excluding (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    delta_row: i8,
    delta_col: i8,
}

impl Direction {
    const fn new(delta_row: i8, delta_col: i8) -> Self {
        Self {
            delta_row,
            delta_col,
        }
    }
}

/// The 8 compass directions a capture line may run in.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(7, 7).is_some());
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert!(Coord::new(255, 255).is_none());
    }

    #[test]
    fn test_step_interior() {
        let c = Coord::new(3, 3).unwrap();
        let ne = Direction::new(-1, 1);
        assert_eq!(c.step(ne), Coord::new(2, 4));
    }

    #[test]
    fn test_step_off_edges() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::new(-1, 0)), None);
        assert_eq!(corner.step(Direction::new(0, -1)), None);
        assert_eq!(corner.step(Direction::new(-1, -1)), None);
        assert_eq!(corner.step(Direction::new(1, 1)), Coord::new(1, 1));

        let far = Coord::new(7, 7).unwrap();
        assert_eq!(far.step(Direction::new(1, 0)), None);
        assert_eq!(far.step(Direction::new(0, 1)), None);
    }

    #[test]
    fn test_eight_distinct_directions() {
        // All 8 compass deltas present, none zero
        assert_eq!(DIRECTIONS.len(), 8);
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!(a.delta_row != 0 || a.delta_col != 0);
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_all_covers_board() {
        let coords: Vec<_> = Coord::all().collect();
        assert_eq!(coords.len(), 64);
        assert_eq!(coords[0], Coord::new(0, 0).unwrap());
        assert_eq!(coords[63], Coord::new(7, 7).unwrap());
    }

    #[test]
    fn test_coord_display() {
        let c = Coord::new(2, 5).unwrap();
        assert_eq!(format!("{}", c), "(2, 5)");
    }
}
