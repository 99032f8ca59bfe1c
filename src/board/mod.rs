//! Board types: cells, players, coordinates, and the 8x8 grid.
//!
//! This module contains the passive data model. Rule logic lives in
//! `crate::rules`; turn/lifecycle state lives in `crate::engine`.

pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::{Cell, Player};
pub use coord::{Coord, Direction, BOARD_SIZE, DIRECTIONS};
pub use grid::Board;
