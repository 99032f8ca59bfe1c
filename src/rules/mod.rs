//! Game rules as pure functions over a board.
//!
//! The engine calls into these but holds the lifecycle state itself:
//! - `legality`: which moves are legal, and what each would capture
//! - `outcome`: disc tallies and winner determination

pub mod legality;
pub mod outcome;

pub use legality::{
    annotate_legal_moves, captures, captures_in_direction, is_legal_move, CaptureLine,
};
pub use outcome::{GameResult, Score};
