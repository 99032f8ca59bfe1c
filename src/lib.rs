//! # reversi-engine
//!
//! A rules engine for Othello/Reversi: board representation, legal-move
//! detection, move application (disc flipping), turn alternation with
//! forced-pass handling, and game-end/winner determination.
//!
//! ## Design Principles
//!
//! 1. **Encapsulated State**: The engine owns its board. Callers never get
//!    raw grid access; state leaves the engine only as snapshots.
//!
//! 2. **Rules Are Pure**: Legality, captures, and outcomes are free
//!    functions over a `Board`. The stateful `GameEngine` composes them.
//!
//! 3. **Explicit Collaborator Contract**: Surrounding UI/messaging layers
//!    are out of scope. They inject an `EngineObserver` and send
//!    `Request`s; the engine notifies synchronously after every mutation.
//!
//! ## Architecture
//!
//! - **Four-State Cells**: `Empty`, `Black`, `White`, plus a transient
//!   `LegalMove` marker recomputed every turn. Exact enum comparison,
//!   never string identity.
//!
//! - **Bounded Forced-Pass Loop**: When the player to move is blocked the
//!   turn skips forward; two consecutive blocked checks end the game.
//!   Implemented as an explicit loop with at most 2 iterations.
//!
//! ## Modules
//!
//! - `board`: Cells, players, coordinates, the 8x8 grid
//! - `rules`: Legal-move detection, capture computation, outcomes
//! - `engine`: The stateful engine, requests, observer notifications

pub mod board;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Cell, Coord, Direction, Player, BOARD_SIZE, DIRECTIONS};

pub use crate::rules::{
    annotate_legal_moves, captures, captures_in_direction, is_legal_move, CaptureLine,
    GameResult, Score,
};

pub use crate::engine::{
    EngineObserver, GameEngine, MoveOutcome, MoveRecord, Notification, NullObserver, Recorder,
    RejectReason, Request,
};
