//! The stateful game engine and its collaborator contract.
//!
//! - `game`: `GameEngine` itself, inbound requests, move outcomes
//! - `observer`: outbound notifications and the observer trait

pub mod game;
pub mod observer;

pub use game::{GameEngine, MoveOutcome, MoveRecord, RejectReason, Request};
pub use observer::{EngineObserver, Notification, NullObserver, Recorder};
