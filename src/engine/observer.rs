//! Outbound notifications.
//!
//! The engine does not know about views or messaging layers. Collaborators
//! inject an `EngineObserver`; the engine calls it synchronously after
//! every mutating operation, in a fixed order:
//!
//! 1. `BoardUpdated` - full 8x8 snapshot
//! 2. `WhiteCount`
//! 3. `BlackCount`
//! 4. `GameWon` - on the terminal transition only, once per game

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::GameResult;

/// A state-transition notification emitted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// The board changed; carries a full snapshot.
    BoardUpdated(Board),
    /// White's disc count after the change.
    WhiteCount(u8),
    /// Black's disc count after the change.
    BlackCount(u8),
    /// The game reached a terminal state.
    GameWon(GameResult),
}

/// Synchronous sink for engine notifications.
///
/// Implementations must not call back into the engine; notifications are
/// delivered while the engine is mid-operation.
pub trait EngineObserver {
    /// Receive one notification.
    fn notify(&mut self, notification: &Notification);
}

/// Observer that discards everything, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl EngineObserver for NullObserver {
    fn notify(&mut self, _notification: &Notification) {}
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    log: Vec<Notification>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.log
    }

    /// Drop the recorded notifications.
    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl EngineObserver for Recorder {
    fn notify(&mut self, notification: &Notification) {
        self.log.push(notification.clone());
    }
}
