//! Change notifications from the engine to a renderer.

use crate::action::Move;
use crate::outcome::GameResult;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Something the engine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A move was accepted; `result` is the status after it.
    MoveAccepted {
        /// The accepted move.
        mv: Move,
        /// Status after the move.
        result: GameResult,
    },
    /// The engine was returned to its initial state.
    Reset,
}

/// Receives engine events synchronously, in order, after the state change is
/// complete.
pub trait GameObserver {
    /// Called once per event.
    fn notify(&mut self, event: &EngineEvent);
}

/// Forwards events into a channel. A closed receiver is logged and
/// otherwise ignored.
impl GameObserver for UnboundedSender<EngineEvent> {
    fn notify(&mut self, event: &EngineEvent) {
        if self.send(*event).is_err() {
            warn!(?event, "Event receiver dropped");
        }
    }
}
