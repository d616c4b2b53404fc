//! Result consistency invariant: the stored result matches the board.

use super::Invariant;
use crate::{GameEngine, rules};

/// Invariant: the engine's result equals a fresh evaluation of its board.
pub struct ResultConsistentInvariant;

impl Invariant<GameEngine> for ResultConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        rules::evaluate(engine.board()) == engine.result()
    }

    fn description() -> &'static str {
        "Result matches evaluation of the board"
    }
}
