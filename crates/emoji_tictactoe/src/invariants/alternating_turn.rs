//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: history starts with X and alternates; while the game is in
/// progress the mark to move is the one after the last move, and once it is
/// over the mark to move is the one that made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let Some(last) = history.last() else {
            return engine.turn() == Mark::X;
        };

        if history[0].mark != Mark::X {
            return false;
        }
        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = if engine.result().is_terminal() {
            last.mark
        } else {
            last.mark.opponent()
        };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
