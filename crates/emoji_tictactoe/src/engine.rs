//! The game engine: board, turn order, and result.
//!
//! [`GameEngine`] is the only mutable game state. Move requests are either
//! accepted or ignored; an ignored request leaves every field untouched and
//! emits no event. After a `Win` or `Draw` only [`GameEngine::reset`] changes
//! anything.

use crate::action::{IgnoreReason, Move, MoveOutcome};
use crate::observer::{EngineEvent, GameObserver};
use crate::outcome::GameResult;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read-only copy of the state a renderer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Mark to move next.
    turn: Mark,
    /// Game status.
    result: GameResult,
    /// Most recently accepted position, cleared on reset.
    last_moved: Option<Position>,
}

/// Tic-tac-toe game engine.
pub struct GameEngine {
    board: Board,
    turn: Mark,
    result: GameResult,
    last_moved: Option<Position>,
    history: Vec<Move>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            result: GameResult::InProgress,
            last_moved: None,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next. Frozen once the game is over.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the most recently accepted position.
    pub fn last_moved(&self) -> Option<Position> {
        self.last_moved
    }

    /// Returns the accepted moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns a copy of the renderer-facing state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            result: self.result,
            last_moved: self.last_moved,
        }
    }

    /// Registers an observer for all later events.
    #[instrument(skip_all, fields(observers = self.observers.len() + 1))]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current mark at board index `index` (0-8).
    ///
    /// Out-of-range indices, occupied squares, and finished games are
    /// ignored without changing state.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => self.ignore(IgnoreReason::OutOfRange(index)),
        }
    }

    /// Places the current mark at `pos`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if self.result.is_terminal() {
            return self.ignore(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(pos) {
            return self.ignore(IgnoreReason::Occupied(pos));
        }

        let mv = Move::new(self.turn, pos);
        self.board.set(pos, Square::Occupied(mv.mark));
        self.history.push(mv);
        self.last_moved = Some(pos);

        self.result = rules::evaluate(&self.board);
        if !self.result.is_terminal() {
            self.turn = self.turn.opponent();
        }

        debug!(%mv, result = %self.result, "Accepted move");
        if self.result.is_terminal() {
            info!(result = %self.result, moves = self.history.len(), "Game over");
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        self.emit(EngineEvent::MoveAccepted {
            mv,
            result: self.result,
        });
        MoveOutcome::Accepted(mv)
    }

    /// Returns to the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.result = GameResult::InProgress;
        self.last_moved = None;
        self.history.clear();
        debug!("Reset game");
        self.emit(EngineEvent::Reset);
    }

    fn ignore(&self, reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Ignored move");
        MoveOutcome::Ignored(reason)
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                tracing::error!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("result", &self.result)
            .field("last_moved", &self.last_moved)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
