//! Emoji Tic-Tac-Toe game engine.
//!
//! Pure game state with no rendering concerns:
//!
//! - **Engine**: [`GameEngine`] owns the board, turn order, and result
//! - **Rules**: [`rules`] evaluates any [`Board`] for a win or draw
//! - **Observer**: renderers [`subscribe`](GameEngine::subscribe) to
//!   [`EngineEvent`]s or poll [`GameEngine::snapshot`]
//! - **Invariants**: properties every accepted move preserves
//!
//! # Example
//!
//! ```
//! use emoji_tictactoe::{GameEngine, GameResult, Mark};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.result().winner(), Some(Mark::X));
//!
//! engine.reset();
//! assert_eq!(engine.result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod line;
mod observer;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use engine::{GameEngine, Snapshot};
pub use error::ParseError;
pub use line::Line;
pub use observer::{EngineEvent, GameObserver};
pub use outcome::GameResult;
pub use position::Position;
pub use types::{Board, Mark, Square};
