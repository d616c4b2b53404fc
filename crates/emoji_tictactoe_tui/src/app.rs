//! Application state: the engine plus everything only the renderer cares
//! about (cursor, move emphasis, confetti).

use crate::config::TuiConfig;
use crate::confetti::Confetti;
use crate::input::{self, Action};
use crossterm::event::KeyCode;
use emoji_tictactoe::{EngineEvent, GameEngine, GameResult, Position};
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    events: UnboundedReceiver<EngineEvent>,
    config: TuiConfig,
    cursor: Position,
    /// Last-moved cell and when its emphasis ends.
    emphasis: Option<(Position, Instant)>,
    confetti: Confetti,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh engine.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let mut engine = GameEngine::new();
        engine.subscribe(tx);
        Self {
            engine,
            events,
            config,
            cursor: Position::Center,
            emphasis: None,
            confetti: Confetti::default(),
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The active configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current confetti burst.
    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The emphasized cell at `now`, if its emphasis has not run out.
    pub fn emphasized(&self, now: Instant) -> Option<Position> {
        self.emphasis
            .and_then(|(pos, until)| (now < until).then_some(pos))
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.engine.place(pos);
            }
            Action::PlayCursor => {
                self.engine.place(self.cursor);
            }
            Action::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            Action::NewGame => self.engine.reset(),
            Action::Quit => self.should_quit = true,
        }

        self.drain_events(now);
    }

    /// Advances animations and applies pending engine events.
    pub fn tick(&mut self, now: Instant) {
        self.drain_events(now);
        if self.confetti.is_active() {
            self.confetti.update(now);
        }
        if self.emphasized(now).is_none() {
            self.emphasis = None;
        }
    }

    fn drain_events(&mut self, now: Instant) {
        while let Ok(event) = self.events.try_recv() {
            self.on_event(event, now);
        }
    }

    #[instrument(skip(self, now))]
    fn on_event(&mut self, event: EngineEvent, now: Instant) {
        let animation = self.config.animation();
        match event {
            EngineEvent::MoveAccepted { mv, result } => {
                self.emphasis = Some((mv.position, now + animation.move_highlight()));
                if let GameResult::Win { mark, .. } = result {
                    self.confetti.burst(
                        mark,
                        *animation.confetti_pieces(),
                        animation.confetti_lifetime(),
                        now,
                        &mut rand::thread_rng(),
                    );
                }
            }
            EngineEvent::Reset => {
                self.emphasis = None;
                self.confetti.clear();
            }
        }
    }
}
