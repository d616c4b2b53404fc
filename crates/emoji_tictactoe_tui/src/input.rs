//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use emoji_tictactoe::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new game.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Digits 1-9 address cells 0-8.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
