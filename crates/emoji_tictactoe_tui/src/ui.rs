//! Stateless UI rendering for emoji tic-tac-toe.

use crate::app::App;
use emoji_tictactoe::{GameResult, Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

const CELL_WIDTH: u16 = 12;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;

/// Base color for a mark.
fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Emoji Tic-Tac-Toe")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(status_line(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    draw_board(frame, chunks[2], app, now);

    let help = Paragraph::new("1-9 or arrows + Enter: play   n: new game   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    draw_confetti(frame, area, app, now);
}

/// Status text: next player, winner, or draw.
pub fn status_line(app: &App) -> Line<'static> {
    let markers = app.config().markers();
    let engine = app.engine();
    let marker = |mark: Mark| {
        Span::styled(
            markers.for_mark(mark).to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        )
    };

    match engine.result() {
        GameResult::InProgress => Line::from(vec![
            Span::raw("Next player: "),
            marker(engine.turn()),
        ]),
        GameResult::Win { mark, .. } => Line::from(vec![Span::raw("Winner: "), marker(mark)]),
        GameResult::Draw => Line::from("Game ended in a draw"),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, now, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, now: Instant, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, app, now, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, now: Instant, pos: Position) {
    let engine = app.engine();
    let square = engine.board().get(pos);
    let winning = engine
        .result()
        .winning_line()
        .is_some_and(|line| line.contains(pos));

    let (text, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (
            app.config().markers().for_mark(mark).to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if winning && let Square::Occupied(mark) = square {
        style = style
            .bg(mark_color(mark))
            .fg(Color::White)
            .add_modifier(Modifier::SLOW_BLINK);
    }
    if app.emphasized(now) == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if pos == app.cursor() && !engine.result().is_terminal() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    // Vertically center the single text line in the 3-row cell.
    let lines = vec![Line::raw(""), Line::from(Span::styled(text, style))];
    let paragraph = Paragraph::new(lines)
        .style(if winning { style } else { Style::default() })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_confetti(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let confetti = app.confetti();
    let Some(mark) = confetti.mark() else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = Style::default().fg(match mark {
        Mark::X => Color::LightBlue,
        Mark::O => Color::LightRed,
    });
    let buf = frame.buffer_mut();
    for (x, y, glyph) in confetti.visible(now) {
        let col = area.x + (x * f32::from(area.width - 1)) as u16;
        let row = area.y + (y * f32::from(area.height - 1)) as u16;
        buf.set_string(col, row, glyph.to_string(), style);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
