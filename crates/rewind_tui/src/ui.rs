//! Stateless UI rendering for the game and its move list.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{MoveEntry, Player, Position, Square, Win};

const HELP: &str =
    "arrows/1-9 move  enter play  tab board/moves  o order  r restart  q quit";

/// Renders the whole screen.
///
/// `entries` are the move list rows in display order.
pub fn draw(frame: &mut Frame, app: &App, entries: &[MoveEntry]) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app, entries);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let win = app.engine().winner();
    let cursor = board_cursor(app);

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
        draw_row(frame, chunk, app, row, cursor, win.as_ref());
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

/// Square to highlight as the cursor, if the board takes input.
fn board_cursor(app: &App) -> Option<Position> {
    let playable = app.focus() == Focus::Board && !app.engine().status().is_over();
    playable.then_some(app.cursor())
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    row: usize,
    cursor: Option<Position>,
    win: Option<&Win>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, app, pos, cursor, win);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    cursor: Option<Position>,
    win: Option<&Win>,
) {
    let square = app.engine().board().get(pos);

    let (symbol, mut style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if square.is_empty() && app.engine().status().is_over() {
        style = style.add_modifier(Modifier::DIM);
    }
    if win.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Yellow);
    }
    if cursor == Some(pos) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, entries: &[MoveEntry]) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.description(), style)))
        })
        .collect();

    let border_style = if app.focus() == Focus::MoveList {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Moves ({})", app.order().label())),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::MoveList {
        state.select(entries.iter().position(|e| e.index == app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.engine().status();
    let text = match app.message() {
        Some(message) => format!("{status}  ({message})"),
        None => status.to_string(),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let entries = app.entries().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app, &entries)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_fresh_game() {
        let screen = render(&App::default());
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("You are at move #0"));
        assert!(screen.contains("Moves (Ascending)"));
    }

    #[test]
    fn test_cursor_follows_board_focus() {
        let mut app = App::default();
        assert_eq!(board_cursor(&app), Some(app.cursor()));
        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(board_cursor(&app), None);
    }

    #[test]
    fn test_cursor_hidden_once_game_is_over() {
        let mut app = App::default();
        for key in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(key)).unwrap();
        }
        assert!(app.engine().status().is_over());
        assert_eq!(board_cursor(&app), None);

        app.handle_key(KeyCode::Char('r')).unwrap();
        assert_eq!(board_cursor(&app), Some(app.cursor()));
    }

    #[test]
    fn test_renders_winner_and_move_list() {
        let mut app = App::default();
        for key in ['1', '5', '2', '6', '3'] {
            app.handle_key(KeyCode::Char(key)).unwrap();
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("You are at move #5 (1, 3)"));
        assert!(screen.contains("Go to game start"));
    }
}
