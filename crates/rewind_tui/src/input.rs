//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}
