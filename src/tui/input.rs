//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use unbeatable_tictactoe::Move;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Move::new(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_one_cell() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Down), at(2, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Left), at(1, 0));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(at(1, 2), KeyCode::Enter), at(1, 2));
    }
}
