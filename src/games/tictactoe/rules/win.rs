//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player};

/// The eight lines, in the order they are checked:
/// three rows, three columns, main diagonal, anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the owner of a complete line, if `line` is one.
pub fn line_owner(board: &Board, line: [usize; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|index| board.cells()[index]);
    if a == b && b == c { a.player() } else { None }
}

/// Checks if there is a winner on the board.
///
/// Returns the player on the first complete line in [`LINES`] order,
/// `None` otherwise. Two owners at once cannot arise from alternating
/// play, so the order only matters for hand-built boards.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, *line))
}

/// Returns the cells of every line `player` has completed.
pub fn winning_lines(board: &Board, player: Player) -> Vec<[Move; 3]> {
    LINES
        .iter()
        .filter(|line| line_owner(board, **line) == Some(player))
        .filter_map(|line| {
            let [a, b, c] = *line;
            Some([Move::from_index(a)?, Move::from_index(b)?, Move::from_index(c)?])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".OX/.OX/.O.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Unreachable by legal play: both players own a row.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winning_lines() {
        let board: Board = "OOO/XX./...".parse().unwrap();
        let lines = winning_lines(&board, Player::O);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][2], Move::new(0, 2).unwrap());
        assert!(winning_lines(&board, Player::X).is_empty());
    }
}
