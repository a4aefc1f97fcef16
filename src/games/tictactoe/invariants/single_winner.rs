//! Single winner invariant: X and O never both complete a line.

use super::super::GameSession;
use super::super::Player;
use super::super::rules::win::winning_lines;
use super::Invariant;

/// Invariant: at most one player owns a complete line.
///
/// This is why the fixed line order in win detection never changes the
/// outcome of a real game.
pub struct SingleWinnerInvariant;

impl Invariant<GameSession> for SingleWinnerInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        winning_lines(board, Player::X).is_empty() || winning_lines(board, Player::O).is_empty()
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
