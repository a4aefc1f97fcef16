//! History consistency invariant: the history explains the board.

use super::super::{Cell, GameSession};
use super::Invariant;

/// Invariant: every recorded move's cell holds that player's mark, and
/// the number of occupied cells equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();

        let occupied = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        if occupied != session.history().len() {
            return false;
        }

        session
            .history()
            .iter()
            .all(|turn| board.get(turn.mv) == Cell::from(turn.player))
    }

    fn description() -> &'static str {
        "History length matches occupied cells and each move's cell holds its player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let session = GameSession::new(Player::X, Player::O);
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new(Player::X, Player::X);
        session.apply_human_move(2, 2).unwrap();
        session.computer_move().unwrap();
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_overwritten_cell_fails() {
        let mut session = GameSession::new(Player::X, Player::X);
        session.apply_human_move(0, 0).unwrap();
        session.board_mut().set(Move::ALL[0], Cell::O);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_unrecorded_mark_fails() {
        let mut session = GameSession::new(Player::X, Player::X);
        session.board_mut().set(Move::ALL[8], Cell::O);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
