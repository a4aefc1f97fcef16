//! Exhaustive check that the engine never loses.
//!
//! Plays the engine against every possible sequence of human replies,
//! starting from an empty board, and counts how each game ends.

use super::action::MoveError;
use super::engine;
use super::types::{Board, Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outcome counts over every game the human could force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Finished games enumerated.
    pub games: u64,
    /// Games the engine won.
    pub computer_wins: u64,
    /// Games that ended in a tie.
    pub draws: u64,
    /// Games the human won.
    pub human_wins: u64,
}

impl AuditReport {
    /// True when no human line of play beats the engine.
    pub fn is_unbeatable(&self) -> bool {
        self.human_wins == 0
    }

    fn record(&mut self, status: GameStatus, human: Player) {
        self.games += 1;
        match status {
            GameStatus::Won(winner) if winner == human => self.human_wins += 1,
            GameStatus::Won(_) => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Runs the audit with `human` playing every legal reply.
///
/// # Errors
///
/// Only if the engine fails to find a move on a non-terminal board,
/// which would be a bug in the search.
#[instrument]
pub fn audit(human: Player, first_mover: Player) -> Result<AuditReport, MoveError> {
    let mut report = AuditReport::default();
    let mut board = Board::new();
    walk(&mut board, human, first_mover, &mut report)?;

    info!(
        games = report.games,
        computer_wins = report.computer_wins,
        draws = report.draws,
        human_wins = report.human_wins,
        "Audit finished"
    );
    Ok(report)
}

fn walk(
    board: &mut Board,
    human: Player,
    to_move: Player,
    report: &mut AuditReport,
) -> Result<(), MoveError> {
    let status = board.status();
    if status.is_terminal() {
        report.record(status, human);
        return Ok(());
    }

    if to_move == human {
        for mv in board.empty_cells() {
            board.set(mv, Cell::from(human));
            walk(board, human, human.opponent(), report)?;
            board.set(mv, Cell::Empty);
        }
    } else {
        let mv = engine::best_move(board, to_move)?;
        board.set(mv, Cell::from(to_move));
        walk(board, human, human, report)?;
        board.set(mv, Cell::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_report_counts_add_up() {
        for first_mover in Player::iter() {
            let report = audit(Player::X, first_mover).unwrap();
            assert!(report.games > 0);
            assert_eq!(
                report.games,
                report.computer_wins + report.draws + report.human_wins
            );
        }
    }

    #[test]
    fn test_record() {
        let mut report = AuditReport::default();
        report.record(GameStatus::Won(Player::X), Player::X);
        report.record(GameStatus::Won(Player::O), Player::X);
        report.record(GameStatus::Draw, Player::X);
        assert_eq!(report.games, 3);
        assert_eq!(report.human_wins, 1);
        assert_eq!(report.computer_wins, 1);
        assert_eq!(report.draws, 1);
        assert!(!report.is_unbeatable());
    }
}
