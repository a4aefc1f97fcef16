//! Full-depth minimax search for the computer opponent.
//!
//! The search explores the whole remaining game tree without pruning. A
//! 3x3 board has at most 9! move sequences, so the worst case is a few
//! hundred thousand positions and the answer is always exact.
//!
//! Scores are from the point of view of the side the search was started
//! for: a win `d` plies after the candidate move is worth `10 - d`, a
//! loss `d - 10`, a draw `0`. Faster wins and slower losses score higher.

use super::action::{Move, MoveError};
use super::types::{Board, Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win on the ply right after the candidate move.
pub const WIN_SCORE: i32 = 10;

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate cell.
    pub mv: Move,
    /// Minimax value of playing it.
    pub score: i32,
}

/// Scores every empty cell for `mover`, in row-major order.
///
/// The caller's board is not modified; trial marks are placed on a
/// private copy.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] if the board has no empty cell.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn score_moves(board: &Board, mover: Player) -> Result<Vec<ScoredMove>, MoveError> {
    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    let mut scratch = *board;
    let scored = candidates
        .into_iter()
        .map(|mv| {
            scratch.set(mv, Cell::from(mover));
            let score = minimax(&mut scratch, 0, mover, false);
            scratch.set(mv, Cell::Empty);
            ScoredMove { mv, score }
        })
        .collect();

    debug_assert_eq!(&scratch, board);
    Ok(scored)
}

/// Picks the optimal move for `mover`.
///
/// Among equally scored moves the first one in row-major order wins.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] if the board has no empty cell.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mover: Player) -> Result<Move, MoveError> {
    let scored = score_moves(board, mover)?;
    let best = pick_best(&scored).ok_or(MoveError::NoLegalMove)?;
    debug!(mv = %best.mv, score = best.score, "Engine chose move");
    Ok(best.mv)
}

/// First candidate with the strictly greatest score, or `None` if empty.
pub fn pick_best(scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// Minimax value of `board` for `mover`.
///
/// `maximizing` says whose ply it is: `mover` places a mark when true,
/// the opponent when false. Every trial mark is removed before returning,
/// so `board` comes back unchanged.
pub fn minimax(board: &mut Board, depth: i32, mover: Player, maximizing: bool) -> i32 {
    match board.status() {
        GameStatus::Won(winner) if winner == mover => return WIN_SCORE - depth,
        GameStatus::Won(_) => return depth - WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let mark = if maximizing {
        Cell::from(mover)
    } else {
        Cell::from(mover.opponent())
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in board.empty_cells() {
        board.set(mv, mark);
        let score = minimax(board, depth + 1, mover, !maximizing);
        board.set(mv, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
