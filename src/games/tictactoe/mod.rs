//! Tic-tac-toe against a full-depth minimax opponent.

mod action;
mod audit;
mod engine;
mod game;
pub mod invariants;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveParseError};
pub use audit::{AuditReport, audit};
pub use engine::{ScoredMove, WIN_SCORE, best_move, minimax, pick_best, score_moves};
pub use game::{COMPUTER, GameSession, HUMAN, Turn, apply_human_move, computer_move, new_game, status};
pub use rules::{check_winner, is_draw, is_full, win::winning_lines};
pub use types::{Board, BoardParseError, Cell, GameStatus, Player};
