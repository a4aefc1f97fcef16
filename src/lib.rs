//! Unbeatable tic-tac-toe - a 3x3 board and a full-depth minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the grid, move validation and win/draw detection
//! - **Engine**: exhaustive minimax choosing the computer's move
//! - **Session**: one human against the engine, turn by turn
//! - **Console**: line-based driver built on an async orchestrator
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameSession, GameStatus, Move, Player};
//!
//! let mut session = GameSession::new(Player::X, Player::O);
//! let opening = session.computer_move().unwrap();
//! assert_eq!(opening, Move::new(0, 0).unwrap());
//!
//! session.apply_human_move(1, 1).unwrap();
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AuditReport, Board, BoardParseError, COMPUTER, Cell, GameSession, GameStatus, HUMAN, Move,
    MoveError, MoveParseError, Player, ScoredMove, Turn, WIN_SCORE, apply_human_move, audit,
    best_move, check_winner, computer_move, is_draw, is_full, minimax, new_game, pick_best,
    score_moves,
    status, winning_lines,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants;
