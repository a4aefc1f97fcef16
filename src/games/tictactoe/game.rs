//! Game flow for one human against the engine.
//!
//! The free functions are the minimal interface a driver needs with the
//! classic assignment (human X, computer O). [`GameSession`] adds the
//! configurable marks, turn tracking and move history the drivers use.

use super::action::{Move, MoveError};
use super::engine;
use super::invariants::{InvariantSet, SessionInvariants};
use super::types::{Board, GameStatus, Player};
use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human.
pub const HUMAN: Player = Player::X;

/// Mark played by the computer.
pub const COMPUTER: Player = Player::O;

/// Starts a game on an empty board.
///
/// The first mover only decides who the driver asks first; the board is
/// empty either way.
#[instrument]
pub fn new_game(first_mover: Player) -> Board {
    info!(%first_mover, "New game");
    Board::new()
}

/// Applies the human's move and returns the updated board.
///
/// # Errors
///
/// [`MoveError::OutOfRange`] or [`MoveError::CellOccupied`]. Boards are
/// `Copy`, so the caller's board is unchanged either way.
#[instrument(skip(board))]
pub fn apply_human_move(mut board: Board, row: usize, col: usize) -> Result<Board, MoveError> {
    board.apply_move(row, col, HUMAN)?;
    Ok(board)
}

/// Lets the engine play for the computer and returns the board and move.
///
/// # Errors
///
/// [`MoveError::NoLegalMove`] if the board is full.
#[instrument(skip(board))]
pub fn computer_move(mut board: Board) -> Result<(Board, Move), MoveError> {
    let mv = engine::best_move(&board, COMPUTER)?;
    board.apply_move(mv.row(), mv.col(), COMPUTER)?;
    Ok((board, mv))
}

/// Current status of `board`.
pub fn status(board: &Board) -> GameStatus {
    board.status()
}

/// A move that was played, with the player who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who moved.
    pub player: Player,
    /// Where.
    pub mv: Move,
}

/// One game between a human and the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    human: Player,
    first_mover: Player,
    to_move: Player,
    history: Vec<Turn>,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(human: Player, first_mover: Player) -> Self {
        Self {
            board: new_game(first_mover),
            human,
            first_mover,
            to_move: first_mover,
            history: Vec::new(),
        }
    }

    /// Creates a session using the marks from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.human(), *config.first_mover())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Mark played by the human.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Mark played by the engine.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// Who opened the game.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true when the engine should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.status().is_terminal() && self.to_move == self.computer()
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Status derived from the current board.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    /// Applies a human move.
    ///
    /// A rejected move leaves the session untouched and the turn with the
    /// human.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after the game has finished,
    /// [`MoveError::NotYourTurn`] while the engine is to move, and the
    /// board's own [`MoveError::OutOfRange`] / [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        self.ensure_turn(self.human)?;
        let mv = Move::new(row, col)?;
        self.board.apply_move(row, col, self.human)?;
        self.record(self.human, mv);
        Ok(mv)
    }

    /// Lets the engine play its move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after the game has finished and
    /// [`MoveError::NotYourTurn`] while the human is to move.
    #[instrument(skip(self), fields(computer = %self.computer()))]
    pub fn computer_move(&mut self) -> Result<Move, MoveError> {
        let computer = self.computer();
        self.ensure_turn(computer)?;
        let mv = engine::best_move(&self.board, computer)?;
        self.board.apply_move(mv.row(), mv.col(), computer)?;
        self.record(computer, mv);
        Ok(mv)
    }

    /// Throws the board away and starts again with the same marks.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new(self.human, self.first_mover);
    }

    fn ensure_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != player {
            return Err(MoveError::NotYourTurn { player });
        }
        Ok(())
    }

    fn record(&mut self, player: Player, mv: Move) {
        self.history.push(Turn { player, mv });
        self.to_move = player.opponent();
        debug!(%player, %mv, status = %self.status(), "Move recorded");

        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Session invariant violated");
            }
            debug_assert!(violations.is_empty(), "session invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
