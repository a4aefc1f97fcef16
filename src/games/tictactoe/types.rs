//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (the human by default).
    X,
    /// Player O (the computer by default).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is outside 0-2.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        let mv = Move::new(row, col)?;
        Ok(self.get(mv))
    }

    /// Places `player`'s mark at the given coordinates.
    ///
    /// The board is left untouched when the move is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates outside 0-2 and
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let mv = Move::new(row, col)?;
        if !self.get(mv).is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.set(mv, Cell::from(player));
        Ok(())
    }

    /// Returns the cell at a validated move.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Overwrites a cell without validation. Used by the search to place
    /// and undo trial marks.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.index()] = cell;
    }

    /// Checks if the cell at a validated move is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Returns all empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_empty(*mv))
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Returns the owner of the first complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if no empty cells remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the game status from the grid.
    ///
    /// A win is reported before a draw, so a full board with a complete
    /// line is a win.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::X => write!(f, "X")?,
                    Cell::O => write!(f, "O")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {}", message)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub message: String,
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O`, `.`, `_` or `-`.
    ///
    /// Whitespace, `/` and `|` are treated as separators, so
    /// `"XX./.O./..."` and `"X X _ | _ O _ | _ _ _"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardParseError {
                        message: format!("unexpected character '{}'", other),
                    });
                }
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells.try_into().map_err(|cells: Vec<Cell>| BoardParseError {
            message: format!("expected 9 cells, found {}", cells.len()),
        })?;

        Ok(Self { cells })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a result.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} Wins!", player),
            GameStatus::Draw => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.cell_at(0, 0), Ok(Cell::X));
        assert_eq!(board.cell_at(0, 1), Ok(Cell::X));
        assert_eq!(board.cell_at(1, 1), Ok(Cell::O));
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert!(err.message.contains("expected 9 cells"));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert!("XO?......".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.apply_move(1, 1, Player::O).unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GameStatus::Won(Player::X).to_string(), "X Wins!");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "O Wins!");
        assert_eq!(GameStatus::Draw.to_string(), "Tie");
    }

    #[test]
    fn test_player_parse_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
