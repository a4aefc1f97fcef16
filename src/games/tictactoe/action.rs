//! First-class move types for tic-tac-toe.
//!
//! A move is a coordinate pair, validated on construction. Whether it is
//! legal on a particular board is decided by the board itself.

use super::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move in tic-tac-toe: a (row, col) pair, each in 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Move`].
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    /// All nine moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, checking both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `row` or `col` is greater than 2.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-2).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column (0-2).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a move from a keypad number (1-9).
    pub fn from_keypad(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Get label for this move (for display).
    #[instrument]
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when text cannot be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot read '{}' as a move", input)]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Reads a keypad number (`1`-`9`) or a `row,col` / `row col` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [number] => {
                let number = number.parse::<usize>().map_err(|_| err())?;
                Move::from_keypad(number).ok_or_else(err)
            }
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| err())?;
                let col = col.parse::<usize>().map_err(|_| err())?;
                Move::new(row, col).map_err(|_| err())
            }
            _ => Err(err()),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside 0-2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The search was asked for a move on a board with no empty cells.
    #[display("No legal move available")]
    NoLegalMove,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", player)]
    NotYourTurn {
        /// The player who tried to move.
        player: Player,
    },
}

impl std::error::Error for MoveError {}
