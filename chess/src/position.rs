//! Board coordinates.
//!
//! Rows and columns are 1-based, matching how players read the board: row 1 is
//! white's back rank, column 1 is the a-file. A `Position` is always on the
//! board; out-of-range coordinates are rejected when the value is built, so
//! board access never needs a bounds check of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: u8,
    column: u8,
}

/// Wire shape of a position; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawPosition {
    row: u8,
    column: u8,
}

impl Position {
    pub fn new(row: u8, column: u8) -> Result<Self, PositionError> {
        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&column) {
            return Err(PositionError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> u8 {
        self.column
    }

    /// Row-major index into a 64-cell array, (1,1) first.
    pub(crate) fn index(self) -> usize {
        usize::from(self.row - 1) * usize::from(BOARD_SIZE) + usize::from(self.column - 1)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        let size = usize::from(BOARD_SIZE);
        debug_assert!(index < size * size);
        Self {
            row: (index / size) as u8 + 1,
            column: (index % size) as u8 + 1,
        }
    }

    /// The square `(row_delta, column_delta)` away, or `None` if that falls off
    /// the board.
    pub fn offset(self, row_delta: i8, column_delta: i8) -> Option<Self> {
        let row = self.row as i8 + row_delta;
        let column = self.column as i8 + column_delta;
        if row < 1 || column < 1 {
            return None;
        }
        Self::new(row as u8, column as u8).ok()
    }

    /// All 64 squares, row by row starting at a1.
    pub fn all() -> impl Iterator<Item = Position> {
        let size = usize::from(BOARD_SIZE);
        (0..size * size).map(Self::from_index)
    }

    fn file_char(self) -> char {
        (b'a' + self.column - 1) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.row)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parse algebraic notation such as `"e2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(PositionError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(PositionError::InvalidSquare(s.to_string()));
        }
        Self::new(rank - b'0', file - b'a' + 1)
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.column)
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            column: pos.column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("Position ({row}, {column}) is off the board")]
    OutOfRange { row: u8, column: u8 },
    #[error("Invalid square: {0}")]
    InvalidSquare(String),
}
