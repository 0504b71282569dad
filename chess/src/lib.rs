//! Chess rules engine: board state, move generation, turn order, and
//! check / checkmate / stalemate detection.
//!
//! En passant and castling are not modeled.

pub mod board;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod position;
pub mod rules;
pub mod types;

pub use board::{Board, BoardError};
pub use fen::{FenError, STARTING_FEN};
pub use game::{Game, GameError, GameStatus, HistoryEntry, IllegalMove};
pub use moves::{Move, MoveParseError};
pub use position::{Position, PositionError};
pub use types::{Piece, PieceKind, Team};
