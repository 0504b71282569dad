//! FEN piece placement and side to move.
//!
//! Castling rights, en-passant square and move clocks are not tracked by the
//! engine: they are accepted and ignored when parsing and never written.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Piece, Team};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl Board {
    /// Parse the placement field of a FEN string (e.g. `rnbqkbnr/pppppppp/8/...`).
    pub fn from_fen_placement(placement: &str) -> Result<Self, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 8 - rank_idx as u8;
            let mut column = 1u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(FenError::InvalidPiece(c));
                    }
                    column += skip as u8;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece(c))?;
                    let pos = Position::new(row, column).map_err(|_| FenError::RankOverflow(row))?;
                    board.add_piece(pos, Some(piece));
                    column += 1;
                }
                if column > 9 {
                    return Err(FenError::RankOverflow(row));
                }
            }
            if column != 9 {
                return Err(FenError::RankUnderflow(row));
            }
        }

        Ok(board)
    }

    /// Format the board as a FEN placement field.
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in (1..=8u8).rev() {
            let mut empty = 0;
            for column in 1..=8u8 {
                let piece = Position::new(row, column)
                    .ok()
                    .and_then(|pos| self.piece(pos));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 1 {
                out.push('/');
            }
        }
        out
    }
}

/// Parse `<placement> [w|b] [ignored fields...]`. A missing side field means white.
pub fn parse_fen(fen: &str) -> Result<(Board, Team), FenError> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::InvalidFormat)?;
    let board = Board::from_fen_placement(placement)?;
    let team = match parts.next() {
        None | Some("w") => Team::White,
        Some("b") => Team::Black,
        Some(other) => return Err(FenError::InvalidSide(other.to_string())),
    };
    Ok((board, team))
}

/// Format a board and side to move as `<placement> <w|b>`.
pub fn format_fen(board: &Board, team: Team) -> String {
    let side = match team {
        Team::White => 'w',
        Team::Black => 'b',
    };
    format!("{} {}", board.to_fen_placement(), side)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("Invalid FEN format")]
    InvalidFormat,
    #[error("Expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("Rank {0} has more than 8 squares")]
    RankOverflow(u8),
    #[error("Rank {0} has fewer than 8 squares")]
    RankUnderflow(u8),
    #[error("Invalid side to move: {0}")]
    InvalidSide(String),
}
