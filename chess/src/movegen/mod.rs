//! Pseudo-legal move generation.
//!
//! Every generator maps `(board, square, team)` to the moves the piece on that
//! square could make by geometry and capture rules alone. Whether a move leaves
//! the mover's own king attacked is decided later, in [`crate::rules`].
//!
//! Off-board candidates never reach the board: [`Position::offset`] returns
//! `None` for them and the walk stops there.

mod leapers;
mod pawn;
mod sliders;

pub use leapers::{king_moves, knight_moves};
pub use pawn::pawn_moves;
pub use sliders::{bishop_moves, queen_moves, rook_moves};

use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;
use crate::types::{Piece, PieceKind, Team};

/// A `(row, column)` step.
pub(crate) type Offset = (i8, i8);

/// Pseudo-legal moves for `piece` standing on `from`.
pub fn pseudo_legal_moves(board: &Board, from: Position, piece: Piece) -> Vec<Move> {
    let team = piece.team;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, team),
        PieceKind::Knight => knight_moves(board, from, team),
        PieceKind::Bishop => bishop_moves(board, from, team),
        PieceKind::Rook => rook_moves(board, from, team),
        PieceKind::Queen => queen_moves(board, from, team),
        PieceKind::King => king_moves(board, from, team),
    }
}

/// Whether a piece of `team` may end its move on `pos`: empty, or an enemy to capture.
fn can_land(board: &Board, pos: Position, team: Team) -> bool {
    board
        .piece(pos)
        .map_or(true, |occupant| occupant.team != team)
}

/// Ride each direction until the edge or the first occupied square. An enemy
/// blocker is captured; a friendly one is not. Either way the ray ends there.
fn slide(board: &Board, from: Position, team: Team, directions: &[Offset]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(row_step, column_step) in directions {
        let mut current = from;
        while let Some(next) = current.offset(row_step, column_step) {
            match board.piece(next) {
                None => moves.push(Move::new(from, next)),
                Some(blocker) => {
                    if blocker.team != team {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

/// One jump per offset, no walking.
fn step(board: &Board, from: Position, team: Team, offsets: &[Offset]) -> Vec<Move> {
    offsets
        .iter()
        .filter_map(|&(row_delta, column_delta)| from.offset(row_delta, column_delta))
        .filter(|&to| can_land(board, to, team))
        .map(|to| Move::new(from, to))
        .collect()
}
