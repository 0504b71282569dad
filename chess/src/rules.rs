//! Check detection and the legality filter.
//!
//! These work on a bare [`Board`] so that simulating a candidate move only
//! needs a board copy, not a whole game.

use crate::board::Board;
use crate::movegen::pseudo_legal_moves;
use crate::moves::Move;
use crate::position::Position;
use crate::types::{Piece, Team};

/// Whether `team`'s king is attacked by any opposing piece.
///
/// A board without a king for `team` is never in check.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    match board.find_king(team) {
        Some(king) => is_attacked_by(board, king, team.opponent()),
        None => false,
    }
}

/// Whether any piece of `attacker` has a pseudo-legal move ending on `target`.
pub fn is_attacked_by(board: &Board, target: Position, attacker: Team) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.team == attacker)
        .any(|(from, piece)| {
            pseudo_legal_moves(board, from, piece)
                .iter()
                .any(|mv| mv.end == target)
        })
}

/// Whether playing `mv` with `piece` keeps `piece.team`'s king out of check.
///
/// The move is played on a copy; `board` itself is untouched.
pub fn leaves_king_safe(board: &Board, mv: Move, piece: Piece) -> bool {
    let mut simulated = board.clone();
    simulated.move_piece(mv, piece);
    let safe = !is_in_check(&simulated, piece.team);
    tracing::trace!(%mv, safe, "simulated candidate move");
    safe
}

/// Legal moves for the piece on `from`; empty if the square is empty.
pub fn legal_moves_from(board: &Board, from: Position) -> Vec<Move> {
    let Some(piece) = board.piece(from) else {
        return Vec::new();
    };
    pseudo_legal_moves(board, from, piece)
        .into_iter()
        .filter(|&mv| leaves_king_safe(board, mv, piece))
        .collect()
}

/// Every legal move available to `team`, grouped by origin square from a1.
pub fn legal_moves(board: &Board, team: Team) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.team == team)
        .flat_map(|(from, _)| legal_moves_from(board, from))
        .collect()
}

/// Whether `team` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, team: Team) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.team == team)
        .any(|(from, piece)| {
            pseudo_legal_moves(board, from, piece)
                .into_iter()
                .any(|mv| leaves_king_safe(board, mv, piece))
        })
}

pub fn is_in_checkmate(board: &Board, team: Team) -> bool {
    is_in_check(board, team) && !has_legal_move(board, team)
}

pub fn is_in_stalemate(board: &Board, team: Team) -> bool {
    !is_in_check(board, team) && !has_legal_move(board, team)
}
