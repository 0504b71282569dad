use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;
use crate::types::{PieceKind, Team};

/// Pawn moves: single push, double push from the start row, diagonal captures.
///
/// A push or capture onto the promotion row expands into one move per
/// promotion kind. En passant is not generated.
pub fn pawn_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    let mut moves = Vec::new();
    let forward = team.pawn_direction();

    if let Some(one) = from.offset(forward, 0) {
        if board.piece(one).is_none() {
            push_with_promotions(&mut moves, from, one, team);

            if from.row() == team.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.piece(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if board.piece(target).is_some_and(|victim| victim.team != team) {
            push_with_promotions(&mut moves, from, target, team);
        }
    }

    moves
}

fn push_with_promotions(moves: &mut Vec<Move>, from: Position, to: Position, team: Team) {
    if to.row() == team.promotion_row() {
        moves.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        moves.push(Move::new(from, to));
    }
}
