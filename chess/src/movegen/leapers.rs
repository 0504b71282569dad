use super::{step, Offset};
use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;
use crate::types::Team;

const KNIGHT_JUMPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn knight_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    step(board, from, team, &KNIGHT_JUMPS)
}

/// King moves to adjacent squares. Castling is not generated.
pub fn king_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    step(board, from, team, &KING_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::test_support::{board_with, pos, targets};
    use crate::types::PieceKind;

    #[test]
    fn test_knight_in_centre() {
        let board = board_with(&[("d4", Team::White, PieceKind::Knight)]);
        let moves = knight_moves(&board, pos("d4"), Team::White);
        assert_eq!(
            targets(&moves),
            vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]
        );
    }

    #[test]
    fn test_knight_in_corner() {
        let board = board_with(&[("h8", Team::Black, PieceKind::Knight)]);
        let moves = knight_moves(&board, pos("h8"), Team::Black);
        assert_eq!(targets(&moves), vec!["f7", "g6"]);
    }

    #[test]
    fn test_knight_jumps_over_and_captures() {
        let board = Board::standard();
        let moves = knight_moves(&board, pos("b1"), Team::White);
        assert_eq!(targets(&moves), vec!["a3", "c3"]);

        let board = board_with(&[
            ("e5", Team::White, PieceKind::Knight),
            ("f7", Team::Black, PieceKind::Pawn),
            ("d7", Team::White, PieceKind::Pawn),
        ]);
        let moves = knight_moves(&board, pos("e5"), Team::White);
        assert!(moves.iter().any(|m| m.end == pos("f7")));
        assert!(!moves.iter().any(|m| m.end == pos("d7")));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_king_steps() {
        let board = board_with(&[
            ("e1", Team::White, PieceKind::King),
            ("d2", Team::White, PieceKind::Pawn),
            ("f2", Team::Black, PieceKind::Pawn),
        ]);
        let moves = king_moves(&board, pos("e1"), Team::White);
        assert_eq!(targets(&moves), vec!["d1", "e2", "f1", "f2"]);
    }

    #[test]
    fn test_king_boxed_in_at_start() {
        let board = Board::standard();
        assert!(king_moves(&board, pos("e8"), Team::Black).is_empty());
    }
}
