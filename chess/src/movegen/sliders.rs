use super::{slide, Offset};
use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;
use crate::types::Team;

const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const QUEEN_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn bishop_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    slide(board, from, team, &BISHOP_DIRECTIONS)
}

pub fn rook_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    slide(board, from, team, &ROOK_DIRECTIONS)
}

pub fn queen_moves(board: &Board, from: Position, team: Team) -> Vec<Move> {
    slide(board, from, team, &QUEEN_DIRECTIONS)
}
