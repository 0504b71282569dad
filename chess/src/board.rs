//! The 8x8 grid of pieces.

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::position::Position;
use crate::types::{Piece, PieceKind, Team};

const CELLS: usize = 64;

/// Back-rank layout, column 1 to 8.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement for one game.
///
/// Cells are stored flat in row-major order from a1, so cloning a board is a
/// plain copy of 64 small values. Legality checks clone the board once per
/// candidate move, and the clone never shares anything with the original.
///
/// Serializes as a sequence of 64 optional pieces in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Piece>>", try_from = "Vec<Option<Piece>>")]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// A board in the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clear the board and set up the standard starting layout.
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
        for team in [Team::White, Team::Black] {
            let back = team.back_row();
            let pawns = team.pawn_start_row();
            for (column, kind) in (1..=8).zip(BACK_RANK) {
                self.place(back, column, Piece::new(team, kind));
                self.place(pawns, column, Piece::new(team, PieceKind::Pawn));
            }
        }
    }

    fn place(&mut self, row: u8, column: u8, piece: Piece) {
        if let Ok(pos) = Position::new(row, column) {
            self.cells[pos.index()] = Some(piece);
        }
    }

    /// The piece on `pos`, if any.
    pub fn piece(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()]
    }

    /// Put `piece` on `pos`, or clear the square with `None`.
    ///
    /// This is a raw grid write; no chess rules are checked.
    pub fn add_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.cells[pos.index()] = piece;
    }

    /// Place `piece` on the move's end square and clear its start square.
    pub fn move_piece(&mut self, mv: Move, piece: Piece) {
        self.add_piece(mv.end, Some(piece));
        self.add_piece(mv.start, None);
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (Position::from_index(i), piece)))
    }

    /// Square of `team`'s king, scanning from a1.
    pub fn find_king(&self, team: Team) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is_king_of(team))
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Option<Piece>; CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::WrongCellCount(len))?;
        Ok(Self { cells })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Expected 64 cells, got {0}")]
    WrongCellCount(usize),
}
