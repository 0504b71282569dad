use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::fen::{format_fen, parse_fen, FenError};
use crate::moves::Move;
use crate::position::Position;
use crate::rules;
use crate::types::{Piece, PieceKind, Team};

/// A single game: the board and whose turn it is.
///
/// The board is only changed by [`Game::make_move`], which also flips the turn.
/// Reaching checkmate or stalemate does not end the game by itself; callers
/// query [`Game::status`] and stop play when it says so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    team_turn: Team,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

/// Record of one committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The move as accepted, with the promotion kind filled in when a pawn promoted.
    pub mv: Move,
    /// The piece that moved, as it was before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    Check(Team),
    Checkmate { winner: Team },
    Stalemate,
}

impl Game {
    /// Create a new game from the standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Team::White)
    }

    /// Wrap an existing position.
    pub fn from_board(board: Board, team_turn: Team) -> Self {
        Self {
            board,
            team_turn,
            history: Vec::new(),
        }
    }

    /// Create a game from a FEN string (placement and side to move).
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let (board, team_turn) = parse_fen(fen)?;
        Ok(Self::from_board(board, team_turn))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The team whose move is awaited.
    pub fn team_turn(&self) -> Team {
        self.team_turn
    }

    /// Moves committed since this game was created.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal moves for the piece on `pos`, whichever team it belongs to.
    /// Empty if the square is empty.
    pub fn valid_moves(&self, pos: Position) -> Vec<Move> {
        rules::legal_moves_from(&self.board, pos)
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board, self.team_turn)
    }

    /// Make a move on the board.
    ///
    /// Fails without touching the game if the start square is empty, holds a
    /// piece of the side not on move, or the move is not legal. A pawn reaching
    /// the far rank becomes the requested piece, or a queen when no valid
    /// promotion kind was given.
    pub fn make_move(&mut self, mv: Move) -> Result<HistoryEntry, GameError> {
        let result = self.try_make_move(mv);
        if let Err(err) = &result {
            tracing::debug!(%mv, team = %self.team_turn, reason = %err, "rejected move");
        }
        result
    }

    fn try_make_move(&mut self, mv: Move) -> Result<HistoryEntry, GameError> {
        let piece = self
            .board
            .piece(mv.start)
            .ok_or(IllegalMove::EmptySquare(mv.start))?;
        if piece.team != self.team_turn {
            return Err(IllegalMove::WrongTurn(self.team_turn).into());
        }

        let mv = normalize_promotion(mv, piece);
        if !self.valid_moves(mv.start).contains(&mv) {
            return Err(IllegalMove::NotLegal(mv).into());
        }

        let captured = self.board.piece(mv.end);
        let promoted_to = mv.promotion;
        let placed = match promoted_to {
            Some(kind) => Piece::new(piece.team, kind),
            None => piece,
        };
        self.board.move_piece(mv, placed);
        debug_assert!(
            !rules::is_in_check(&self.board, piece.team),
            "legal move {mv} left the mover in check"
        );

        self.team_turn = self.team_turn.opponent();

        let entry = HistoryEntry {
            mv,
            piece,
            captured,
            promoted_to,
        };
        self.history.push(entry);

        tracing::debug!(
            %mv,
            team = %piece.team,
            captured = ?captured.map(|p| p.kind),
            promoted_to = ?promoted_to,
            "applied move"
        );
        match self.status() {
            GameStatus::InProgress => {}
            status => tracing::info!(?status, "position after {mv}"),
        }

        Ok(entry)
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        rules::is_in_check(&self.board, team)
    }

    pub fn is_in_checkmate(&self, team: Team) -> bool {
        rules::is_in_checkmate(&self.board, team)
    }

    pub fn is_in_stalemate(&self, team: Team) -> bool {
        rules::is_in_stalemate(&self.board, team)
    }

    /// Get the current game status for the side to move.
    pub fn status(&self) -> GameStatus {
        let team = self.team_turn;
        let in_check = self.is_in_check(team);
        let can_move = rules::has_legal_move(&self.board, team);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate {
                winner: team.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(team),
            (false, true) => GameStatus::InProgress,
        }
    }

    /// Export position to FEN (placement and side to move).
    pub fn to_fen(&self) -> String {
        format_fen(&self.board, self.team_turn)
    }
}

/// Fill in the promotion kind of a pawn move onto the far rank: a missing,
/// pawn or king request becomes a queen. Other moves are left as given.
fn normalize_promotion(mv: Move, piece: Piece) -> Move {
    if piece.kind != PieceKind::Pawn || mv.end.row() != piece.team.promotion_row() {
        return mv;
    }
    let kind = match mv.promotion {
        Some(kind) if kind.is_promotion_target() => kind,
        _ => PieceKind::Queen,
    };
    Move::with_promotion(mv.start, mv.end, kind)
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a move was refused. Shown to players as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("there is no piece on {0}")]
    EmptySquare(Position),
    #[error("it is {0}'s turn")]
    WrongTurn(Team),
    #[error("{0} is not a legal move")]
    NotLegal(Move),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("FEN parse error: {0}")]
    FenError(#[from] FenError),
}
