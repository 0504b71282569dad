//! Canonical piece and team types for the engine.

use serde::{Deserialize, Serialize};

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    White,
    Black,
}

/// A piece on the board: a team plus a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order the generator emits them.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    /// Whether a pawn is allowed to become this kind.
    pub fn is_promotion_target(self) -> bool {
        !matches!(self, Self::Pawn | Self::King)
    }
}

impl Team {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn advance.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Row the team's pawns start on; the double step is only available from here.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Self::White => 2,
            Self::Black => 7,
        }
    }

    /// Row on which the team's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::White => 8,
            Self::Black => 1,
        }
    }

    /// Row holding the team's pieces in the starting layout.
    pub fn back_row(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 8,
        }
    }
}

impl Piece {
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    /// FEN letter: upper case for white, lower case for black.
    pub fn to_fen_char(self) -> char {
        match self.team {
            Team::White => self.kind.to_char_upper(),
            Team::Black => self.kind.to_char_lower(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Self { team, kind })
    }

    pub fn is_king_of(self, team: Team) -> bool {
        self.team == team && self.kind == PieceKind::King
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
