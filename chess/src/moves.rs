//! Moves and their coordinate notation (e.g. "e2e4", "e7e8q").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::position::{Position, PositionError};
use crate::types::PieceKind;

/// A piece moving from `start` to `end`.
///
/// `promotion` is only set when a pawn lands on the far rank. Equality is
/// structural, so a move with a different promotion kind is a different move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    pub const fn with_promotion(start: Position, end: Position, kind: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(kind),
        }
    }
}

/// Formats as `<start><end>[promotion]`, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char_lower())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidFormat(s.to_string()));
        }

        let start: Position = s[0..2].parse()?;
        let end: Position = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                Some(PieceKind::from_char(c).ok_or(MoveParseError::InvalidPromotion(c))?)
            }
        };

        Ok(Self {
            start,
            end,
            promotion,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("Invalid move format: {0}")]
    InvalidFormat(String),
    #[error("Invalid promotion piece: {0}")]
    InvalidPromotion(char),
    #[error(transparent)]
    Position(#[from] PositionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_move() {
        assert_eq!(Move::new(pos("e2"), pos("e4")).to_string(), "e2e4");
    }

    #[test]
    fn test_format_move_with_promotion() {
        let mv = Move::with_promotion(pos("e7"), pos("e8"), PieceKind::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            "g1f3".parse::<Move>().unwrap(),
            Move::new(pos("g1"), pos("f3"))
        );
        assert_eq!(
            "b2b1N".parse::<Move>().unwrap(),
            Move::with_promotion(pos("b2"), pos("b1"), PieceKind::Knight)
        );
    }

    #[test]
    fn test_parse_move_errors() {
        assert!(matches!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "e2e4x".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion('x'))
        ));
        assert!(matches!(
            "e2e9".parse::<Move>(),
            Err(MoveParseError::Position(_))
        ));
        assert!(matches!(
            "é2e4".parse::<Move>(),
            Err(MoveParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_moves_differ_by_promotion() {
        let plain = Move::new(pos("a7"), pos("a8"));
        let queen = Move::with_promotion(pos("a7"), pos("a8"), PieceKind::Queen);
        assert_ne!(plain, queen);
    }
}
