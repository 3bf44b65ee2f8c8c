use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represents a move of a piece from one square to another.
///
/// This variant has exactly one kind of move; there are no drops, castling
/// moves or promotions to distinguish.
///
/// # Examples
///
/// ```
/// use regicide::Move;
/// use regicide::square::consts::*;
///
/// let m = Move::new(SQ_E2, SQ_E3);
/// assert_eq!("e2e3", m.to_string());
/// assert_eq!(Ok(m), "e2e3".parse());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new instance of `Move`.
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Error type for parsing a move from coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move notation")
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a move from coordinate notation, source square first (e.g.
    /// "e2e3").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(ParseMoveError);
        }

        let from = s
            .get(..2)
            .and_then(Square::from_algebraic)
            .ok_or(ParseMoveError)?;
        let to = s
            .get(2..)
            .and_then(Square::from_algebraic)
            .ok_or(ParseMoveError)?;

        Ok(Move { from, to })
    }
}
