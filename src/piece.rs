use crate::{Color, PieceType};
use std::fmt;

/// Represents a piece on the game board: a kind and the side it belongs to.
///
/// A piece is immutable once created. Moving a piece means relocating the
/// same value to a different square; a captured piece is simply discarded.
///
/// # Examples
///
/// ```
/// use regicide::{Color, Piece, PieceType};
///
/// let pc = Piece {
///     piece_type: PieceType::Queen,
///     color: Color::White,
/// };
/// assert_eq!("Q", pc.to_string());
/// assert_eq!('♕', pc.unicode_symbol());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Creates a new instance of `Piece`.
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Creates a new instance of `Piece` from its letter form.
    ///
    /// Uppercase letters are White pieces, lowercase letters Black ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use regicide::{Color, Piece, PieceType};
    ///
    /// let pc = Piece::from_char('K').unwrap();
    /// assert_eq!(PieceType::King, pc.piece_type);
    /// assert_eq!(Color::White, pc.color);
    /// ```
    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        PieceType::from_char(c.to_ascii_lowercase()).map(|piece_type| Piece { piece_type, color })
    }

    /// Returns a new `Piece` of the same kind belonging to the other side.
    pub fn flip(self) -> Self {
        Piece {
            color: self.color.flip(),
            ..self
        }
    }

    /// Returns the figurine symbol for this piece, the glyphs a text UI
    /// typically renders on the board.
    pub fn unicode_symbol(self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.piece_type.to_char();

        if self.color == Color::White {
            write!(f, "{}", c.to_ascii_uppercase())
        } else {
            write!(f, "{c}")
        }
    }
}
