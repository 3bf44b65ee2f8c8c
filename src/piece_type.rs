use std::fmt;

/// Represents a kind of pieces.
///
/// The set is closed: each kind carries exactly one movement rule, and the
/// rules engine matches on it exhaustively.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Returns an iterator over all piece kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use regicide::PieceType;
    ///
    /// assert_eq!(6, PieceType::iter().count());
    /// ```
    pub fn iter() -> PieceTypeIter {
        PieceTypeIter {
            current: Some(PieceType::Pawn),
        }
    }

    /// Creates a new instance of `PieceType` from its lowercase letter form.
    pub fn from_char(c: char) -> Option<PieceType> {
        match c {
            'p' => Some(PieceType::Pawn),
            'r' => Some(PieceType::Rook),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Returns the lowercase letter form of this piece kind.
    pub fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// This struct is created by the [`iter`] method on [`PieceType`].
///
/// [`iter`]: enum.PieceType.html#method.iter
/// [`PieceType`]: enum.PieceType.html
pub struct PieceTypeIter {
    current: Option<PieceType>,
}

impl Iterator for PieceTypeIter {
    type Item = PieceType;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        self.current = match cur {
            Some(PieceType::Pawn) => Some(PieceType::Rook),
            Some(PieceType::Rook) => Some(PieceType::Knight),
            Some(PieceType::Knight) => Some(PieceType::Bishop),
            Some(PieceType::Bishop) => Some(PieceType::Queen),
            Some(PieceType::Queen) => Some(PieceType::King),
            _ => None,
        };

        cur
    }
}
