use std::fmt;
use std::iter;
use std::str::FromStr;

const ASCII_1: u8 = b'1';
const ASCII_LOWER_A: u8 = b'a';

/// The board width and height. The engine plays on a fixed 8×8 board.
pub const BOARD_SIZE: u8 = 8;

/// Represents a position of each cell in the game board.
///
/// Squares are addressed by `(row, col)`, both 0 to 7. Row 0 is Black's back
/// rank and row 7 is White's, so the algebraic rank number is `8 - row`.
/// A `Square` can only be constructed from in-range coordinates; a UI layer
/// translating pointer events never needs to re-validate once it holds one.
///
/// # Examples
///
/// ```
/// use regicide::Square;
///
/// let sq = Square::new(6, 4).unwrap();
/// assert_eq!("e2", sq.to_string());
/// ```
///
/// `Square` can be created by parsing algebraic notation as well.
///
/// ```
/// use regicide::Square;
///
/// let sq = Square::from_algebraic("e2").unwrap();
/// assert_eq!(6, sq.row());
/// assert_eq!(4, sq.col());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    inner: u8,
}

impl Square {
    /// The total number of squares on the board.
    pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Creates a new instance of `Square`.
    ///
    /// Both `row` and `col` can take a value from 0 to 7. Returns `None` for
    /// anything outside the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }

        Some(Square {
            inner: row * BOARD_SIZE + col,
        })
    }

    /// Creates a new instance of `Square` from algebraic notation such as
    /// `"e4"`. The file letter is `a` to `h`, the rank digit `1` to `8`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes: &[u8] = s.as_bytes();

        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0];
        if file < ASCII_LOWER_A || file >= ASCII_LOWER_A + BOARD_SIZE {
            return None;
        }

        let rank = bytes[1];
        if rank < ASCII_1 || rank >= ASCII_1 + BOARD_SIZE {
            return None;
        }

        let col = file - ASCII_LOWER_A;
        let row = BOARD_SIZE - 1 - (rank - ASCII_1);

        Square::new(row, col)
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= Self::NUM_SQUARES {
            return None;
        }

        Some(Square { inner: index })
    }

    /// Returns an iterator of all squares on the board, row by row from
    /// Black's back rank.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the row of the square (0-indexed, 0 = Black's back rank).
    pub fn row(self) -> u8 {
        self.inner / BOARD_SIZE
    }

    /// Returns the column of the square (0-indexed, 0 = the `a` file).
    pub fn col(self) -> u8 {
        self.inner % BOARD_SIZE
    }

    /// Returns both row and column as a tuple.
    #[inline(always)]
    pub fn coordinates(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Returns a new `Square` instance by moving the row and the column
    /// values, or `None` if the result would leave the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use regicide::square::consts::*;
    ///
    /// let shifted = SQ_E2.shift(-1, 0).unwrap();
    /// assert_eq!(SQ_E3, shifted);
    /// assert_eq!(None, SQ_A1.shift(1, 0));
    /// ```
    #[must_use]
    pub fn shift(self, drow: i8, dcol: i8) -> Option<Self> {
        let r = self.row() as i8 + drow;
        let c = self.col() as i8 + dcol;

        if !(0..BOARD_SIZE as i8).contains(&r) || !(0..BOARD_SIZE as i8).contains(&c) {
            return None;
        }

        Some(Square {
            inner: r as u8 * BOARD_SIZE + c as u8,
        })
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }

    /// Returns the file as a character, `a` to `h`.
    pub fn file_char(self) -> char {
        (self.col() + ASCII_LOWER_A) as char
    }

    /// Returns the rank as a character, `1` to `8`.
    pub fn rank_char(self) -> char {
        (BOARD_SIZE - 1 - self.row() + ASCII_1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Error type for parsing a square from algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square notation")
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square from algebraic notation (e.g. "e4", "a1").
    ///
    /// # Examples
    ///
    /// ```
    /// use regicide::Square;
    ///
    /// let sq: Square = "c7".parse().unwrap();
    /// assert_eq!(1, sq.row());
    /// assert_eq!(2, sq.col());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s).ok_or(ParseSquareError)
    }
}

/// Square constants named after algebraic notation.
pub mod consts {
    use super::Square;

    macro_rules! make_square {
        {0, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: 0 };
            make_square!{1, $($ts)*}
        };
        {$n:expr, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: $n };
            make_square!{($n + 1), $($ts)*}
        };
        {$n:expr, $t:ident} => {
            pub const $t: Square = Square { inner: $n };
        };
    }

    make_square! {0, SQ_A8 SQ_B8 SQ_C8 SQ_D8 SQ_E8 SQ_F8 SQ_G8 SQ_H8
    SQ_A7 SQ_B7 SQ_C7 SQ_D7 SQ_E7 SQ_F7 SQ_G7 SQ_H7
    SQ_A6 SQ_B6 SQ_C6 SQ_D6 SQ_E6 SQ_F6 SQ_G6 SQ_H6
    SQ_A5 SQ_B5 SQ_C5 SQ_D5 SQ_E5 SQ_F5 SQ_G5 SQ_H5
    SQ_A4 SQ_B4 SQ_C4 SQ_D4 SQ_E4 SQ_F4 SQ_G4 SQ_H4
    SQ_A3 SQ_B3 SQ_C3 SQ_D3 SQ_E3 SQ_F3 SQ_G3 SQ_H3
    SQ_A2 SQ_B2 SQ_C2 SQ_D2 SQ_E2 SQ_F2 SQ_G2 SQ_H2
    SQ_A1 SQ_B1 SQ_C1 SQ_D1 SQ_E1 SQ_F1 SQ_G1 SQ_H1}
}

/// This struct is created by the [`iter`] method on [`Square`].
///
/// [`iter`]: ./struct.Square.html#method.iter
/// [`Square`]: struct.Square.html
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        if cur as usize >= Square::NUM_SQUARES {
            return None;
        }

        self.current += 1;

        Some(Square { inner: cur })
    }
}
