//! Color type representing each player side.

use std::fmt;

/// Represents each side of the game. White moves first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite side.
    ///
    /// # Examples
    ///
    /// ```
    /// use regicide::Color;
    ///
    /// assert_eq!(Color::Black, Color::White.flip());
    /// assert_eq!(Color::White, Color::Black.flip());
    /// ```
    pub fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the row direction in which this side's pawns advance.
    ///
    /// White sits on rows 6 and 7 and advances toward row 0, so the
    /// direction is `-1`; Black advances toward row 7 with `1`.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns an iterator over both colors, White first.
    pub fn iter() -> ColorIter {
        ColorIter {
            current: Some(Color::White),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// This struct is created by the [`iter`] method on [`Color`].
///
/// [`iter`]: enum.Color.html#method.iter
/// [`Color`]: enum.Color.html
pub struct ColorIter {
    current: Option<Color>,
}

impl Iterator for ColorIter {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current;

        self.current = match cur {
            Some(Color::White) => Some(Color::Black),
            _ => None,
        };

        cur
    }
}
