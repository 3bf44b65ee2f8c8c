//! A library for implementing a simplified chess application.
//!
//! `regicide` provides the types and rules for an intentionally small chess
//! variant: every piece keeps its familiar movement pattern, but sliding
//! pieces ignore anything standing in their way, pawns never advance two
//! squares, and there is no castling, en passant or promotion. The game does
//! not end with checkmate; it ends the moment a king is captured.
//!
//! The crate is the rules engine only. Rendering a board, wiring up input and
//! showing turn or game-over notices is left to the embedding application,
//! which drives the engine through [`Position::make_move`] and reads back the
//! outcome.
//!
//! # Examples
//!
//! ```
//! use regicide::{Color, Move, MoveOutcome, Position};
//! use regicide::square::consts::*;
//!
//! let mut pos = Position::new();
//!
//! // White opens with a pawn push.
//! let outcome = pos.make_move(Move::new(SQ_E2, SQ_E3)).unwrap();
//! assert_eq!(MoveOutcome::Moved(Color::Black), outcome);
//!
//! // Moves can be parsed from coordinate notation as well.
//! let m = "e7e6".parse().unwrap();
//! pos.make_move(m).unwrap();
//! ```

pub mod color;
pub mod error;
pub mod moves;
pub mod piece;
pub mod piece_type;
pub mod position;
pub mod square;

pub use self::color::{Color, ColorIter};
pub use self::error::MoveError;
pub use self::moves::{Move, ParseMoveError};
pub use self::piece::Piece;
pub use self::piece_type::PieceType;
pub use self::position::{GameStatus, MoveOutcome, Position};
pub use self::square::{ParseSquareError, Square, SquareIter};
