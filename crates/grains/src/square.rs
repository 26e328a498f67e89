//! Validated chessboard squares.
//!
//! A [`Square`] can only be built through the bound check in
//! [`Square::new`], so code holding one never has to re-validate it.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GrainsError;

/// Number of squares on the board.
pub const SQUARES: u8 = 64;

/// A 1-based square index in `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct Square(u8);

impl Square {
    pub const FIRST: Square = Square(1);
    pub const LAST: Square = Square(SQUARES);

    /// Validates `index` against the board bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use grains::{GrainsError, Square};
    /// assert_eq!(Square::new(64).map(Square::index), Ok(64));
    /// assert_eq!(Square::new(0), Err(GrainsError::OutOfRange { index: 0 }));
    /// ```
    pub fn new(index: i64) -> Result<Self, GrainsError> {
        match u8::try_from(index) {
            Ok(raw) if (1..=SQUARES).contains(&raw) => Ok(Self(raw)),
            _ => {
                tracing::debug!(index, "square index out of range");
                Err(GrainsError::OutOfRange { index })
            }
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Every square on the board, first to last.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (1..=SQUARES).map(Square)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Square {
    type Error = GrainsError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl From<Square> for i64 {
    fn from(square: Square) -> Self {
        i64::from(square.0)
    }
}
