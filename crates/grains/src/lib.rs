//! # grains: wheat on a chessboard
//!
//! One grain on the first square, two on the second, four on the third, and
//! so on, doubling for each of the 64 squares.
//!
//! - [`square()`]: grains on one square, rejecting indices outside `1..=64`
//! - [`total`]: grains on the whole board
//! - [`Square`]: a validated square index, for callers that check once and
//!   compute many times via [`grains_on`]
//!
//! Everything here is pure: no IO, no clocks, no shared state.
//!
//! ## Example
//!
//! ```
//! use grains::{GrainsError, square, total};
//!
//! assert_eq!(square(1), Ok(1));
//! assert_eq!(square(64), Ok(9_223_372_036_854_775_808));
//! assert_eq!(square(65), Err(GrainsError::OutOfRange { index: 65 }));
//! assert_eq!(total(), 18_446_744_073_709_551_615);
//! ```

pub mod board;
pub mod error;
pub mod square;


// Kani verification harnesses for bounded model checking
#[cfg(kani)]
mod kani_proofs;

pub use board::{grains_on, square, total};
pub use error::GrainsError;
pub use square::{SQUARES, Square};
