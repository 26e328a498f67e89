//! Grain counts per square and across the whole board.
//!
//! Square `n` holds `2^(n-1)` grains. The board total is `2^64 - 1`, which is
//! exactly `u64::MAX`, so every count and the running sum fit in a `u64`.

use crate::error::GrainsError;
use crate::square::Square;

/// Grains on an already validated square.
pub fn grains_on(square: Square) -> u64 {
    1u64 << (square.index() - 1)
}

/// Grains on the square at `index`.
///
/// Fails with [`GrainsError::OutOfRange`] unless `1 <= index <= 64`.
pub fn square(index: i64) -> Result<u64, GrainsError> {
    Square::new(index).map(grains_on)
}

/// Grains on the whole board.
pub fn total() -> u64 {
    let total: u64 = Square::all().map(grains_on).sum();

    // Postcondition: every bit of the u64 is set
    debug_assert_eq!(total, u64::MAX);

    total
}
