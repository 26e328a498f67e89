//! Kani verification harnesses for grain calculations
//!
//! # Running Proofs
//!
//! ```bash
//! cargo kani --package grains
//! ```

#[cfg(kani)]
mod verification {
    use crate::board::{grains_on, square};
    use crate::error::GrainsError;
    use crate::square::Square;

    /// **Proof 1: indices off the board are rejected**
    ///
    /// **Property:** `square` fails for every index outside `1..=64`
    #[kani::proof]
    fn verify_square_rejects_off_board() {
        let index: i64 = kani::any();
        kani::assume(!(1..=64).contains(&index));

        assert_eq!(square(index), Err(GrainsError::OutOfRange { index }));
    }

    /// **Proof 2: every square holds a power of two**
    ///
    /// **Property:** for index in `1..=64`, grains equal `2^(index-1)`
    #[kani::proof]
    fn verify_grains_power_of_two() {
        let index: i64 = kani::any();
        kani::assume((1..=64).contains(&index));

        let sq = Square::new(index).unwrap();
        let grains = grains_on(sq);

        assert!(grains.is_power_of_two());
        assert_eq!(grains.trailing_zeros(), (index - 1) as u32);
    }
}
