//! Random exponent generation.

use super::FixedBaseTable;
use alloc::vec;
use num_bigint::BigUint;
use rand_core::{RngCore, TryRngCore};

impl FixedBaseTable {
    /// Generate a uniformly random exponent in `[0, m)`.
    #[must_use]
    pub fn random_exponent<R: RngCore + ?Sized>(&self, rng: &mut R) -> BigUint {
        let Ok(exponent) = self.try_random_exponent(rng);
        exponent
    }

    /// Generate a uniformly random exponent in `[0, m)`, propagating RNG failures.
    ///
    /// Candidates of `bits(m)` random bits are drawn until one falls below the
    /// modulus, which takes fewer than two draws on average.
    pub fn try_random_exponent<R: TryRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BigUint, R::Error> {
        let n_bits = self.modulus.bits();
        let partial_byte = (n_bits % 8) as u32;
        let mask = u8::MAX >> ((8 - partial_byte) % 8);
        let mut bytes = vec![0u8; n_bits.div_ceil(8) as usize];

        loop {
            rng.try_fill_bytes(&mut bytes)?;
            if let Some(hi) = bytes.last_mut() {
                *hi &= mask;
            }

            let candidate = BigUint::from_bytes_le(&bytes);
            if candidate < self.modulus {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedBaseTable;
    use num_bigint::BigUint;
    use num_traits::One;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn below_modulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(37);
        let modulus = (BigUint::one() << 468u32) - 190265u32;
        let table = FixedBaseTable::new(&BigUint::from(2u8), &modulus, 4).expect("valid table");

        for _ in 0..100 {
            assert!(table.random_exponent(&mut rng) < modulus);
        }
    }

    #[test]
    fn small_modulus_covers_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let modulus = BigUint::from(5u8);
        let table = FixedBaseTable::new(&BigUint::from(2u8), &modulus, 1).expect("valid table");

        let mut seen = [false; 5];
        for _ in 0..200 {
            let exponent = table.random_exponent(&mut rng);
            let digits = exponent.to_u32_digits();
            seen[digits.first().copied().unwrap_or(0) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn deterministic_for_seed() {
        let modulus = (BigUint::one() << 1307u32) - 4425u32;
        let table = FixedBaseTable::new(&BigUint::from(2u8), &modulus, 4).expect("valid table");

        let a = table.random_exponent(&mut ChaCha8Rng::seed_from_u64(7));
        let b = table.random_exponent(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
