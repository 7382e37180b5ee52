//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::One;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// `2^b - c`
pub fn two_pow_minus(b: u32, c: u64) -> BigUint {
    (BigUint::one() << b) - c
}

/// Deterministic RNG so failures reproduce.
pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(37)
}

/// Random exponent of exactly `bits` bits (top bit set).
pub fn random_exponent_bits(rng: &mut ChaCha8Rng, bits: u64) -> BigUint {
    use rand_core::RngCore;

    let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
    rng.fill_bytes(&mut bytes);
    let mut n = BigUint::from_bytes_le(&bytes);
    for i in bits..(bytes.len() as u64 * 8) {
        n.set_bit(i, false);
    }
    n.set_bit(bits - 1, true);
    n
}
