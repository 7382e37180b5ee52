//! Modulus classification and pseudo-Mersenne reduction.
//!
//! A modulus `m = 2^b - c` satisfies `2^b ≡ c (mod m)`, so any value
//! `v = hi·2^b + lo` is congruent to `hi·c + lo`. When `c` is small this fold
//! shrinks `v` by roughly `b - bits(c)` bits without a full division.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Shape of a modulus, selecting the reduction strategy used by
/// [`FixedBaseTable::pow`][crate::FixedBaseTable::pow].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModulusForm {
    /// Arbitrary modulus: every product is reduced with a full division.
    Standard,

    /// Modulus of the form `2^b - c` with small `c`.
    PseudoMersenne(PseudoMersenne),
}

impl ModulusForm {
    /// Classify `modulus`, treating it as pseudo-Mersenne when `c = 2^bits(m) - m`
    /// has fewer than `cutoff` bits.
    #[must_use]
    pub fn classify(modulus: &BigUint, cutoff: u64) -> Self {
        if modulus.is_zero() {
            return Self::Standard;
        }

        let bits = modulus.bits();
        let power = BigUint::one() << bits;
        let c = &power - modulus;

        if !c.is_zero() && c.bits() < cutoff {
            Self::PseudoMersenne(PseudoMersenne {
                c,
                bits,
                mask: power - 1u32,
            })
        } else {
            Self::Standard
        }
    }

    /// Is this the pseudo-Mersenne form?
    pub fn is_pseudo_mersenne(&self) -> bool {
        matches!(self, Self::PseudoMersenne(_))
    }
}

/// Reduction constants for a modulus `m = 2^b - c`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PseudoMersenne {
    /// `c = 2^b - m`
    c: BigUint,

    /// `b = bits(m)`
    bits: u64,

    /// `2^b - 1`
    mask: BigUint,
}

impl PseudoMersenne {
    /// The constant `c` in `m = 2^b - c`.
    pub fn c(&self) -> &BigUint {
        &self.c
    }

    /// The exponent `b` in `m = 2^b - c`.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The mask `2^b - 1` selecting the low `b` bits.
    pub fn mask(&self) -> &BigUint {
        &self.mask
    }

    /// Fold the bits of `value` above `2^b` back down: returns `hi·c + lo`,
    /// which is congruent to `value` but not necessarily below the modulus.
    #[must_use]
    pub fn fold(&self, value: BigUint) -> BigUint {
        let hi = &value >> self.bits;
        let lo = value & &self.mask;
        hi * &self.c + lo
    }
}
