//! Table-driven modular exponentiation.

use super::FixedBaseTable;
use crate::{Error, ModulusForm, PseudoMersenne, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

impl FixedBaseTable {
    /// Compute `base^exponent mod m`, returning a value in `[0, m)`.
    ///
    /// Exponents longer than [`FixedBaseTable::max_exponent_bits`] have no table
    /// entries for their high digits and are computed with an ordinary
    /// square-and-multiply exponentiation instead.
    #[must_use]
    pub fn pow(&self, exponent: &BigUint) -> BigUint {
        if exponent.bits() > self.max_exponent_bits() {
            return self.base().modpow(exponent, &self.modulus);
        }

        match &self.form {
            ModulusForm::Standard => self.pow_standard(exponent),
            ModulusForm::PseudoMersenne(form) => self.pow_pseudo_mersenne(exponent, form),
        }
    }

    /// Compute `base^exponent mod m` for a signed exponent.
    ///
    /// Negative exponents are rejected with [`Error::NegativeExponent`].
    pub fn pow_signed(&self, exponent: &BigInt) -> Result<BigUint> {
        match exponent.sign() {
            Sign::Minus => Err(Error::NegativeExponent),
            Sign::NoSign | Sign::Plus => Ok(self.pow(exponent.magnitude())),
        }
    }

    /// Full division after every multiplication.
    fn pow_standard(&self, exponent: &BigUint) -> BigUint {
        let mut acc = BigUint::one() % &self.modulus;

        for (limb, digit) in self.digits(exponent).enumerate() {
            if digit == 0 {
                continue;
            }

            acc *= self.entry_unchecked(limb, digit);
            acc %= &self.modulus;
        }

        acc
    }

    /// Two shift-and-add folds after every multiplication, then a single
    /// division at the end.
    ///
    /// `acc` stays congruent to the running product but is not kept below `m`
    /// between digits. When `bits(c)` is well below `b/2`, each double fold
    /// leaves it at most one bit wider than `2^b`, so products stay near `2b` bits.
    fn pow_pseudo_mersenne(&self, exponent: &BigUint, form: &PseudoMersenne) -> BigUint {
        let mut acc = BigUint::one();

        for (limb, digit) in self.digits(exponent).enumerate() {
            if digit == 0 {
                continue;
            }

            acc *= self.entry_unchecked(limb, digit);
            acc = form.fold(acc);
            acc = form.fold(acc);
        }

        acc % &self.modulus
    }

    fn entry_unchecked(&self, limb: usize, digit: usize) -> &BigUint {
        &self.entries[self.index(limb, digit)]
    }
}
