//! Precomputed fixed-base exponentiation tables.

mod pow;
#[cfg(feature = "rand")]
mod rand;

use crate::{Digits, Error, ModulusForm, Result, TableParams};
use alloc::vec::Vec;
use core::mem;
use num_bigint::BigUint;
use num_traits::Zero;

/// Precomputed powers of a fixed base modulo a fixed modulus.
///
/// The exponent is split into `n = ceil(bits(m) / w)` digits of `w` bits each
/// (base `B = 2^w`). For every digit position ("limb") `i` and every nonzero
/// digit value `ws`, the table stores `base^(ws·B^i) mod m`, so exponentiation
/// reduces to one table lookup and one multiplication per nonzero digit.
///
/// Tables are immutable once built and may be shared freely between threads.
///
/// ```
/// use fixed_base_pow::FixedBaseTable;
/// use num_bigint::BigUint;
///
/// # fn main() -> Result<(), fixed_base_pow::Error> {
/// let modulus = (BigUint::from(1u8) << 1307u32) - 4425u32;
/// let base = BigUint::from(2u8);
/// let table = FixedBaseTable::new(&base, &modulus, 4)?;
///
/// let exponent = BigUint::from(0xfeed_f00d_u64);
/// assert_eq!(table.pow(&exponent), base.modpow(&exponent, &modulus));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedBaseTable {
    /// Modulus all entries are reduced by.
    modulus: BigUint,

    /// Digit width `w` in bits.
    window_width: u32,

    /// Entries per limb, `2^w - 1`.
    window_mask: usize,

    /// Number of digit positions covered by the table.
    limb_count: usize,

    /// Entry `(i, ws)` lives at `i * window_mask + ws - 1`.
    entries: Vec<BigUint>,

    /// Reduction strategy selected at construction.
    form: ModulusForm,
}

impl FixedBaseTable {
    /// Build a table for `base` and `modulus` using digits of `window_width` bits.
    pub fn new(base: &BigUint, modulus: &BigUint, window_width: u32) -> Result<Self> {
        Self::with_params(base, modulus, TableParams::new(window_width))
    }

    /// Build a table for `base` and `modulus` with explicit [`TableParams`].
    pub fn with_params(base: &BigUint, modulus: &BigUint, params: TableParams) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let window_width = params.window_width();
        let window_mask = params.window_mask()?;
        let form = ModulusForm::classify(modulus, params.special_form_cutoff());

        let limb_count = usize::try_from(modulus.bits().div_ceil(u64::from(window_width)))
            .map_err(|_| Error::CapacityOverflow)?;
        let len = limb_count
            .checked_mul(window_mask)
            .ok_or(Error::CapacityOverflow)?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(len)?;

        // `power` walks base^1, base^2, ... within a limb. After the last entry of
        // limb `i` one more step leaves it at base^(B^(i+1)), the next block base.
        let mut power = base % modulus;
        let mut block_base = power.clone();

        for _ in 0..limb_count {
            for _ in 0..window_mask {
                let next = &power * &block_base % modulus;
                entries.push(mem::replace(&mut power, next));
            }
            block_base.clone_from(&power);
        }

        debug_assert_eq!(entries.len(), len);

        Ok(Self {
            modulus: modulus.clone(),
            window_width,
            window_mask,
            limb_count,
            entries,
            form,
        })
    }

    /// The modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The base, reduced modulo [`Self::modulus`].
    pub fn base(&self) -> &BigUint {
        &self.entries[0]
    }

    /// Width in bits of each exponent digit.
    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    /// Largest digit value, `2^w - 1`; also the number of entries per limb.
    pub fn window_mask(&self) -> usize {
        self.window_mask
    }

    /// Number of digit positions the table covers.
    pub fn limb_count(&self) -> usize {
        self.limb_count
    }

    /// Longest exponent, in bits, served directly from the table.
    #[must_use]
    pub fn max_exponent_bits(&self) -> u64 {
        self.limb_count as u64 * u64::from(self.window_width)
    }

    /// Reduction strategy detected for the modulus.
    pub fn form(&self) -> &ModulusForm {
        &self.form
    }

    /// Does exponentiation use the pseudo-Mersenne fast reduction?
    pub fn is_pseudo_mersenne(&self) -> bool {
        self.form.is_pseudo_mersenne()
    }

    /// Get the entry `base^(digit·B^limb) mod m`.
    ///
    /// Returns `None` for a zero digit or an out-of-range position.
    pub fn entry(&self, limb: usize, digit: usize) -> Option<&BigUint> {
        if limb >= self.limb_count || digit == 0 || digit > self.window_mask {
            return None;
        }
        self.entries.get(self.index(limb, digit))
    }

    /// Decompose `exponent` into the digits this table is indexed by.
    #[must_use]
    pub fn digits(&self, exponent: &BigUint) -> Digits {
        Digits::new(exponent, self.window_width, self.limb_count)
    }

    fn index(&self, limb: usize, digit: usize) -> usize {
        debug_assert!(digit != 0 && digit <= self.window_mask);
        limb * self.window_mask + digit - 1
    }
}
