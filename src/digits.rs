//! Fixed-width digit decomposition of exponents.

use alloc::vec::Vec;
use num_bigint::BigUint;

/// Iterator over the `w`-bit digits of an exponent, least significant first.
///
/// Yields at most `limb_count` digits and stops early at the exponent's most
/// significant set bit, so trailing zero digits are never produced.
#[derive(Clone, Debug)]
pub struct Digits {
    words: Vec<u64>,
    width: u32,
    mask: u64,
    bit: u64,
    end: u64,
}

impl Digits {
    /// Decompose `exponent` into base-`2^width` digits.
    ///
    /// `width` must be in `1..64`.
    pub(crate) fn new(exponent: &BigUint, width: u32, limb_count: usize) -> Self {
        debug_assert!((1..u64::BITS).contains(&width));

        let width_bits = u64::from(width);
        let end = exponent
            .bits()
            .min((limb_count as u64).saturating_mul(width_bits));

        Self {
            words: exponent.iter_u64_digits().collect(),
            width,
            mask: (1 << width) - 1,
            bit: 0,
            end,
        }
    }
}

impl Iterator for Digits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bit >= self.end {
            return None;
        }

        let word = (self.bit / 64) as usize;
        let offset = (self.bit % 64) as u32;
        let mut digit = self.words[word] >> offset;

        // Digit straddles two words
        if offset + self.width > u64::BITS {
            if let Some(next) = self.words.get(word + 1) {
                digit |= next << (u64::BITS - offset);
            }
        }

        self.bit += u64::from(self.width);
        Some((digit & self.mask) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.bit).div_ceil(u64::from(self.width)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Digits {}

#[cfg(test)]
mod tests {
    use super::Digits;
    use alloc::vec::Vec;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    fn digits(exponent: &BigUint, width: u32, limb_count: usize) -> Vec<usize> {
        Digits::new(exponent, width, limb_count).collect()
    }

    #[test]
    fn zero_has_no_digits() {
        assert!(digits(&BigUint::zero(), 4, 10).is_empty());
    }

    #[test]
    fn nibbles() {
        let exponent = BigUint::from(0xa0b1u32);
        assert_eq!(digits(&exponent, 4, 10), [1, 0xb, 0, 0xa]);
    }

    #[test]
    fn binary() {
        let exponent = BigUint::from(0b1011u32);
        assert_eq!(digits(&exponent, 1, 10), [1, 1, 0, 1]);
    }

    #[test]
    fn partial_top_digit() {
        // 9 bits split into 4-bit digits
        let exponent = BigUint::from(0x1ffu32);
        assert_eq!(digits(&exponent, 4, 10), [0xf, 0xf, 0x1]);
    }

    #[test]
    fn straddles_word_boundary() {
        // Bits 60..67 set: a 5-bit digit starting at bit 60 spans both words
        let exponent = BigUint::from(0xffu32) << 60u32;
        let d = digits(&exponent, 5, 100);
        assert_eq!(d.len(), 14);
        assert_eq!(&d[..12], [0; 12]);
        assert_eq!(d[12], 0b11111);
        assert_eq!(d[13], 0b111);
    }

    #[test]
    fn capped_by_limb_count() {
        let exponent = (BigUint::one() << 40u32) - 1u32;
        assert_eq!(digits(&exponent, 8, 3), [0xff; 3]);
    }

    #[test]
    fn reassembles_exponent() {
        let exponent = BigUint::parse_bytes(b"123456789abcdef0fedcba9876543210deadbeef", 16)
            .expect("valid hex");

        for width in 1..=8 {
            let mut reassembled = BigUint::zero();
            for (i, digit) in Digits::new(&exponent, width, usize::MAX).enumerate() {
                reassembled += BigUint::from(digit) << (i as u32 * width);
            }
            assert_eq!(reassembled, exponent, "width {width}");
        }
    }

    #[test]
    fn exact_size() {
        let exponent = BigUint::from(0x1ffu32);
        let iter = Digits::new(&exponent, 4, 10);
        assert_eq!(iter.len(), 3);
    }
}
