//! Table construction parameters.

use crate::{Error, Result};

/// Window width used by [`TableParams::default`].
pub const DEFAULT_WINDOW_WIDTH: u32 = 4;

/// Default bit-length cutoff below which `c` in `m = 2^b - c` counts as "small".
///
/// Tuned for 64-bit words: a `c` that fits in one word keeps the fold
/// multiplication a single-limb scalar multiply.
pub const DEFAULT_SPECIAL_FORM_CUTOFF: u64 = 64;

/// Parameters controlling the shape of a [`FixedBaseTable`][crate::FixedBaseTable].
///
/// Memory usage is exponential in the window width while exponentiation cost
/// is proportional to its inverse; a width of 4 is a reasonable default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TableParams {
    window_width: u32,
    special_form_cutoff: u64,
}

impl TableParams {
    /// Parameters with the given window width and the default special-form cutoff.
    pub const fn new(window_width: u32) -> Self {
        Self {
            window_width,
            special_form_cutoff: DEFAULT_SPECIAL_FORM_CUTOFF,
        }
    }

    /// Override the bit-length cutoff used to detect pseudo-Mersenne moduli.
    ///
    /// A modulus `2^b - c` takes the fast reduction path when `c` has fewer than
    /// `cutoff` bits. A cutoff of `0` disables the fast path entirely.
    #[must_use]
    pub const fn with_special_form_cutoff(mut self, cutoff: u64) -> Self {
        self.special_form_cutoff = cutoff;
        self
    }

    /// Width in bits of each exponent digit.
    pub const fn window_width(&self) -> u32 {
        self.window_width
    }

    /// Bit-length cutoff for the pseudo-Mersenne fast path.
    pub const fn special_form_cutoff(&self) -> u64 {
        self.special_form_cutoff
    }

    /// Number of table entries per limb, `2^w - 1`.
    pub(crate) fn window_mask(&self) -> Result<usize> {
        match self.window_width {
            0 => Err(Error::ZeroWindowWidth),
            w => 1usize
                .checked_shl(w)
                .map(|b| b - 1)
                .ok_or(Error::CapacityOverflow),
        }
    }
}

impl Default for TableParams {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH)
    }
}
