//! Error type.

use core::fmt;

/// Result type with the `fixed-base-pow` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failure conditions for table construction and exponentiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus was zero.
    ZeroModulus,
    /// The window width was zero.
    ZeroWindowWidth,
    /// A negative exponent was passed to a signed entry point.
    NegativeExponent,
    /// The table for the requested window width does not fit in memory.
    CapacityOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "modulus must be nonzero"),
            Self::ZeroWindowWidth => write!(f, "window width must be nonzero"),
            Self::NegativeExponent => write!(f, "exponent must be non-negative"),
            Self::CapacityOverflow => write!(f, "precomputed table exceeds addressable memory"),
        }
    }
}

impl core::error::Error for Error {}

impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Self::CapacityOverflow
    }
}
