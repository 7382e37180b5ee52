//! Fixed-base modular exponentiation using precomputed tables.
//!
//! # About
//! Many protocols raise the same base to many different exponents modulo the
//! same modulus, e.g. `g^x mod p` in Diffie-Hellman. This crate spends a single
//! precomputation per `(g, p)` pair to make every subsequent exponentiation a
//! sequence of table lookups and multiplications, with no squarings.
//!
//! The exponent is written in base `B = 2^w` for a caller-chosen window width
//! `w`, and the table holds `g^(d·B^i) mod p` for every digit value `d` at every
//! digit position `i` (the fixed-base comb, or BGMW, method).
//!
//! Moduli of the pseudo-Mersenne form `p = 2^b - c` with small `c` are detected
//! when the table is built and take a faster reduction path which replaces a
//! division per multiplication with shifts, masks and a small multiplication.
//!
//! # Usage
//! ```
//! use fixed_base_pow::{FixedBaseTable, TableParams};
//! use num_bigint::BigUint;
//!
//! # fn main() -> Result<(), fixed_base_pow::Error> {
//! let modulus = (BigUint::from(1u8) << 468u32) - 190265u32;
//! let base = BigUint::from(2u8);
//!
//! let table = FixedBaseTable::with_params(&base, &modulus, TableParams::new(6))?;
//! assert!(table.is_pseudo_mersenne());
//!
//! for exponent in [3u32, 65537, 1 << 30] {
//!     let exponent = BigUint::from(exponent);
//!     assert_eq!(table.pow(&exponent), base.modpow(&exponent, &modulus));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Side channels
//! Exponentiation time depends on the number of nonzero exponent digits and
//! on the big integer arithmetic in [`num_bigint`]. Nothing in this crate is
//! constant-time; do not use it with secret exponents where timing matters.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod digits;
mod error;
mod params;
mod reduction;
mod table;

pub use crate::{
    digits::Digits,
    error::{Error, Result},
    params::{DEFAULT_SPECIAL_FORM_CUTOFF, DEFAULT_WINDOW_WIDTH, TableParams},
    reduction::{ModulusForm, PseudoMersenne},
    table::FixedBaseTable,
};
pub use num_bigint;

#[cfg(feature = "rand")]
pub use rand_core;
