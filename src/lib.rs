//! Algebraic core for code-based (McEliece-style) public-key cryptography
//!
//! This crate provides the mathematical engine behind binary Goppa and general
//! alternant codes: arithmetic over GF(2^m), a dense polynomial engine built on
//! it, and the decoding algorithms that recover an error pattern from a
//! syndrome — Patterson's algorithm, the alternant key-equation solver, and two
//! interchangeable root finders (exhaustive search and Berlekamp trace).
//!
//! Protocol framing, key serialization and key-ring handling are deliberately
//! out of scope; callers feed this crate a syndrome polynomial together with
//! the private code parameters and get back a bit vector of error positions.
//!
//! # Security notes
//!
//! Secret-adjacent values (the Goppa polynomial, recovered error vectors)
//! implement [`zeroize::Zeroize`]. Decoding failure is an expected, recoverable
//! outcome reported through [`Error::DecodeFailure`], never a panic.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// GF(2^m) field context
pub mod field;
pub use field::Gf2m;

// Polynomial engine
pub mod poly;
pub use poly::{Poly, SqrtTable};

// Syndrome decoding
pub mod decode;
pub use decode::{
    alternant_error_locator, find_roots_brute, find_roots_trace, goppa_error_locator, ErrorVector,
};
