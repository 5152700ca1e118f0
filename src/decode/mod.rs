//! Syndrome decoding for binary Goppa and general alternant codes
//!
//! The decode pipeline is: an external caller derives a syndrome polynomial
//! from the received word and the private key, an error-locator solver turns
//! the syndrome into an error-locator polynomial, and a root finder turns the
//! locator's root set into a bit vector of error positions. Two solver
//! variants (Patterson for binary Goppa codes, the key-equation solver for
//! alternant/BCH codes) and two root finders (exhaustive and Berlekamp trace)
//! are provided; any solver/finder pairing is valid.
//!
//! Everything here is a pure function of its arguments. The field context,
//! Goppa polynomial and square-root table are shared read-only, so concurrent
//! decode calls need no coordination.

use crate::error::{validate, Error, Result};
use crate::field::Gf2m;
use crate::poly::{Poly, SqrtTable};
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

mod roots;
pub use roots::{find_roots_brute, find_roots_trace};

#[cfg(test)]
mod tests;

/// A length-n error-position vector, one flag per field element
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct ErrorVector {
    bits: Vec<bool>,
}

impl ErrorVector {
    /// An all-clear vector of the given length.
    pub fn new(n: usize) -> Self {
        ErrorVector {
            bits: vec![false; n],
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True iff the vector has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Flag position i as an error.
    pub fn set(&mut self, i: usize) {
        self.bits[i] = true;
    }

    /// Whether position i is flagged.
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Hamming weight.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of all flagged positions, ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| if b { Some(i) } else { None })
            .collect()
    }
}

/// Patterson's algorithm: error locator of a binary Goppa code.
///
/// A zero syndrome short-circuits to the constant locator `[1]` (no errors).
/// Otherwise computes `v = syndrome^-1 mod goppa`, adds x, takes the modular
/// square root `w`, runs the bounded extended Euclid
/// `(a, b) = ext_euclid(w, goppa, deg(goppa)/2)` and returns the monic form of
/// `a^2 + x*b^2`.
///
/// No validity checking happens beyond the zero-syndrome shortcut: a syndrome
/// carrying more errors than the code corrects produces a locator whose root
/// set is wrong, which the root finders detect.
pub fn goppa_error_locator(
    syndrome: &Poly,
    fld: &Gf2m,
    goppa: &Poly,
    table: &SqrtTable,
) -> Result<Poly> {
    validate::nonzero("goppa", goppa.is_zero())?;
    if syndrome.is_zero() {
        return Ok(Poly::one());
    }

    let mut v = syndrome.inv_mod(goppa, fld)?;
    v.set(1, fld.add(1, v.get(1)));
    let w = v.sqrt_mod(table, goppa, fld)?;

    let (mut a, mut b) = w.ext_euclid(goppa, fld, goppa.degree() / 2)?;

    a.square(fld);
    b.square(fld);
    b.shift(1);
    a.add(&b, fld);

    a.make_monic(fld);
    a.strip();
    Ok(a)
}

/// Alternant/BCH key-equation solver.
///
/// A zero syndrome short-circuits to the constant locator `[1]`. Otherwise
/// runs the bounded extended Euclid of the syndrome against `x^(2t)` with
/// degree bound `t - 1` and returns the cofactor normalized to constant term
/// 1. The error-evaluator remainder is discarded. The locator's roots are the
/// reciprocals of the error locations.
pub fn alternant_error_locator(syndrome: &Poly, fld: &Gf2m, t: usize) -> Result<Poly> {
    validate::parameter(t > 0, "t", "target error count must be positive")?;
    if syndrome.is_zero() {
        return Ok(Poly::one());
    }

    let x2t = Poly::monomial(2 * t);
    let (_omega, mut sigma) = syndrome.ext_euclid(&x2t, fld, t as isize - 1)?;

    let c0 = sigma.get(0);
    if c0 == 0 {
        return Err(Error::param(
            "syndrome",
            "degenerate key equation, locator has zero constant term",
        ));
    }
    sigma.scale(fld.inv(c0), fld);
    sigma.strip();
    Ok(sigma)
}
