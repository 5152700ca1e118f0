//! Dense polynomial engine over GF(2^m)
//!
//! [`Poly`] stores coefficients as a `Vec<u16>` with index = exponent. The
//! canonical form has no trailing zero coefficient; operations that can leave
//! high-order zeros call [`Poly::strip`] before returning, and callers that
//! construct coefficient vectors by hand should do the same before relying on
//! [`Poly::degree`].
//!
//! Every operation takes the field context explicitly; there is no global
//! field state. Operations either mutate the receiver in place or return a
//! fresh value, so no polynomial is ever shared across concurrent mutation.

use crate::error::{validate, Error, Result};
use crate::field::Gf2m;
use alloc::vec;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

mod sqrt;
pub use sqrt::SqrtTable;


/// Retry cap for the Monte-Carlo irreducible search. Irreducible polynomials
/// are dense enough that the local search converges in a handful of steps for
/// any practical field size; hitting the cap is surfaced as
/// [`Error::Exhausted`] rather than looping forever.
const IRREDUCIBLE_SEARCH_CAP: usize = 10_000;

/// A dense polynomial over GF(2^m), index = exponent
///
/// The derived `Ord` is a lexicographic order on the coefficient vector; it
/// carries no algebraic meaning and exists so polynomials can live in ordered
/// collections with a reproducible tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Zeroize)]
pub struct Poly {
    coeffs: Vec<u16>,
}

impl Poly {
    /// The constant polynomial 1.
    pub fn one() -> Self {
        Poly { coeffs: vec![1] }
    }

    /// The monomial x^k.
    pub fn monomial(k: usize) -> Self {
        let mut coeffs = vec![0; k + 1];
        coeffs[k] = 1;
        Poly { coeffs }
    }

    /// Build a polynomial from a coefficient slice (index = exponent).
    pub fn from_coeffs(coeffs: &[u16]) -> Self {
        Poly {
            coeffs: coeffs.to_vec(),
        }
    }

    /// Coefficient view, low to high degree.
    pub fn coeffs(&self) -> &[u16] {
        &self.coeffs
    }

    /// Coefficient of x^i, zero beyond the stored length.
    #[inline]
    pub fn get(&self, i: usize) -> u16 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Set the coefficient of x^i, growing storage as needed.
    pub fn set(&mut self, i: usize, v: u16) {
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, 0);
        }
        self.coeffs[i] = v;
    }

    /// Highest index with a nonzero coefficient, or -1 for the zero polynomial.
    pub fn degree(&self) -> isize {
        self.coeffs
            .iter()
            .rposition(|&c| c != 0)
            .map_or(-1, |i| i as isize)
    }

    /// Truncate storage to the canonical form with no trailing zeros.
    pub fn strip(&mut self) {
        let len = (self.degree() + 1) as usize;
        self.coeffs.truncate(len);
    }

    /// True iff every coefficient is zero. The scan touches every stored
    /// coefficient regardless of contents.
    pub fn is_zero(&self) -> bool {
        let mut acc = Choice::from(1u8);
        for c in &self.coeffs {
            acc &= c.ct_eq(&0);
        }
        acc.into()
    }

    /// In-place addition (coefficient-wise XOR), growing storage to the
    /// larger operand. Addition is its own inverse in characteristic 2.
    pub fn add(&mut self, other: &Poly, fld: &Gf2m) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), 0);
        }
        for (i, &c) in other.coeffs.iter().enumerate() {
            self.coeffs[i] = fld.add(self.coeffs[i], c);
        }
    }

    /// In-place `self += scalar * other`.
    pub fn add_scaled(&mut self, other: &Poly, scalar: u16, fld: &Gf2m) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), 0);
        }
        for (i, &c) in other.coeffs.iter().enumerate() {
            self.coeffs[i] = fld.add(self.coeffs[i], fld.mult(scalar, c));
        }
    }

    /// Multiply every coefficient by a scalar.
    pub fn scale(&mut self, scalar: u16, fld: &Gf2m) {
        for c in self.coeffs.iter_mut() {
            *c = fld.mult(*c, scalar);
        }
    }

    /// Schoolbook product; the result is a fresh value of degree
    /// deg(self) + deg(other).
    pub fn mul(&self, other: &Poly, fld: &Gf2m) -> Poly {
        let da = self.degree();
        let db = other.degree();
        if da < 0 || db < 0 {
            return Poly::default();
        }
        let (da, db) = (da as usize, db as usize);
        let mut out = vec![0u16; da + db + 1];
        for i in 0..=da {
            if self.coeffs[i] == 0 {
                continue;
            }
            for j in 0..=db {
                out[i + j] = fld.add(out[i + j], fld.mult(self.coeffs[i], other.coeffs[j]));
            }
        }
        Poly { coeffs: out }
    }

    /// In-place remainder of polynomial long division.
    ///
    /// Repeatedly eliminates the current leading term with the divisor scaled
    /// and shifted into position, until the degree drops below the divisor's.
    /// Errors on a zero divisor.
    pub fn rem_assign(&mut self, divisor: &Poly, fld: &Gf2m) -> Result<()> {
        let df = divisor.degree();
        validate::nonzero("divisor", df < 0)?;
        let df = df as usize;
        let hi = fld.inv(divisor.coeffs[df]);

        let mut d = self.degree();
        while d >= df as isize {
            let du = d as usize;
            if self.coeffs[du] != 0 {
                let t = fld.mult(self.coeffs[du], hi);
                for i in 0..=df {
                    let k = i + du - df;
                    self.coeffs[k] = fld.add(self.coeffs[k], fld.mult(t, divisor.coeffs[i]));
                }
            }
            d -= 1;
        }
        self.strip();
        Ok(())
    }

    /// Quotient and remainder of polynomial long division, with
    /// `deg(remainder) < deg(divisor)` and
    /// `quotient * divisor + remainder == self`. Errors on a zero divisor.
    pub fn divmod(&self, divisor: &Poly, fld: &Gf2m) -> Result<(Poly, Poly)> {
        let df = divisor.degree();
        validate::nonzero("divisor", df < 0)?;
        let df = df as usize;

        let mut r = self.clone();
        r.strip();
        let dr = r.degree();
        if dr < df as isize {
            return Ok((Poly::default(), r));
        }

        let hi = fld.inv(divisor.coeffs[df]);
        let mut q = Poly {
            coeffs: vec![0u16; dr as usize - df + 1],
        };
        let mut d = dr;
        while d >= df as isize {
            let du = d as usize;
            if r.coeffs[du] != 0 {
                let t = fld.mult(r.coeffs[du], hi);
                q.coeffs[du - df] = t;
                for i in 0..=df {
                    let k = i + du - df;
                    r.coeffs[k] = fld.add(r.coeffs[k], fld.mult(t, divisor.coeffs[i]));
                }
            }
            d -= 1;
        }
        r.strip();
        q.strip();
        Ok((q, r))
    }

    /// Greatest common divisor by the classical Euclidean algorithm.
    /// A zero operand yields the other operand.
    pub fn gcd(&self, other: &Poly, fld: &Gf2m) -> Result<Poly> {
        let mut a = self.clone();
        let mut b = other.clone();
        if a.degree() < 0 {
            b.strip();
            return Ok(b);
        }
        loop {
            if b.is_zero() {
                a.strip();
                return Ok(a);
            }
            a.rem_assign(&b, fld)?;
            if a.is_zero() {
                b.strip();
                return Ok(b);
            }
            b.rem_assign(&a, fld)?;
        }
    }

    /// Early-terminating extended Euclidean algorithm on `(self, modulus)`.
    ///
    /// Returns `(remainder, cofactor)` with
    /// `remainder ≡ cofactor * self (mod modulus)`, stopping at the first step
    /// where `deg(remainder) <= degree_bound`. With `degree_bound == 0` this
    /// runs to full termination and solves for a modular inverse; with a
    /// positive bound it solves the decoding key equation. Errors on a zero
    /// modulus.
    pub fn ext_euclid(
        &self,
        modulus: &Poly,
        fld: &Gf2m,
        degree_bound: isize,
    ) -> Result<(Poly, Poly)> {
        validate::nonzero("modulus", modulus.is_zero())?;

        let mut r0 = modulus.clone();
        let mut r1 = self.clone();
        r1.rem_assign(modulus, fld)?;

        let mut b0 = Poly::default();
        let mut b1 = Poly::one();

        while r1.degree() > degree_bound {
            let (q, r2) = r0.divmod(&r1, fld)?;
            let mut b2 = q.mul(&b1, fld);
            b2.add(&b0, fld);
            r0 = r1;
            r1 = r2;
            b0 = b1;
            b1 = b2;
        }
        Ok((r1, b1))
    }

    /// In-place Frobenius squaring: coefficient c at index i moves to index 2i
    /// as c^2, cross terms vanish in characteristic 2. Agrees exactly with
    /// `self.mul(self, fld)`.
    pub fn square(&mut self, fld: &Gf2m) {
        let d = self.degree();
        if d < 0 {
            self.coeffs.clear();
            return;
        }
        let d = d as usize;
        let mut out = vec![0u16; 2 * d + 1];
        for i in 0..=d {
            out[2 * i] = fld.square(self.coeffs[i]);
        }
        self.coeffs = out;
    }

    /// Multiply by x^k: prepend k zero coefficients.
    pub fn shift(&mut self, k: usize) {
        let mut out = vec![0u16; k + self.coeffs.len()];
        out[k..].copy_from_slice(&self.coeffs);
        self.coeffs = out;
    }

    /// Modular inverse via the extended Euclidean algorithm run to full
    /// termination. Errors if `gcd(self, modulus)` is not a unit.
    pub fn inv_mod(&self, modulus: &Poly, fld: &Gf2m) -> Result<Poly> {
        let (r, mut b) = self.ext_euclid(modulus, fld, 0)?;
        if r.degree() != 0 {
            return Err(Error::param(
                "polynomial",
                "not invertible modulo the given modulus",
            ));
        }
        b.scale(fld.inv(r.coeffs[0]), fld);
        b.strip();
        Ok(b)
    }

    /// Modular square root using a precomputed [`SqrtTable`] for `modulus`.
    ///
    /// Linearly combines the table columns by the input coefficients, takes
    /// the coefficient-wise field square root of the combination, and reduces
    /// mod `modulus`. Errors if the table dimension does not match the
    /// modulus degree.
    pub fn sqrt_mod(&self, table: &SqrtTable, modulus: &Poly, fld: &Gf2m) -> Result<Poly> {
        validate::parameter(
            modulus.degree() == table.dim() as isize,
            "table",
            "square-root table dimension must equal the modulus degree",
        )?;

        let mut p = self.clone();
        p.rem_assign(modulus, fld)?;

        let mut w = Poly::default();
        for (i, &c) in p.coeffs.iter().enumerate() {
            if c != 0 {
                w.add_scaled(table.column(i), c, fld);
            }
        }
        for c in w.coeffs.iter_mut() {
            *c = fld.sqrt(*c);
        }
        w.rem_assign(modulus, fld)?;
        Ok(w)
    }

    /// Scale so the leading coefficient is 1. No-op on the zero polynomial.
    pub fn make_monic(&mut self, fld: &Gf2m) {
        let d = self.degree();
        if d < 0 {
            return;
        }
        let li = fld.inv(self.coeffs[d as usize]);
        self.scale(li, fld);
    }

    /// Horner evaluation at a field element.
    pub fn eval(&self, x: u16, fld: &Gf2m) -> u16 {
        let mut acc = 0u16;
        for &c in self.coeffs.iter().rev() {
            acc = fld.add(fld.mult(acc, x), c);
        }
        acc
    }

    /// Ben-Or irreducibility test.
    ///
    /// Iterates `x^(2^i) mod self` by square-then-reduce for
    /// `i = 1 ..= deg/2`; any step where `gcd(self, x^(2^i) - x)` has positive
    /// degree proves a nontrivial factor. Requires positive degree.
    pub fn is_irreducible(&self, fld: &Gf2m) -> Result<bool> {
        let d = self.degree();
        validate::parameter(
            d > 0,
            "polynomial",
            "irreducibility test requires positive degree",
        )?;

        let mut xmodf = Poly::monomial(1);
        xmodf.rem_assign(self, fld)?;
        let mut xi = Poly::monomial(1);
        xi.rem_assign(self, fld)?;

        for _ in 1..=(d as usize) / 2 {
            xi.square(fld);
            xi.rem_assign(self, fld)?;

            let mut t = xi.clone();
            t.add(&xmodf, fld);
            let g = t.gcd(self, fld)?;
            if g.degree() != 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Sample a random monic irreducible polynomial of the given degree by
    /// Monte-Carlo local search: start from a random monic candidate with a
    /// nonzero constant term, then perturb one randomly chosen coefficient per
    /// failed test until the test passes or the retry cap is hit.
    pub fn random_irreducible<R: CryptoRng + RngCore>(
        degree: usize,
        fld: &Gf2m,
        rng: &mut R,
    ) -> Result<Poly> {
        validate::parameter(degree >= 1, "degree", "irreducible degree must be positive")?;
        let n = fld.n() as u32;

        let mut p = Poly {
            coeffs: vec![0u16; degree + 1],
        };
        p.coeffs[degree] = 1;
        // nonzero constant term keeps x from dividing the candidate
        p.coeffs[0] = 1 + random_below(rng, n - 1) as u16;
        for i in 1..degree {
            p.coeffs[i] = random_below(rng, n) as u16;
        }

        for _ in 0..IRREDUCIBLE_SEARCH_CAP {
            if p.is_irreducible(fld)? {
                return Ok(p);
            }
            let pos = random_below(rng, degree as u32) as usize;
            p.coeffs[pos] = if pos == 0 {
                1 + random_below(rng, n - 1) as u16
            } else {
                random_below(rng, n) as u16
            };
        }
        Err(Error::Exhausted {
            operation: "random_irreducible",
        })
    }
}

/// Uniform sample in `[0, bound)` by rejection over `next_u32`.
fn random_below<R: RngCore>(rng: &mut R, bound: u32) -> u32 {
    debug_assert!(bound > 0);
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let r = rng.next_u32();
        if r >= threshold {
            return r % bound;
        }
    }
}
