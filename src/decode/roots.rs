//! Root finders: turn an error-locator polynomial into an error vector
//!
//! Both strategies produce identical vectors for any locator that is a
//! product of distinct linear factors over the field. A locator that does not
//! split that way is the signature of an uncorrectable word and yields
//! [`Error::DecodeFailure`] with no partial output.

use super::ErrorVector;
use crate::error::{Error, Result};
use crate::field::Gf2m;
use crate::poly::Poly;
use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

/// Exhaustive root search over all field elements.
///
/// Evaluates the locator at every element; each root marks a bit and divides
/// its linear factor out of the working polynomial, so repeated roots cannot
/// be double-counted. A nonzero division remainder, or a leftover factor of
/// positive degree after the scan, means the locator does not split into
/// distinct linear factors and the decode has failed.
pub fn find_roots_brute(locator: &Poly, fld: &Gf2m) -> Result<ErrorVector> {
    let mut ev = ErrorVector::new(fld.n());
    let mut a = locator.clone();
    a.strip();

    for i in 0..fld.n() {
        let x = i as u16;
        if a.eval(x, fld) == 0 {
            ev.set(i);

            let lin = Poly::from_coeffs(&[x, 1]);
            let (q, r) = a.divmod(&lin, fld)?;
            if r.degree() >= 0 {
                return Err(Error::DecodeFailure);
            }
            a = q;
        }
    }

    if a.degree() > 0 {
        return Err(Error::DecodeFailure);
    }
    Ok(ev)
}

/// Berlekamp trace root finder.
///
/// Splits the locator recursively along trace polynomials, expressed as an
/// explicit worklist of (level, factor) pairs ordered lowest level first so
/// the call stack stays flat for large extension degrees. The trace basis
/// `aux[i] = aux[i-1]^2 mod sigma` is precomputed; higher-level traces are
/// filled in lazily as linear combinations of the basis. A factor of degree
/// at least 2 surviving to level m cannot be split further, which marks the
/// whole decode as failed.
pub fn find_roots_trace(locator: &Poly, fld: &Gf2m) -> Result<ErrorVector> {
    let m = fld.m() as usize;
    let mut ev = ErrorVector::new(fld.n());

    let mut sigma = locator.clone();
    sigma.strip();
    if sigma.degree() <= 0 {
        return Ok(ev);
    }

    // Trace basis over the fixed sigma: aux[i] = x^(2^i) mod sigma.
    let mut aux: Vec<Poly> = Vec::with_capacity(m);
    aux.push(Poly::monomial(1));
    let mut trace0 = Poly::monomial(1);
    for i in 1..m {
        let mut t = aux[i - 1].clone();
        t.square(fld);
        t.rem_assign(&sigma, fld)?;
        trace0.add(&t, fld);
        aux.push(t);
    }
    let mut trace: Vec<Option<Poly>> = vec![None; m];
    trace[0] = Some(trace0);

    let mut work: BTreeSet<(usize, Poly)> = BTreeSet::new();
    work.insert((0, sigma));

    let mut failed = false;

    while let Some((level, cur)) = work.pop_first() {
        let deg = cur.degree();
        if deg <= 0 {
            continue;
        }
        if deg == 1 {
            let root = fld.mult(cur.get(0), fld.inv(cur.get(1)));
            ev.set(root as usize);
            continue;
        }
        if level >= m {
            failed = true;
            continue;
        }

        let tr = match &trace[level] {
            Some(t) => t.clone(),
            None => {
                // trace weighted by exp(level), squaring the weight per term
                let mut t = Poly::default();
                let mut wgt = fld.exp(level);
                for a in &aux {
                    t.add_scaled(a, wgt, fld);
                    wgt = fld.mult(wgt, wgt);
                }
                trace[level] = Some(t.clone());
                t
            }
        };

        let t = cur.gcd(&tr, fld)?;
        let (q, _) = cur.divmod(&t, fld)?;
        work.insert((level + 1, t));
        work.insert((level + 1, q));
    }

    if failed {
        return Err(Error::DecodeFailure);
    }
    Ok(ev)
}
