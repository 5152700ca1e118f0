//! Precomputed square-root table for a fixed modulus polynomial
//!
//! Squaring is a linear map on the residue ring GF(2^m)[x]/(g) once the
//! coefficient-wise Frobenius is factored out: for q = Σ q_j x^j,
//! q² mod g = Σ q_j² · (x^(2j) mod g). [`SqrtTable`] builds the d×d matrix
//! whose column j is x^(2j) mod g and inverts it by Gaussian elimination over
//! GF(2^m). [`Poly::sqrt_mod`] then recovers q from p = q² mod g by applying
//! the inverse and taking coefficient-wise field square roots.
//!
//! The table is built once per Goppa polynomial and shared read-only across
//! decode calls.

use super::Poly;
use crate::error::{validate, Error, Result};
use crate::field::Gf2m;
use alloc::vec;
use alloc::vec::Vec;

/// Inverted squaring-map table for modular square roots
#[derive(Clone, Debug)]
pub struct SqrtTable {
    /// Column i of the inverted matrix, stored as a polynomial of degree < dim
    cols: Vec<Poly>,
}

impl SqrtTable {
    /// Build the table for a modulus of degree d.
    ///
    /// Errors if the modulus has degree < 1 or the squaring matrix is
    /// singular; the latter means the modulus is not squarefree and cannot
    /// support a square-root operator.
    pub fn new(modulus: &Poly, fld: &Gf2m) -> Result<Self> {
        let d = modulus.degree();
        validate::parameter(d > 0, "modulus", "square-root table needs positive degree")?;
        let d = d as usize;

        // Squaring matrix: column j holds the coefficients of (x^j)^2 mod g.
        let mut mat = vec![vec![0u16; 2 * d]; d];
        for j in 0..d {
            let mut col = Poly::monomial(j);
            col.square(fld);
            col.rem_assign(modulus, fld)?;
            for i in 0..d {
                mat[i][j] = col.get(i);
            }
        }
        // Augment with the identity.
        for (i, row) in mat.iter_mut().enumerate() {
            row[d + i] = 1;
        }

        // Gauss-Jordan over GF(2^m).
        for k in 0..d {
            let pivot = (k..d).find(|&r| mat[r][k] != 0).ok_or_else(|| {
                Error::param("modulus", "squaring matrix is singular, modulus is not squarefree")
            })?;
            mat.swap(k, pivot);

            let pi = fld.inv(mat[k][k]);
            for c in k..2 * d {
                mat[k][c] = fld.mult(mat[k][c], pi);
            }
            for r in 0..d {
                if r == k || mat[r][k] == 0 {
                    continue;
                }
                let f = mat[r][k];
                for c in k..2 * d {
                    let t = fld.mult(f, mat[k][c]);
                    mat[r][c] = fld.add(mat[r][c], t);
                }
            }
        }

        let mut cols = Vec::with_capacity(d);
        for j in 0..d {
            let mut col = Poly {
                coeffs: (0..d).map(|i| mat[i][d + j]).collect(),
            };
            col.strip();
            cols.push(col);
        }
        Ok(SqrtTable { cols })
    }

    /// Dimension of the table, equal to the modulus degree.
    pub fn dim(&self) -> usize {
        self.cols.len()
    }

    /// Column i of the inverted matrix.
    pub(crate) fn column(&self, i: usize) -> &Poly {
        &self.cols[i]
    }
}
