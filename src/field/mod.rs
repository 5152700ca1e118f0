//! GF(2^m) field context
//!
//! Arithmetic in the binary extension field GF(2^m) backed by discrete-log and
//! exponential tables over a fixed primitive polynomial per extension degree.
//! Elements are integers in `[0, 2^m)` in polynomial basis; addition is XOR.
//!
//! The context is immutable after construction, so one `Gf2m` may be shared by
//! reference across concurrent decode calls.

use crate::error::{validate, Result};
use alloc::vec;
use alloc::vec::Vec;


/// Minimal-weight primitive polynomials over GF(2), indexed by m = 2..=16.
/// The leading bit is included, e.g. 0x13 = x^4 + x + 1.
const PRIMITIVE_POLY: [u32; 15] = [
    0x7, 0xB, 0x13, 0x25, 0x43, 0x89, 0x11D, 0x211, 0x409, 0x805, 0x1053, 0x201B, 0x4443, 0x8003,
    0x1100B,
];

/// A GF(2^m) field context with log/exp lookup tables
#[derive(Debug, Clone)]
pub struct Gf2m {
    m: u32,
    n: usize,
    ord: usize,
    exp_table: Vec<u16>,
    log_table: Vec<u16>,
}

impl Gf2m {
    /// Build the field context for GF(2^m), 2 <= m <= 16.
    ///
    /// Fills the exponential and discrete-log tables by iterating the
    /// generator `x` modulo the fixed primitive polynomial for `m`.
    pub fn new(m: u32) -> Result<Self> {
        validate::parameter((2..=16).contains(&m), "m", "extension degree must be in 2..=16")?;

        let n = 1usize << m;
        let ord = n - 1;
        let poly = PRIMITIVE_POLY[(m - 2) as usize];

        let mut exp_table = vec![0u16; ord];
        let mut log_table = vec![0u16; n];

        let mut x = 1u32;
        for i in 0..ord {
            exp_table[i] = x as u16;
            log_table[x as usize] = i as u16;
            x <<= 1;
            if x & (n as u32) != 0 {
                x ^= poly;
            }
        }
        debug_assert_eq!(x, 1, "generator must have order 2^m - 1");

        Ok(Gf2m {
            m,
            n,
            ord,
            exp_table,
            log_table,
        })
    }

    /// Number of field elements, 2^m.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Extension degree m.
    #[inline]
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Field addition (XOR, self-inverse).
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Field multiplication via log/exp tables.
    #[inline]
    pub fn mult(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let i = self.log_table[a as usize] as usize + self.log_table[b as usize] as usize;
        self.exp_table[i % self.ord]
    }

    /// Multiplicative inverse. `inv(0)` is defined as 0; callers that care
    /// must check for zero first.
    #[inline]
    pub fn inv(&self, a: u16) -> u16 {
        if a == 0 {
            return 0;
        }
        let i = self.ord - self.log_table[a as usize] as usize;
        self.exp_table[i % self.ord]
    }

    /// Discrete exponential: generator^i, with i taken modulo 2^m - 1.
    #[inline]
    pub fn exp(&self, i: usize) -> u16 {
        self.exp_table[i % self.ord]
    }

    /// Discrete logarithm of a nonzero element.
    #[inline]
    pub fn log(&self, a: u16) -> u16 {
        self.log_table[a as usize]
    }

    /// Frobenius square, a^2.
    #[inline]
    pub fn square(&self, a: u16) -> u16 {
        if a == 0 {
            return 0;
        }
        let i = 2 * self.log_table[a as usize] as usize;
        self.exp_table[i % self.ord]
    }

    /// Field square root, a^(2^(m-1)). Total: every element of a binary field
    /// has exactly one square root, and sqrt(0) = 0.
    #[inline]
    pub fn sqrt(&self, a: u16) -> u16 {
        if a == 0 {
            return 0;
        }
        let i = (self.log_table[a as usize] as u64) << (self.m - 1);
        self.exp_table[(i % self.ord as u64) as usize]
    }
}
