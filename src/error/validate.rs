//! Validation utilities for checked preconditions

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a modulus-like operand is nonzero
#[inline(always)]
pub fn nonzero(name: &'static str, is_zero: bool) -> Result<()> {
    if is_zero {
        return Err(Error::param(name, "must be a nonzero polynomial"));
    }
    Ok(())
}
