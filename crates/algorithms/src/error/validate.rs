//! Validation helpers used at every decoding and checked entry point

use subtle::Choice;

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that coordinates lie on the curve
///
/// `on_curve` comes from a constant-time check; branching on it here is
/// fine because rejection is public.
#[inline(always)]
pub fn point(on_curve: Choice, context: &'static str, reason: &'static str) -> Result<()> {
    if !bool::from(on_curve) {
        tracing::warn!(context, reason, "rejected point");
        return Err(Error::point(context, reason));
    }
    Ok(())
}

/// Validate that a square root exists
#[inline(always)]
pub fn residue(is_square: Choice, context: &'static str) -> Result<()> {
    if !bool::from(is_square) {
        return Err(Error::NonResidue { context });
    }
    Ok(())
}

/// Validate that a pairing input is not the point at infinity
#[inline(always)]
pub fn finite(is_infinity: bool, context: &'static str) -> Result<()> {
    if is_infinity {
        tracing::warn!(context, "pairing input at infinity");
        return Err(Error::DegeneratePairing { context });
    }
    Ok(())
}

/// Validate an encoding tag or canonical form
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Encoding { context, reason });
    }
    Ok(())
}
