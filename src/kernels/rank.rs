//! This module contains the rank-to-digit mapper.
//!
//! A rank `i` is expanded into `k` digits with a running factorial multiplier:
//! for position `j`, the multiplier becomes `j!` and the digit is
//! `(i / j!) mod (j + 1)`. The result is a mixed-radix numeral, not a checked
//! permutation; repeated digits are expected and preserved.

use crate::error::{ensure_positive, Result};
use crate::types::DigitSequence;

/// Expands `rank` into its `k`-digit mixed-radix sequence.
///
/// `n` is the size of the domain the digits are meant to index into. It is
/// validated but does not influence the digits themselves.
///
/// # Errors
/// Returns `SpeedyError::InvalidArgument` if `n` or `k` is zero.
pub fn ith_digits(n: u64, k: u32, rank: i64) -> Result<DigitSequence> {
    ensure_positive(n, k)?;
    Ok(digits_unchecked(k, rank))
}

/// Core digit extraction, shared with the unwinder once it has validated its
/// own arguments.
pub(crate) fn digits_unchecked(k: u32, rank: i64) -> DigitSequence {
    let mut digits = Vec::with_capacity(k as usize);
    // `None` once j! has outgrown i64: every rank then divides to zero.
    let mut factor: Option<i64> = Some(1);

    for j in 1..=k {
        let j = i64::from(j);
        factor = factor.and_then(|f| f.checked_mul(j));
        let digit = match factor {
            // rem_euclid keeps negative ranks inside [0, j]; for non-negative
            // ranks it matches the truncating modulo.
            Some(f) => (rank / f).rem_euclid(j + 1),
            None => 0,
        };
        digits.push(digit as u32);
    }

    DigitSequence::from_digits(digits)
}

//==================================================================================
// Unit Tests
//==================================================================================
