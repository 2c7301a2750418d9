//! Unbiased range sampling.
//!
//! Reducing a 64-bit draw with `% n` favours small residues whenever `n`
//! does not divide 2^64. Draws above the largest multiple of `n` that fits
//! in a `u64` are rejected and redrawn, so every residue is backed by the
//! same number of accepted raw values, give or take the boundary value
//! itself.
//!
//! The acceptance region always covers more than half of the output range,
//! so the expected number of draws is below two for any `n` and close to
//! one for small `n`.

use super::core::Seed;
use crate::error::Error;

impl Seed {
    /// Returns a value uniformly distributed over `[0, upper_bound)`,
    /// advancing the state once per raw draw.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `upper_bound` is zero. The state is
    /// left untouched in that case.
    pub fn uniform(&mut self, upper_bound: u64) -> Result<u64, Error> {
        let limit = rejection_limit(upper_bound)?;

        let mut raw = self.next_u64();
        while raw > limit {
            raw = self.next_u64();
        }

        Ok(raw % upper_bound)
    }
}

/// Pure form of [`Seed::uniform`].
pub fn uniform(seed: Seed, upper_bound: u64) -> Result<(Seed, u64), Error> {
    let mut next = seed;
    let value = next.uniform(upper_bound)?;
    Ok((next, value))
}

/// Largest multiple of `upper_bound` not exceeding `u64::MAX`.
///
/// Raw draws are accepted while `raw <= limit`. The bound is inclusive, so
/// `limit` itself folds onto residue zero; this keeps the acceptance test a
/// single comparison.
fn rejection_limit(upper_bound: u64) -> Result<u64, Error> {
    if upper_bound == 0 {
        return Err(Error::InvalidArgument);
    }

    Ok(u64::MAX / upper_bound * upper_bound)
}
