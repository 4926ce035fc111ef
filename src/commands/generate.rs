//! Random target generation

use crate::core::Alphabet;
use crate::error::{Error, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Shortest target `random-break` generates by default
pub const DEFAULT_MIN_LEN: i64 = 8;

/// Longest target `random-break` generates by default
pub const DEFAULT_MAX_LEN: i64 = 50;

/// Hard cap on generated target length
pub const MAX_TARGET_LEN: i64 = 4096;

/// Draw a random target
///
/// The length is uniform in `min..=max`; each symbol is uniform over the
/// alphabet.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `min < 1`, `min > max`, or `max` exceeds
/// [`MAX_TARGET_LEN`].
pub fn random_target<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<String> {
    if min < 1 {
        return Err(Error::invalid(format!(
            "minimum length must be at least 1, got {min}"
        )));
    }
    if min > max {
        return Err(Error::invalid(format!(
            "minimum length {min} exceeds maximum {max}"
        )));
    }
    if max > MAX_TARGET_LEN {
        return Err(Error::invalid(format!(
            "maximum length must be at most {MAX_TARGET_LEN}, got {max}"
        )));
    }

    let length = rng.random_range(min..=max) as usize;
    (0..length)
        .map(|_| alphabet.symbols().choose(&mut *rng).copied())
        .collect::<Option<String>>()
        .ok_or_else(|| Error::invalid("alphabet is empty"))
}
