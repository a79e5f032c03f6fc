#![forbid(unsafe_code)]

//! Bounded retry for mutating API calls

use crate::error::{Error, Result};

/// Attempts made for a mutating call before giving up.
pub const MAX_ATTEMPTS: u32 = 3;

/// Runs `op` up to [`MAX_ATTEMPTS`] times with no delay between attempts,
/// retrying only transient server-side failures. Any other error propagates
/// unretried. Exhausting the attempts yields [`Error::RetryExhausted`] with
/// the final failure as its source.
pub fn transient<T, F>(mut op: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut last = None;
    for _ in 0..MAX_ATTEMPTS {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() => last = Some(err),
            Err(err) => return Err(err),
        }
    }
    // The loop only falls through on transient errors, so `last` is set.
    Err(Error::RetryExhausted {
        attempts: MAX_ATTEMPTS,
        source: Box::new(last.unwrap_or_else(|| Error::fetch("retry loop exhausted"))),
    })
}
