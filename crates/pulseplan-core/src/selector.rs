//! Deterministic selection: a content-derived seed and an index pick.
//!
//! Not a random number generator. The same text always yields the same seed,
//! so plans are reproducible.

use crate::error::PlanError;

/// Position-weighted ordinal sum of `text`.
///
/// Each code point contributes its first UTF-16 code unit multiplied by its
/// 1-based position. Arithmetic wraps, so the function is total.
pub fn seed(text: &str) -> i64 {
    let mut buf = [0u16; 2];
    text.chars()
        .enumerate()
        .fold(0i64, |acc, (idx, ch)| {
            let unit = i64::from(ch.encode_utf16(&mut buf)[0]);
            acc.wrapping_add(unit.wrapping_mul(idx as i64 + 1))
        })
}

/// Pick `items[|seed| mod len]`.
///
/// `what` names the list in the error when it is empty.
pub fn pick<'a, T>(items: &'a [T], seed: i64, what: &'static str) -> Result<&'a T, PlanError> {
    if items.is_empty() {
        return Err(PlanError::EmptyInput { what });
    }
    let index = (seed.unsigned_abs() % items.len() as u64) as usize;
    Ok(&items[index])
}
