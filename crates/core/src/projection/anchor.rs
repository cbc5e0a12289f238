//! Anchor resolution
//!
//! Converts "I am `offset` days into element `index`" into one linear day
//! count usable as the projector's starting position.

use chroney_domain::{ChroneyError, Pattern, Result};

/// Days consumed by elements `0..=index`, minus `offset`
///
/// The arithmetic is signed and `offset` is not checked against the
/// element's span, so a large offset yields a negative anchor. The projector
/// normalizes negative positions with a true modulo.
///
/// # Errors
/// Returns `ChroneyError::Validation` on field `index` when `index` is not
/// a position in `pattern`, and on field `offset` if the subtraction
/// overflows.
pub fn anchor(pattern: &Pattern, index: usize, offset: i64) -> Result<i64> {
    let Some(consumed) = pattern.elements().get(..=index) else {
        return Err(ChroneyError::validation(
            "index",
            format!("index {index} is outside a pattern of {} elements", pattern.len()),
        ));
    };

    let total: i64 = consumed.iter().map(|element| i64::from(element.span)).sum();

    total
        .checked_sub(offset)
        .ok_or_else(|| ChroneyError::validation("offset", "anchor is out of range"))
}
