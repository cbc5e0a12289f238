//! Cycle length

use chroney_domain::Pattern;

/// Total number of days in one repetition of `pattern`
///
/// An empty pattern has a cycle length of zero.
pub fn cycle_length(pattern: &Pattern) -> u64 {
    pattern.iter().map(|element| u64::from(element.span)).sum()
}
