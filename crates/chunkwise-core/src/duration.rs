//! Free-form duration parsing.
//!
//! Accepts strings such as `"1h 30m 15s"`, `"90 minutes"` or `"2 hours"`.
//! Every `<digits><unit>` occurrence is added to the total; anything else is
//! ignored, so malformed input yields fewer seconds rather than an error.

use std::sync::LazyLock;

use regex::Regex;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*h(?:ours?)?|([0-9]+)\s*m(?:inutes?)?|([0-9]+)\s*s(?:econds?)?")
        .unwrap_or_else(|e| unreachable!("duration pattern is a literal: {e}"))
});

/// Parse a duration string into total seconds.
///
/// Returns 0 when nothing matches, including for a bare number with no unit.
pub fn parse_duration(input: &str) -> u64 {
    DURATION_RE
        .captures_iter(input)
        .fold(0u64, |total, caps| {
            let (digits, unit) = if let Some(m) = caps.get(1) {
                (m.as_str(), SECS_PER_HOUR)
            } else if let Some(m) = caps.get(2) {
                (m.as_str(), SECS_PER_MINUTE)
            } else if let Some(m) = caps.get(3) {
                (m.as_str(), 1)
            } else {
                return total;
            };
            // ASCII digit runs only fail to parse on overflow.
            let value = digits.parse::<u64>().unwrap_or(u64::MAX);
            total.saturating_add(value.saturating_mul(unit))
        })
}
