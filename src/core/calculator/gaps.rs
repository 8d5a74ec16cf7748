//! Module responsible for finding the lunch break of a day: the longest gap
//! between consecutive segments that touches business hours.

use crate::config::Policy;
use crate::utils::time::format_unsigned;
use regex::Regex;
use std::sync::LazyLock;

static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,}):(\d{2})").expect("valid time token regex"));

/// A candidate gap between the end of one segment and the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub start: i64,
    pub end: i64,
    pub duration_minutes: i64,
}

impl Gap {
    fn between(start: i64, end: i64) -> Self {
        let mut duration = end - start;
        if duration < 0 {
            // crosses midnight
            duration += 24 * 60;
        }
        Self {
            start,
            end,
            duration_minutes: duration,
        }
    }

    /// False when both bounds sit before opening or both at/after closing.
    pub fn touches_window(&self, (open, close): (i64, i64)) -> bool {
        let before = self.start < open && self.end < open;
        let after = self.start >= close && self.end >= close;
        !(before || after)
    }
}

/// `HH:MM` tokens of the punches text, left to right, as minutes of day.
pub fn time_tokens(punches_text: &str) -> Vec<i64> {
    TIME_TOKEN
        .captures_iter(punches_text)
        .filter_map(|c| {
            let h: i64 = c[1].parse().ok()?;
            let m: i64 = c[2].parse().ok()?;
            Some(h * 60 + m)
        })
        .collect()
}

/// Gaps formed by tokens (1,2), (3,4), …
pub fn candidate_gaps(tokens: &[i64]) -> Vec<Gap> {
    tokens
        .iter()
        .skip(1)
        .step_by(2)
        .zip(tokens.iter().skip(2).step_by(2))
        .map(|(&start, &end)| Gap::between(start, end))
        .collect()
}

/// Longest qualifying break in minutes; `None` when fewer than two full
/// segments exist, on holiday compensation days, or when every gap falls
/// outside business hours.
pub fn analyze_break(punches_text: &str, policy: &Policy) -> Option<i64> {
    if punches_text == policy.holiday_marker {
        return None;
    }

    let tokens = time_tokens(punches_text);
    if tokens.len() < 4 {
        return None;
    }

    candidate_gaps(&tokens)
        .into_iter()
        .filter(|g| g.touches_window(policy.business_hours))
        .map(|g| g.duration_minutes)
        .max()
}

/// Text form of [`analyze_break`]: `HH:MM`, or empty when no break was found.
pub fn break_text(punches_text: &str, policy: &Policy) -> String {
    analyze_break(punches_text, policy)
        .map(format_unsigned)
        .unwrap_or_default()
}
