//! Time utilities: parsing and formatting signed "HH:MM" values, millisecond
//! durations and epoch timestamps rendered in the organization's timezone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

const MS_PER_MINUTE: i64 = 60_000;

/// How a minute count is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignStyle {
    /// `+HH:MM` for zero and positive values, `-HH:MM` for negative ones.
    Explicit,
    /// `HH:MM`, with `-` only for negative values.
    NegativeOnly,
}

/// Parse "[+-]HH:MM" into a signed minute count.
/// Empty input is treated as zero.
pub fn parse_time_to_minutes(s: &str) -> AppResult<i64> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(0);
    }

    let (negative, body) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    let (h, m) = body
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let is_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(h) || !is_digits(m) {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    let hours: i64 = h.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: i64 = m.parse().map_err(|_| AppError::InvalidTime(s.to_string()))?;
    if minutes > 59 {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    Ok(if negative { -total } else { total })
}

pub fn format_minutes(mins: i64, style: SignStyle) -> String {
    let sign = match (mins < 0, style) {
        (true, _) => "-",
        (false, SignStyle::Explicit) => "+",
        (false, SignStyle::NegativeOnly) => "",
    };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// `+HH:MM` / `-HH:MM`, used by the balance and excess overtime columns.
pub fn format_signed(mins: i64) -> String {
    format_minutes(mins, SignStyle::Explicit)
}

/// `HH:MM` / `-HH:MM`, used by break, available overtime and punch times.
pub fn format_unsigned(mins: i64) -> String {
    format_minutes(mins, SignStyle::NegativeOnly)
}

/// Round a millisecond duration to the nearest minute (ties to even).
pub fn round_ms_to_minutes(ms: i64) -> AppResult<i64> {
    if ms < 0 {
        return Err(AppError::NegativeDuration(ms));
    }

    let q = ms / MS_PER_MINUTE;
    let twice_r = (ms % MS_PER_MINUTE) * 2;

    let rounded = if twice_r > MS_PER_MINUTE || (twice_r == MS_PER_MINUTE && q % 2 == 1) {
        q + 1
    } else {
        q
    };
    Ok(rounded)
}

pub fn milliseconds_to_hhmm(ms: i64) -> AppResult<String> {
    round_ms_to_minutes(ms).map(format_unsigned)
}

/// Minute of day of an epoch-millisecond timestamp in the given timezone.
pub fn epoch_ms_to_minute_of_day(ms: i64, tz: Tz) -> AppResult<i64> {
    let utc = DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| AppError::InvalidTime(format!("timestamp {ms} out of range")))?;
    let local = utc.with_timezone(&tz);
    Ok(i64::from(local.hour()) * 60 + i64::from(local.minute()))
}
