//! Typed reconciliation parameters, built from [`Config`](super::Config).

use chrono_tz::Tz;

/// Text shown instead of worked time and balance when a day cannot be computed.
pub const INSUFFICIENT_PUNCHES: &str = "Fewer than 4 punches registered";

/// Flag written by the redistribution pass on every record it changes.
pub const ADJUST_FLAG: &str = "ADJUST";

/// All values are minutes unless stated otherwise.
#[derive(Debug, Clone)]
pub struct Policy {
    pub timezone: Tz,
    pub date_format: String,
    pub expected_minutes: i64,
    pub overtime_cap: i64,
    pub min_break: i64,
    pub normalized_break: i64,
    /// Half-open `[start, end)` window, minutes of day.
    pub business_hours: (i64, i64),
    pub holiday_marker: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Sao_Paulo,
            date_format: "%d/%m/%Y".to_string(),
            expected_minutes: 8 * 60 + 48,
            overtime_cap: 117,
            min_break: 58,
            normalized_break: 60,
            business_hours: (8 * 60, 17 * 60 + 48),
            holiday_marker: "HOLIDAY COMPENSATION".to_string(),
        }
    }
}
