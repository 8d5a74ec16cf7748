use crate::config::Policy;
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Expected allotment for a day: none on weekends and holidays.
pub fn calculate_expected(
    date: NaiveDate,
    iso_date: &str,
    holidays: &HashSet<String>,
    policy: &Policy,
) -> Option<i64> {
    if is_weekend(date) || holidays.contains(iso_date) {
        None
    } else {
        Some(policy.expected_minutes)
    }
}
