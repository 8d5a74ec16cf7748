use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt::Write;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an ISO calendar date (YYYY-MM-DD).
pub fn parse_iso_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Falls back to ISO when `fmt` holds an unknown specifier.
pub fn format_date(d: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", d.format(fmt)).is_err() {
        return d.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Split the inclusive range `from..=to` into consecutive inclusive windows of
/// at most `days` days.
pub fn date_windows(from: NaiveDate, to: NaiveDate, days: u64) -> Vec<(NaiveDate, NaiveDate)> {
    let step = days.max(1);
    let mut out = Vec::new();
    let mut start = from;

    while start <= to {
        let end = start
            .checked_add_days(Days::new(step - 1))
            .map_or(to, |e| e.min(to));
        out.push((start, end));

        match end.succ_opt() {
            Some(next) => start = next,
            None => break,
        }
    }

    out
}

/// Resolve the `--from` / `--to` pair, defaulting both to today.
pub fn resolve_range(from: Option<&str>, to: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = from.map(parse_iso_date).transpose()?.unwrap_or_else(today);
    let end = to.map(parse_iso_date).transpose()?.unwrap_or_else(today);

    if start > end {
        return Err(AppError::InvalidRange(
            "start date cannot be after end date".to_string(),
        ));
    }

    Ok((start, end))
}
