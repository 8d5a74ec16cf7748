//! Builds one [`DailyRecord`] out of a day's punch group.

use crate::config::Policy;
use crate::core::calculator::expected::calculate_expected;
use crate::core::calculator::grouping::DailyPunchGroup;
use crate::core::calculator::surplus::calculate_balance;
use crate::errors::AppResult;
use crate::models::daily_record::{DailyRecord, Measure};
use crate::models::punches::{Punches, Segment};
use crate::models::raw_punch::RawPunch;
use crate::utils::date::{format_date, is_weekend, parse_iso_date, weekday_name};
use crate::utils::time::{epoch_ms_to_minute_of_day, round_ms_to_minutes};
use chrono::NaiveDate;
use std::collections::HashSet;

pub fn build_record(
    group: &DailyPunchGroup,
    holidays: &HashSet<String>,
    policy: &Policy,
) -> AppResult<DailyRecord> {
    let first = group.first();
    let date = parse_iso_date(&group.key.date)?;

    let (punches, worked) = if first.is_holiday_compensation(&policy.holiday_marker) {
        (
            Punches::HolidayCompensation(policy.holiday_marker.clone()),
            Measure::Blank,
        )
    } else {
        (
            render_segments(&group.punches, policy)?,
            calculate_worked(&group.punches, date)?,
        )
    };

    let expected = calculate_expected(date, &group.key.date, holidays, policy);
    let balance = calculate_balance(worked, expected);

    Ok(DailyRecord {
        employee_id: first.employee.id,
        employee_name: first.employee.name.clone(),
        date,
        date_text: format_date(date, &policy.date_format),
        weekday: weekday_name(date).to_string(),
        punches,
        is_adjustment: first.adjust,
        worked,
        expected,
        balance,
        break_minutes: None,
        excess_overtime: None,
        available_overtime: None,
        adjusted: false,
    })
}

/// Segments are rendered in reverse arrival order: the source delivers the
/// latest punch of the day first.
fn render_segments(punches: &[RawPunch], policy: &Policy) -> AppResult<Punches> {
    let to_minutes = |ms: Option<i64>| -> AppResult<Option<i64>> {
        ms.map(|v| epoch_ms_to_minute_of_day(v, policy.timezone))
            .transpose()
    };

    let segments = punches
        .iter()
        .rev()
        .map(|p| Ok(Segment::new(to_minutes(p.date_in)?, to_minutes(p.date_out)?)))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Punches::Segments(segments))
}

fn calculate_worked(punches: &[RawPunch], date: NaiveDate) -> AppResult<Measure> {
    let incomplete = punches.iter().any(|p| !p.is_complete());
    if incomplete || (punches.len() < 2 && !is_weekend(date)) {
        return Ok(Measure::Insufficient);
    }

    let total_ms: i64 = punches.iter().filter_map(RawPunch::duration_ms).sum();
    Ok(Measure::Minutes(round_ms_to_minutes(total_ms)?))
}
