#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::America::Sao_Paulo;
use punchsheet::config::Policy;
use punchsheet::models::daily_record::{DailyRecord, Measure};
use punchsheet::models::punches::Punches;
use punchsheet::models::raw_punch::{AdjustmentReason, Employee, RawPunch};
use punchsheet::utils::time::parse_time_to_minutes;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn psh() -> Command {
    cargo_bin_cmd!("punchsheet")
}

/// Epoch milliseconds of a local time in the default policy timezone.
pub fn ms(date: &str, time: &str) -> i64 {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    let t = NaiveTime::parse_from_str(time, "%H:%M").expect("valid time");
    Sao_Paulo
        .from_local_datetime(&d.and_time(t))
        .single()
        .expect("unambiguous local time")
        .timestamp_millis()
}

pub fn employee(id: i64) -> Employee {
    Employee {
        id,
        name: format!("Employee {id}"),
    }
}

pub fn punch(emp: i64, date: &str, din: Option<&str>, dout: Option<&str>) -> RawPunch {
    RawPunch {
        employee: employee(emp),
        date: date.to_string(),
        date_in: din.map(|t| ms(date, t)),
        date_out: dout.map(|t| ms(date, t)),
        adjust: false,
        adjustment_reason: None,
    }
}

/// A day's punches as the source delivers them: latest segment first.
pub fn day(emp: i64, date: &str, segments: &[(&str, &str)]) -> Vec<RawPunch> {
    segments
        .iter()
        .rev()
        .map(|(i, o)| punch(emp, date, Some(i), Some(o)))
        .collect()
}

pub fn holiday_compensation(emp: i64, date: &str) -> RawPunch {
    RawPunch {
        adjust: true,
        adjustment_reason: Some(AdjustmentReason {
            description: "HOLIDAY COMPENSATION".to_string(),
        }),
        ..punch(emp, date, None, None)
    }
}

fn opt_minutes(s: &str) -> Option<i64> {
    if s.is_empty() {
        None
    } else {
        Some(parse_time_to_minutes(s).expect("valid HH:MM"))
    }
}

/// Record built straight from the column texts, for redistribution tests.
pub fn record(date: &str, punches: &str, brk: &str, excess: &str, available: &str) -> DailyRecord {
    let policy = Policy::default();
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    DailyRecord {
        employee_id: 1,
        employee_name: "Employee 1".to_string(),
        date: d,
        date_text: d.format("%d/%m/%Y").to_string(),
        weekday: String::new(),
        punches: Punches::from_text(punches, &policy.holiday_marker).expect("valid punches"),
        is_adjustment: false,
        worked: Measure::Blank,
        expected: Some(policy.expected_minutes),
        balance: Measure::Minutes(0),
        break_minutes: opt_minutes(brk),
        excess_overtime: opt_minutes(excess),
        available_overtime: opt_minutes(available),
        adjusted: false,
    }
}

/// Fresh directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("punchsheet_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a JSON source directory (API envelope for punches).
pub fn write_source(name: &str, punches: &[RawPunch], holidays: &[&str]) -> PathBuf {
    let dir = temp_dir(name);
    let envelope = serde_json::json!({ "content": punches });
    fs::write(dir.join("punches.json"), envelope.to_string()).expect("write punches");
    fs::write(
        dir.join("holidays.json"),
        serde_json::to_string(holidays).expect("serialize holidays"),
    )
    .expect("write holidays");
    dir
}
