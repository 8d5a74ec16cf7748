use crate::config::policy::{ADJUST_FLAG, INSUFFICIENT_PUNCHES};
use crate::models::punches::Punches;
use crate::utils::time::{format_signed, format_unsigned};
use chrono::NaiveDate;

/// Worked time or balance of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Nothing to compute (holiday compensation days).
    Blank,
    Minutes(i64),
    /// Missing or too few punches.
    Insufficient,
}

impl Measure {
    pub fn minutes(&self) -> Option<i64> {
        match self {
            Measure::Minutes(m) => Some(*m),
            _ => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Measure::Insufficient)
    }
}

/// One row of the timesheet: one employee, one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub date_text: String,
    pub weekday: String,
    pub punches: Punches,
    pub is_adjustment: bool,
    pub worked: Measure,
    pub expected: Option<i64>,
    pub balance: Measure,
    pub break_minutes: Option<i64>,
    pub excess_overtime: Option<i64>,
    pub available_overtime: Option<i64>,
    pub adjusted: bool,
}

impl DailyRecord {
    pub fn punches_text(&self) -> String {
        self.punches.to_string()
    }

    pub fn is_adjustment_text(&self) -> &'static str {
        if self.is_adjustment { "yes" } else { "" }
    }

    pub fn worked_text(&self) -> String {
        match self.worked {
            Measure::Blank => String::new(),
            Measure::Minutes(m) => format_unsigned(m),
            Measure::Insufficient => INSUFFICIENT_PUNCHES.to_string(),
        }
    }

    pub fn expected_text(&self) -> String {
        self.expected.map(format_unsigned).unwrap_or_default()
    }

    pub fn balance_text(&self) -> String {
        match self.balance {
            Measure::Blank => String::new(),
            Measure::Minutes(m) => format_signed(m),
            Measure::Insufficient => INSUFFICIENT_PUNCHES.to_string(),
        }
    }

    pub fn break_text(&self) -> String {
        self.break_minutes.map(format_unsigned).unwrap_or_default()
    }

    pub fn excess_overtime_text(&self) -> String {
        self.excess_overtime.map(format_signed).unwrap_or_default()
    }

    pub fn available_overtime_text(&self) -> String {
        self.available_overtime.map(format_unsigned).unwrap_or_default()
    }

    pub fn adjusted_text(&self) -> &'static str {
        if self.adjusted { ADJUST_FLAG } else { "" }
    }

    /// Balance in minutes, 0 when it cannot be computed.
    pub fn balance_minutes(&self) -> i64 {
        self.balance.minutes().unwrap_or(0)
    }

    pub fn expected_minutes(&self) -> i64 {
        self.expected.unwrap_or(0)
    }
}
