// src/export/model.rs

use crate::models::daily_record::DailyRecord;
use serde::Serialize;

/// Flat row for export: one record of one table.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub stage: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub date: String,
    pub weekday: String,
    pub punches: String,
    pub is_adjustment: String,
    pub worked: String,
    pub expected: String,
    pub balance: String,
    #[serde(rename = "break")]
    pub break_time: String,
    pub excess_overtime: String,
    pub available_overtime: String,
    pub status: String,
}

impl RecordExport {
    pub fn from_record(stage: &str, r: &DailyRecord) -> Self {
        Self {
            stage: stage.to_string(),
            employee_id: r.employee_id,
            employee_name: r.employee_name.clone(),
            date: r.date_text.clone(),
            weekday: r.weekday.clone(),
            punches: r.punches_text(),
            is_adjustment: r.is_adjustment_text().to_string(),
            worked: r.worked_text(),
            expected: r.expected_text(),
            balance: r.balance_text(),
            break_time: r.break_text(),
            excess_overtime: r.excess_overtime_text(),
            available_overtime: r.available_overtime_text(),
            status: r.adjusted_text().to_string(),
        }
    }
}

/// Header for CSV / XLSX, in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "stage",
        "employee_id",
        "employee_name",
        "date",
        "weekday",
        "punches",
        "is_adjustment",
        "worked",
        "expected",
        "balance",
        "break",
        "excess_overtime",
        "available_overtime",
        "status",
    ]
}

/// Row as strings, in header order (for XLSX).
pub(crate) fn export_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.stage.clone(),
        e.employee_id.to_string(),
        e.employee_name.clone(),
        e.date.clone(),
        e.weekday.clone(),
        e.punches.clone(),
        e.is_adjustment.clone(),
        e.worked.clone(),
        e.expected.clone(),
        e.balance.clone(),
        e.break_time.clone(),
        e.excess_overtime.clone(),
        e.available_overtime.clone(),
        e.status.clone(),
    ]
}
