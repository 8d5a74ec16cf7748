//! Punch sources: where raw punches, holidays and employees come from.
//!
//! Sources never fail into the pipeline: an unreadable source yields empty
//! results and a warning in the log.

mod json_file;

pub use json_file::JsonFileSource;

use crate::models::raw_punch::{Employee, RawPunch};
use crate::utils::date::date_windows;
use chrono::NaiveDate;

pub trait PunchSource {
    fn employees(&self) -> Vec<Employee>;

    /// Punches of one employee (all employees when `None`) dated within `from..=to`.
    fn punches(&self, employee_id: Option<i64>, from: NaiveDate, to: NaiveDate) -> Vec<RawPunch>;

    /// Holiday dates ("YYYY-MM-DD") within `from..=to`.
    fn holidays(&self, from: NaiveDate, to: NaiveDate) -> Vec<String>;
}

/// Query the source in windows of `chunk_days` days and concatenate the
/// results in window order.
pub fn fetch_punches_in_chunks<S: PunchSource + ?Sized>(
    source: &S,
    employee_id: Option<i64>,
    from: NaiveDate,
    to: NaiveDate,
    chunk_days: u64,
) -> Vec<RawPunch> {
    let mut punches = Vec::new();

    for (start, end) in date_windows(from, to, chunk_days) {
        let chunk = source.punches(employee_id, start, end);
        tracing::debug!(%start, %end, count = chunk.len(), "punch window fetched");
        punches.extend(chunk);
    }

    punches
}
