use crate::errors::AppResult;
use crate::models::raw_punch::{Employee, RawPunch};
use crate::source::PunchSource;
use crate::utils::date::parse_iso_date;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const PUNCHES_FILE: &str = "punches.json";
pub const HOLIDAYS_FILE: &str = "holidays.json";
pub const EMPLOYEES_FILE: &str = "employees.json";

/// Either a bare array or the API envelope `{"content": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Envelope { content: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(v) => v,
            Listing::Envelope { content } => content,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayEntry {
    Date(String),
    Object { date: String },
}

impl HolidayEntry {
    fn date(&self) -> &str {
        match self {
            HolidayEntry::Date(d) => d,
            HolidayEntry::Object { date } => date,
        }
    }
}

/// Directory holding exported source data.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read_listing<T: DeserializeOwned>(&self, file: &str) -> AppResult<Vec<T>> {
        let content = fs::read_to_string(self.dir.join(file))?;
        let listing: Listing<T> = serde_json::from_str(&content)?;
        Ok(listing.into_vec())
    }

    /// Like `read_listing`, but failures become an empty list.
    fn read_or_empty<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        self.read_listing(file).unwrap_or_else(|e| {
            tracing::warn!(file, dir = %self.dir.display(), error = %e, "source unavailable, returning no data");
            Vec::new()
        })
    }
}

fn within(date: &str, from: NaiveDate, to: NaiveDate) -> bool {
    parse_iso_date(date).is_ok_and(|d| d >= from && d <= to)
}

impl PunchSource for JsonFileSource {
    fn employees(&self) -> Vec<Employee> {
        if self.dir.join(EMPLOYEES_FILE).exists() {
            return self.read_or_empty(EMPLOYEES_FILE);
        }

        // fall back to the employees seen in the punches
        let mut seen: Vec<Employee> = Vec::new();
        for p in self.read_or_empty::<RawPunch>(PUNCHES_FILE) {
            if !seen.iter().any(|e| e.id == p.employee.id) {
                seen.push(p.employee);
            }
        }
        seen
    }

    fn punches(&self, employee_id: Option<i64>, from: NaiveDate, to: NaiveDate) -> Vec<RawPunch> {
        self.read_or_empty::<RawPunch>(PUNCHES_FILE)
            .into_iter()
            .filter(|p| employee_id.is_none_or(|id| p.employee.id == id))
            .filter(|p| within(&p.date, from, to))
            .collect()
    }

    fn holidays(&self, from: NaiveDate, to: NaiveDate) -> Vec<String> {
        if !self.dir.join(HOLIDAYS_FILE).exists() {
            return Vec::new();
        }

        self.read_or_empty::<HolidayEntry>(HOLIDAYS_FILE)
            .iter()
            .map(|h| h.date().to_string())
            .filter(|d| within(d, from, to))
            .collect()
    }
}
