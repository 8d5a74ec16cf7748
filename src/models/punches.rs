//! The "Punches" column of a daily record: either the holiday compensation
//! marker or a list of `HH:MM - HH:MM` segments, oldest first.
//!
//! Times are kept as minutes of day; text is only produced when the record is
//! rendered or exported.

use crate::errors::AppResult;
use crate::utils::time::{format_unsigned, parse_time_to_minutes};
use std::fmt;

pub const SEGMENT_SEPARATOR: &str = " | ";
pub const BOUND_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl Segment {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Move both bounds by `delta` minutes. Segments with a missing bound are left untouched.
    pub fn shift(&mut self, delta: i64) -> bool {
        match (self.start, self.end) {
            (Some(s), Some(e)) => {
                self.start = Some(s + delta);
                self.end = Some(e + delta);
                true
            }
            _ => false,
        }
    }

    /// Move only the end bound by `delta` minutes.
    pub fn extend_end(&mut self, delta: i64) -> bool {
        match (self.start, self.end) {
            (Some(_), Some(e)) => {
                self.end = Some(e + delta);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |v: Option<i64>| v.map(format_unsigned).unwrap_or_default();
        write!(f, "{}{}{}", side(self.start), BOUND_SEPARATOR, side(self.end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Punches {
    HolidayCompensation(String),
    Segments(Vec<Segment>),
}

impl Punches {
    /// Parse the rendered column back. `marker` is the holiday compensation text.
    ///
    /// Records built from raw punches never go through text; this is the way in
    /// for sheets edited by hand and for test fixtures.
    pub fn from_text(text: &str, marker: &str) -> AppResult<Self> {
        if text == marker {
            return Ok(Self::HolidayCompensation(marker.to_string()));
        }
        if text.trim().is_empty() {
            return Ok(Self::Segments(Vec::new()));
        }

        let mut segments = Vec::new();
        for block in text.split(SEGMENT_SEPARATOR) {
            let (start, end) = block.split_once(" -").unwrap_or((block, ""));
            segments.push(Segment::new(
                parse_side(start)?,
                parse_side(end)?,
            ));
        }
        Ok(Self::Segments(segments))
    }

    pub fn is_holiday_compensation(&self) -> bool {
        matches!(self, Self::HolidayCompensation(_))
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Segments(s) => s,
            Self::HolidayCompensation(_) => &[],
        }
    }

    pub fn segments_mut(&mut self) -> Option<&mut Vec<Segment>> {
        match self {
            Self::Segments(s) => Some(s),
            Self::HolidayCompensation(_) => None,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }
}

fn parse_side(s: &str) -> AppResult<Option<i64>> {
    let t = s.trim();
    if t.is_empty() {
        Ok(None)
    } else {
        parse_time_to_minutes(t).map(Some)
    }
}

impl fmt::Display for Punches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HolidayCompensation(marker) => f.write_str(marker),
            Self::Segments(segments) => {
                for (i, seg) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(SEGMENT_SEPARATOR)?;
                    }
                    write!(f, "{seg}")?;
                }
                Ok(())
            }
        }
    }
}
