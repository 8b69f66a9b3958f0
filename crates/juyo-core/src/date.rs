//! Request dates.
//!
//! Accepts both ISO-8601 forms: extended `YYYY-MM-DD` and basic `YYYYMMDD`
//! (the daily driver formats yesterday in the basic form).

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::JuyoError;

/// Calendar date a dataset is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestDate(NaiveDate);

impl RequestDate {
    pub fn new(date: NaiveDate) -> Self {
        RequestDate(date)
    }

    /// Builds a date from components; `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(RequestDate)
    }

    pub fn parse(input: &str) -> Result<Self, JuyoError> {
        let s = input.trim();
        parse_extended(s)
            .or_else(|| parse_basic(s))
            .map(RequestDate)
            .ok_or_else(|| JuyoError::InvalidDate {
                input: input.to_string(),
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// `YYYYMMDD`, as embedded in daily filenames.
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

/// `YYYY-MM-DD` with zero-padded fields; `2024-1-5` is rejected.
fn parse_extended(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    from_digits(s.get(0..4)?, s.get(5..7)?, s.get(8..10)?)
}

/// `YYYYMMDD`, split by position so the year cannot swallow the month.
fn parse_basic(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 {
        return None;
    }
    from_digits(s.get(0..4)?, s.get(4..6)?, s.get(6..8)?)
}

fn from_digits(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year) && digits(month) && digits(day)) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

impl From<NaiveDate> for RequestDate {
    fn from(d: NaiveDate) -> Self {
        RequestDate(d)
    }
}

impl FromStr for RequestDate {
    type Err = JuyoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestDate::parse(s)
    }
}

impl fmt::Display for RequestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
