//! Event timestamps: calendar date plus time of day at minute precision.
//!
//! The wire text is `DD/MM/YYYY HH:MM`, no timezone. Parsing enforces the
//! exact shape and the calendar rules (day-of-month bounds, leap-year
//! February, hour and minute ranges) itself, so the date checks always run
//! before the time checks; chrono is the comparison representation and the
//! source of "now", not the validator.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a timestamp from its wire texts.
#[derive(Debug, Error)]
pub enum StampError {
    /// Date text is not a valid `DD/MM/YYYY` calendar date.
    #[error("invalid date '{0}'")]
    InvalidDate(String),
    /// Time text is not a valid `HH:MM` time of day.
    #[error("invalid time '{0}'")]
    InvalidTime(String),
}

/// A minute-precision timestamp with `DD/MM/YYYY HH:MM` wire form.
///
/// Ordering is chronological; two stamps are equal exactly when their wire
/// texts are equal, which is what schedule-clash detection compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Stamp(NaiveDateTime);

impl Stamp {
    /// Parses a stamp from separate date and time texts.
    ///
    /// The date is checked completely before the time is looked at:
    /// shape (`DD/MM/YYYY`, digits in the digit positions), then month
    /// range, then day range including leap-year February 29.
    pub fn parse(date_text: &str, time_text: &str) -> Result<Self, StampError> {
        let date = parse_date(date_text)?;
        let time = parse_time(time_text)?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Parses a stamp from the combined wire text `DD/MM/YYYY HH:MM`.
    pub fn parse_text(text: &str) -> Result<Self, StampError> {
        let (date_text, time_text) = text
            .split_once(' ')
            .ok_or_else(|| StampError::InvalidDate(text.to_string()))?;
        Self::parse(date_text, time_text)
    }

    /// Renders the wire text. `parse_text(render())` is the identity.
    pub fn render(&self) -> String {
        self.0.format("%d/%m/%Y %H:%M").to_string()
    }

    /// The current local time, truncated to the minute.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Wraps a datetime, truncating seconds and subseconds to zero.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let truncated = dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt);
        Self(truncated)
    }

    /// The underlying datetime.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<Stamp> for String {
    fn from(stamp: Stamp) -> Self {
        stamp.render()
    }
}

impl TryFrom<String> for Stamp {
    type Error = StampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_text(&value)
    }
}

impl std::fmt::Display for Stamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Returns whether `year` is a leap year.
pub fn is_leap(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the number of days in `month` of `year`, or 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, StampError> {
    let invalid = || StampError::InvalidDate(text.to_string());

    if !Regex::new(r"^\d{2}/\d{2}/\d{4}$")
        .expect("invalid regex")
        .is_match(text)
    {
        return Err(invalid());
    }

    let day: u32 = text[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = text[3..5].parse().map_err(|_| invalid())?;
    let year: i32 = text[6..10].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    if day < 1 || day > days_in_month(month, year) {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_time(text: &str) -> Result<NaiveTime, StampError> {
    let invalid = || StampError::InvalidTime(text.to_string());

    if !Regex::new(r"^\d{2}:\d{2}$")
        .expect("invalid regex")
        .is_match(text)
    {
        return Err(invalid());
    }

    let hour: u32 = text[0..2].parse().map_err(|_| invalid())?;
    let minute: u32 = text[3..5].parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}
