// Calendar month identifier in `YYYY-MM` form.
//
// Purpose
// - Key monthly closures and scope period computations to one calendar month.
//
// Responsibilities
// - Parse and render the `YYYY-MM` wire format.
// - Enumerate the calendar days of the month in order.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthKeyError {
    #[error("month key must look like YYYY-MM, got {0:?}")]
    Malformed(String),

    #[error("month {year}-{month} is outside the supported calendar")]
    OutOfRange { year: i32, month: u32 },
}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=9999).contains(&year) {
            return Err(MonthKeyError::OutOfRange { year, month });
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(MonthKeyError::OutOfRange { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().copied().unwrap_or(self.0)
    }

    /// Every calendar day of the month, in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let month = self.0.month();
        self.0
            .iter_days()
            .take_while(|day| day.month() == month)
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}
