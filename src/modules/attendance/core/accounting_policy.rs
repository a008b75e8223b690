// Accounting configuration supplied by the embedding application.
//
// Purpose
// - Carry the daily threshold, the standard daily hours used for the report
//   baseline, and the absent-day policy as one validated value.
//
// Boundaries
// - No defaults. Callers must supply every hour value explicitly.

use serde::Serialize;
use thiserror::Error;

/// Hours credited for a day flagged as vacation, independent of the threshold.
pub const VACATION_DAY_HOURS: f64 = 8.0;

const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("{name} must be a positive number of hours, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} cannot exceed 24 hours, got {value}")]
    ExceedsDay { name: &'static str, value: f64 },
}

/// Daily hours above which work counts as overtime and below which it counts as shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(hours: f64) -> Result<Self, PolicyError> {
        validate_hours("threshold_hours", hours).map(Self)
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    pub fn minutes(self) -> f64 {
        self.0 * 60.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountingPolicy {
    threshold: Threshold,
    standard_daily_hours: f64,
    absent_day_implicit_vacation: bool,
}

impl AccountingPolicy {
    pub fn new(
        threshold_hours: f64,
        standard_daily_hours: f64,
        absent_day_implicit_vacation: bool,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            threshold: Threshold::new(threshold_hours)?,
            standard_daily_hours: validate_hours("standard_daily_hours", standard_daily_hours)?,
            absent_day_implicit_vacation,
        })
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn standard_daily_hours(&self) -> f64 {
        self.standard_daily_hours
    }

    /// Whether weekdays without any stored record are credited as a vacation day.
    pub fn absent_day_implicit_vacation(&self) -> bool {
        self.absent_day_implicit_vacation
    }
}

fn validate_hours(name: &'static str, value: f64) -> Result<f64, PolicyError> {
    if value.is_nan() || value <= 0.0 {
        return Err(PolicyError::NotPositive { name, value });
    }
    if value > HOURS_PER_DAY {
        return Err(PolicyError::ExceedsDay { name, value });
    }
    Ok(value)
}
