// Daily accounting calculator.
//
// Purpose
// - Turn one day's record (or its absence) into total, overtime, shortfall and
//   vacation hours against the configured threshold.
//
// Responsibilities
// - Absorb every per-day anomaly (missing record, partial or inverted shifts,
//   malformed times) into zeroed fields.
// - Keep overtime and shortfall mutually exclusive.
// - Never perform input or output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::attendance::core::accounting_policy::{Threshold, VACATION_DAY_HOURS};
use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::shared::core::clock_time::minutes_to_hours;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// No record stored for the date.
    Missing,
    /// A record exists and was accounted from its clock events.
    Recorded,
    /// The record is flagged as a vacation day.
    Vacation,
    /// No record stored, credited as vacation by the absent-day policy.
    ImplicitVacation,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Missing => "missing",
            DayStatus::Recorded => "recorded",
            DayStatus::Vacation => "vacation",
            DayStatus::ImplicitVacation => "implicit_vacation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAccounting {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub shortfall_hours: f64,
    pub vacation_hours: f64,
    pub notes: String,
}

impl DayAccounting {
    pub fn missing(date: NaiveDate) -> Self {
        Self::credited(date, DayStatus::Missing, 0.0, String::new())
    }

    pub fn implicit_vacation(date: NaiveDate) -> Self {
        Self::credited(
            date,
            DayStatus::ImplicitVacation,
            VACATION_DAY_HOURS,
            String::new(),
        )
    }

    /// Counts toward the worked-day total.
    pub fn is_worked(&self) -> bool {
        self.total_hours > 0.0 || self.vacation_hours > 0.0
    }

    fn credited(date: NaiveDate, status: DayStatus, hours: f64, notes: String) -> Self {
        Self {
            date,
            status,
            total_hours: 0.0,
            overtime_hours: 0.0,
            shortfall_hours: 0.0,
            vacation_hours: hours,
            notes,
        }
    }
}

pub fn compute_day(
    date: NaiveDate,
    record: Option<&AttendanceRecord>,
    threshold: Threshold,
) -> DayAccounting {
    let Some(record) = record else {
        return DayAccounting::missing(date);
    };

    if record.is_vacation {
        return DayAccounting::credited(
            date,
            DayStatus::Vacation,
            VACATION_DAY_HOURS,
            record.notes.clone(),
        );
    }

    let worked = f64::from(record.worked_minutes());
    let threshold = threshold.minutes();
    let (overtime, shortfall) = if worked == 0.0 || worked == threshold {
        (0.0, 0.0)
    } else if worked > threshold {
        (worked - threshold, 0.0)
    } else {
        (0.0, threshold - worked)
    };

    DayAccounting {
        date,
        status: DayStatus::Recorded,
        total_hours: minutes_to_hours(record.worked_minutes()),
        overtime_hours: overtime / 60.0,
        shortfall_hours: shortfall / 60.0,
        vacation_hours: 0.0,
        notes: record.notes.clone(),
    }
}
