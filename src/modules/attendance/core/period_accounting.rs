// Period aggregator.
//
// Purpose
// - Produce one DayAccounting per requested date and the field-wise totals.
//
// Responsibilities
// - Be the single place where records become hour buckets, so the live editor,
//   the month summary, the spreadsheet and the printable report agree.
// - Leave absent dates at zero. The absent-day vacation credit is a printable
//   report option and never reaches the summary or the spreadsheet.
// - Stay pure: identical inputs give identical output.

use std::collections::HashMap;
use std::iter::Sum;

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::modules::attendance::core::day_accounting::{DayAccounting, compute_day};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub shortfall_hours: f64,
    pub vacation_hours: f64,
}

impl<'a> Sum<&'a DayAccounting> for Totals {
    fn sum<I: Iterator<Item = &'a DayAccounting>>(days: I) -> Self {
        days.fold(Totals::default(), |acc, day| Totals {
            total_hours: acc.total_hours + day.total_hours,
            overtime_hours: acc.overtime_hours + day.overtime_hours,
            shortfall_hours: acc.shortfall_hours + day.shortfall_hours,
            vacation_hours: acc.vacation_hours + day.vacation_hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAccounting {
    pub days: Vec<DayAccounting>,
    pub totals: Totals,
    pub worked_day_count: u32,
}

impl PeriodAccounting {
    /// Sums the days and counts the worked ones.
    pub fn from_days(days: Vec<DayAccounting>) -> Self {
        let totals = days.iter().sum();
        let worked_day_count = days.iter().filter(|day| day.is_worked()).count() as u32;
        Self {
            days,
            totals,
            worked_day_count,
        }
    }
}

pub fn compute_period(
    days: &[NaiveDate],
    records_by_date: &HashMap<NaiveDate, AttendanceRecord>,
    policy: &AccountingPolicy,
) -> PeriodAccounting {
    PeriodAccounting::from_days(
        days.iter()
            .map(|&date| compute_day(date, records_by_date.get(&date), policy.threshold()))
            .collect(),
    )
}

/// Keys records by their work date. A later record for the same date wins.
pub fn index_by_date(
    records: impl IntoIterator<Item = AttendanceRecord>,
) -> HashMap<NaiveDate, AttendanceRecord> {
    records
        .into_iter()
        .map(|record| (record.work_date, record))
        .collect()
}
