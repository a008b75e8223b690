// On-screen month summary: every bucket rendered as `H:MM`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::attendance::core::day_accounting::{DayAccounting, DayStatus};
use crate::modules::attendance::core::period_accounting::{PeriodAccounting, Totals};
use crate::shared::core::clock_time::format_hours_to_clock;
use crate::shared::core::month_key::MonthKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryHours {
    pub total: String,
    pub overtime: String,
    pub shortfall: String,
    pub vacation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub date: NaiveDate,
    pub status: DayStatus,
    #[serde(flatten)]
    pub hours: SummaryHours,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub month: MonthKey,
    pub rows: Vec<SummaryRow>,
    pub totals: SummaryHours,
    pub worked_day_count: u32,
}

pub fn summary_view(month: MonthKey, period: &PeriodAccounting) -> SummaryView {
    SummaryView {
        month,
        rows: period.days.iter().map(summary_row).collect(),
        totals: summary_hours(&period.totals),
        worked_day_count: period.worked_day_count,
    }
}

fn summary_row(day: &DayAccounting) -> SummaryRow {
    SummaryRow {
        date: day.date,
        status: day.status,
        hours: SummaryHours {
            total: format_hours_to_clock(day.total_hours),
            overtime: format_hours_to_clock(day.overtime_hours),
            shortfall: format_hours_to_clock(day.shortfall_hours),
            vacation: format_hours_to_clock(day.vacation_hours),
        },
        notes: day.notes.clone(),
    }
}

/// Period totals as `H:MM`, shared with the closure receipt.
pub fn summary_hours(totals: &Totals) -> SummaryHours {
    SummaryHours {
        total: format_hours_to_clock(totals.total_hours),
        overtime: format_hours_to_clock(totals.overtime_hours),
        shortfall: format_hours_to_clock(totals.shortfall_hours),
        vacation: format_hours_to_clock(totals.vacation_hours),
    }
}
