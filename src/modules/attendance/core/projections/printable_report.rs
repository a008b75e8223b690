// Printable attendance report ("Riepilogo Presenze").
//
// Purpose
// - Provide the rows a document renderer lays out: per-day hours with empty
//   cells for zero values, a "Sommatoria" totals row, the worked-day count
//   and the standard-hours baseline (worked days times standard daily hours).
// - Apply the absent-day vacation credit when the policy enables it. Only this
//   projection carries the credit; the summary and the spreadsheet keep absent
//   days at zero.
//
// Boundaries
// - No layout, colours or file writing. Those belong to the renderer.

use serde::Serialize;

use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::core::day_accounting::{DayAccounting, DayStatus};
use crate::modules::attendance::core::period_accounting::PeriodAccounting;
use crate::shared::core::clock_time::format_hours_to_clock;
use crate::shared::core::italian_calendar::{is_weekend, long_date, month_label};
use crate::shared::core::month_key::MonthKey;

pub const PRINTABLE_HEADERS: [&str; 5] = ["Data", "Totale", "Straord.", "Ferie", "Permessi"];
pub const TOTALS_LABEL: &str = "Sommatoria";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintableRow {
    pub label: String,
    pub total: String,
    pub overtime: String,
    pub vacation: String,
    pub shortfall: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintableReport {
    pub title: String,
    pub period_label: String,
    pub file_name: String,
    pub headers: [&'static str; 5],
    pub rows: Vec<PrintableRow>,
    pub totals: PrintableRow,
    pub worked_day_count: u32,
    pub standard_daily_hours: f64,
    pub standard_hours_baseline: f64,
    pub standard_hours_baseline_label: String,
}

pub fn printable_report(
    employee_name: &str,
    month: MonthKey,
    period: &PeriodAccounting,
    policy: &AccountingPolicy,
) -> PrintableReport {
    let credited = policy
        .absent_day_implicit_vacation()
        .then(|| credit_absent_weekdays(period));
    let period = credited.as_ref().unwrap_or(period);
    let totals = &period.totals;
    let standard_hours_baseline = f64::from(period.worked_day_count) * policy.standard_daily_hours();

    PrintableReport {
        title: format!("Riepilogo Presenze: {employee_name}"),
        period_label: month_label(month),
        file_name: report_file_name(employee_name, month),
        headers: PRINTABLE_HEADERS,
        rows: period.days.iter().map(day_row).collect(),
        totals: PrintableRow {
            label: TOTALS_LABEL.to_string(),
            total: format_hours_to_clock(totals.total_hours),
            overtime: format_hours_to_clock(totals.overtime_hours),
            vacation: format_hours_to_clock(totals.vacation_hours),
            shortfall: format_hours_to_clock(totals.shortfall_hours),
        },
        worked_day_count: period.worked_day_count,
        standard_daily_hours: policy.standard_daily_hours(),
        standard_hours_baseline,
        standard_hours_baseline_label: format_hours_to_clock(standard_hours_baseline),
    }
}

/// Turns every weekday without a stored record into a full vacation day.
/// Stored records, including empty ones, are left as computed.
pub fn credit_absent_weekdays(period: &PeriodAccounting) -> PeriodAccounting {
    PeriodAccounting::from_days(
        period
            .days
            .iter()
            .map(|day| match day.status {
                DayStatus::Missing if !is_weekend(day.date) => {
                    DayAccounting::implicit_vacation(day.date)
                }
                _ => day.clone(),
            })
            .collect(),
    )
}

fn day_row(day: &DayAccounting) -> PrintableRow {
    PrintableRow {
        label: long_date(day.date),
        total: blank_when_zero(day.total_hours),
        overtime: blank_when_zero(day.overtime_hours),
        vacation: blank_when_zero(day.vacation_hours),
        shortfall: blank_when_zero(day.shortfall_hours),
    }
}

fn blank_when_zero(hours: f64) -> String {
    if hours > 0.0 {
        format_hours_to_clock(hours)
    } else {
        String::new()
    }
}

fn report_file_name(employee_name: &str, month: MonthKey) -> String {
    let name = employee_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Ponto_{name}_{:02}_{}.pdf", month.month(), month.year())
}
