// Month-closure spreadsheet rows.
//
// Purpose
// - Shape the period into the month-closure sheet: one row per day with
//   Italian column headers and a trailing TOTALE row equal to the period totals.
//
// Notes
// - Hours are decimal with two places, as the sheet has always been exported.
// - Field renames double as the header row when the rows are written as CSV.

use chrono::Datelike;
use serde::Serialize;

use crate::modules::attendance::core::day_accounting::DayAccounting;
use crate::modules::attendance::core::period_accounting::PeriodAccounting;
use crate::shared::core::italian_calendar::weekday_abbreviation;
use crate::shared::core::month_key::MonthKey;

pub const TOTALS_LABEL: &str = "TOTALE";
pub const SPREADSHEET_HEADERS: [&str; 7] = [
    "Data",
    "Giorno",
    "Ore Totali",
    "Straordinario",
    "Permesso",
    "Ferie",
    "Note",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadsheetRow {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Giorno")]
    pub day_name: String,
    #[serde(rename = "Ore Totali")]
    pub total: String,
    #[serde(rename = "Straordinario")]
    pub overtime: String,
    #[serde(rename = "Permesso")]
    pub shortfall: String,
    #[serde(rename = "Ferie")]
    pub vacation: String,
    #[serde(rename = "Note")]
    pub notes: String,
}

pub fn spreadsheet_rows(period: &PeriodAccounting) -> Vec<SpreadsheetRow> {
    let totals = &period.totals;
    period
        .days
        .iter()
        .map(day_row)
        .chain(std::iter::once(SpreadsheetRow {
            date: TOTALS_LABEL.to_string(),
            day_name: String::new(),
            total: decimal_hours(totals.total_hours),
            overtime: decimal_hours(totals.overtime_hours),
            shortfall: decimal_hours(totals.shortfall_hours),
            vacation: decimal_hours(totals.vacation_hours),
            notes: String::new(),
        }))
        .collect()
}

pub fn spreadsheet_file_name(month: MonthKey) -> String {
    format!("Chiusura_{month}.csv")
}

fn day_row(day: &DayAccounting) -> SpreadsheetRow {
    SpreadsheetRow {
        date: format!("{:02}/{:02}", day.date.day(), day.date.month()),
        day_name: weekday_abbreviation(day.date.weekday()).to_string(),
        total: decimal_hours(day.total_hours),
        overtime: decimal_hours(day.overtime_hours),
        shortfall: decimal_hours(day.shortfall_hours),
        vacation: decimal_hours(day.vacation_hours),
        notes: day.notes.clone(),
    }
}

fn decimal_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
