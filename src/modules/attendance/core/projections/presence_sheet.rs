// Raw presence sheet ("Presenze").
//
// Purpose
// - List a month's stored records as entered: the date, the four clock events
//   and the note. No hours are derived here.
//
// Notes
// - Only stored days appear. Unset clock events are empty cells.

use serde::Serialize;

use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::shared::core::month_key::MonthKey;

pub const PRESENCE_HEADERS: [&str; 6] = [
    "Data",
    "Entrata Mattina",
    "Uscita Mattina",
    "Entrata Pomeriggio",
    "Uscita Pomeriggio",
    "Note",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceRow {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Entrata Mattina")]
    pub morning_in: String,
    #[serde(rename = "Uscita Mattina")]
    pub morning_out: String,
    #[serde(rename = "Entrata Pomeriggio")]
    pub afternoon_in: String,
    #[serde(rename = "Uscita Pomeriggio")]
    pub afternoon_out: String,
    #[serde(rename = "Note")]
    pub notes: String,
}

impl From<&AttendanceRecord> for PresenceRow {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.work_date.format("%Y-%m-%d").to_string(),
            morning_in: record.morning_in.clone().unwrap_or_default(),
            morning_out: record.morning_out.clone().unwrap_or_default(),
            afternoon_in: record.afternoon_in.clone().unwrap_or_default(),
            afternoon_out: record.afternoon_out.clone().unwrap_or_default(),
            notes: record.notes.clone(),
        }
    }
}

pub fn presence_rows(records: &[AttendanceRecord]) -> Vec<PresenceRow> {
    records.iter().map(PresenceRow::from).collect()
}

pub fn presence_file_name(month: MonthKey) -> String {
    format!("Presenze_{month}.csv")
}
