// One user's attendance for one calendar date.
//
// Purpose
// - Hold the four clock events of the two-shift day as the store returns them.
//
// Notes
// - Clock fields are kept as raw strings. Decoding happens on read so that a
//   malformed value only zeroes its half-shift instead of rejecting the row.
// - When `is_vacation` is set the clock fields are ignored for accounting.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::core::clock_time::parse_clock_minutes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub work_date: NaiveDate,
    #[serde(default)]
    pub morning_in: Option<String>,
    #[serde(default)]
    pub morning_out: Option<String>,
    #[serde(default)]
    pub afternoon_in: Option<String>,
    #[serde(default)]
    pub afternoon_out: Option<String>,
    #[serde(default)]
    pub is_vacation: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

/// Stores hand back `null` for a day without notes.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl AttendanceRecord {
    pub fn empty(work_date: NaiveDate) -> Self {
        Self {
            work_date,
            morning_in: None,
            morning_out: None,
            afternoon_in: None,
            afternoon_out: None,
            is_vacation: false,
            notes: String::new(),
        }
    }

    /// Worked minutes of the morning shift; zero unless both ends decode.
    pub fn morning_minutes(&self) -> u32 {
        shift_minutes(self.morning_in.as_deref(), self.morning_out.as_deref())
    }

    pub fn afternoon_minutes(&self) -> u32 {
        shift_minutes(self.afternoon_in.as_deref(), self.afternoon_out.as_deref())
    }

    pub fn worked_minutes(&self) -> u32 {
        self.morning_minutes() + self.afternoon_minutes()
    }
}

fn shift_minutes(enter: Option<&str>, exit: Option<&str>) -> u32 {
    match (
        enter.and_then(parse_clock_minutes),
        exit.and_then(parse_clock_minutes),
    ) {
        (Some(enter), Some(exit)) => exit.saturating_sub(enter),
        _ => 0,
    }
}
