// Vacation request lifecycle.
//
// Purpose
// - Represent a request for a date range and the status it moves through.
//
// Notes
// - Pending -> Approved | Rejected by an admin.
// - Pending | Approved -> Cancelled by the owner or an admin.
// - Requests never touch attendance records; the per-day vacation flag stays
//   the only input to the vacation credit.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl VacationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "pending",
            VacationStatus::Approved => "approved",
            VacationStatus::Rejected => "rejected",
            VacationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown vacation status {0:?}")]
pub struct UnknownVacationStatus(pub String);

impl FromStr for VacationStatus {
    type Err = UnknownVacationStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(VacationStatus::Pending),
            "approved" => Ok(VacationStatus::Approved),
            "rejected" => Ok(VacationStatus::Rejected),
            "cancelled" => Ok(VacationStatus::Cancelled),
            _ => Err(UnknownVacationStatus(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    pub id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VacationRequest {
    /// Inclusive overlap with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}
