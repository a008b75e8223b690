// A user's marker that a month's accounting is finalized for review.
//
// Notes
// - One per (user_id, month). Re-submission replaces submitted_at only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::month_key::MonthKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyClosure {
    pub user_id: String,
    pub month: MonthKey,
    pub submitted_at: DateTime<Utc>,
}

impl MonthlyClosure {
    pub fn key(&self) -> (String, MonthKey) {
        (self.user_id.clone(), self.month)
    }
}
