use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::attendance::core::actor::Actor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestVacation {
    pub request_id: String,
    pub actor: Actor,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_at: DateTime<Utc>,
}
