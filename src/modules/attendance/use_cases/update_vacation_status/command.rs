use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::attendance::core::actor::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationAction {
    Approve,
    Reject,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVacationStatus {
    pub actor: Actor,
    pub request_id: String,
    pub action: VacationAction,
    pub updated_at: DateTime<Utc>,
}
