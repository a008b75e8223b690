use chrono::{DateTime, Utc};

use crate::modules::attendance::core::actor::Actor;
use crate::shared::core::month_key::MonthKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMonthClosure {
    pub actor: Actor,
    pub user_id: String,
    pub month: MonthKey,
    pub submitted_at: DateTime<Utc>,
}
