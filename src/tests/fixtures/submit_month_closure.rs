// Canonical closure submission: the owner closes April 2025 on 2025-05-02.

use chrono::{TimeZone, Utc};
use rstest::fixture;

use crate::modules::attendance::core::actor::{Actor, Role};
use crate::modules::attendance::use_cases::submit_month_closure::command::SubmitMonthClosure;

#[fixture]
pub fn submit_command() -> SubmitMonthClosure {
    SubmitMonthClosure {
        actor: Actor::new("user-fixed-0001", Role::Employee),
        user_id: "user-fixed-0001".into(),
        month: "2025-04".parse().expect("valid key"),
        submitted_at: Utc
            .with_ymd_and_hms(2025, 5, 2, 17, 30, 0)
            .single()
            .expect("valid instant"),
    }
}
