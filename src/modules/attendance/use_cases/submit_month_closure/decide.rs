use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::modules::attendance::use_cases::submit_month_closure::{
    command::SubmitMonthClosure,
    decision::{DecideError, Decision},
};
use crate::shared::core::month_key::MonthKey;

pub fn decide_submit(command: SubmitMonthClosure) -> Decision {
    if !command.actor.can_act_for(&command.user_id) {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    }
    if command.month > MonthKey::of(command.submitted_at.date_naive()) {
        return Decision::Rejected {
            reason: DecideError::FutureMonth {
                month: command.month,
            },
        };
    }
    Decision::Accepted {
        closure: MonthlyClosure {
            user_id: command.user_id,
            month: command.month,
            submitted_at: command.submitted_at,
        },
    }
}
