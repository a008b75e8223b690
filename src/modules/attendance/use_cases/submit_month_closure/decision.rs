use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::shared::core::month_key::MonthKey;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("actor may not close the month for this user")]
    Forbidden,

    #[error("month {month} has not started yet")]
    FutureMonth { month: MonthKey },
}

pub enum Decision {
    Accepted { closure: MonthlyClosure },
    Rejected { reason: DecideError },
}
