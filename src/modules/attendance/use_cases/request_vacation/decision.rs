use chrono::NaiveDate;

use crate::modules::attendance::core::vacation_request::VacationRequest;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("actor may not request vacation for this user")]
    Forbidden,

    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

pub enum Decision {
    Accepted { request: VacationRequest },
    Rejected { reason: DecideError },
}
