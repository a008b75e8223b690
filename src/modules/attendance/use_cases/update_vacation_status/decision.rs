use crate::modules::attendance::core::vacation_request::{VacationRequest, VacationStatus};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only an admin may approve or reject")]
    AdminOnly,

    #[error("only the owner or an admin may cancel")]
    NotOwner,

    #[error("request is {status}, only pending requests can be decided")]
    NotPending { status: VacationStatus },

    #[error("request is already {status}")]
    AlreadyClosed { status: VacationStatus },
}

pub enum Decision {
    Accepted { request: VacationRequest },
    Rejected { reason: DecideError },
}
