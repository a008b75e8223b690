use thiserror::Error;

use crate::modules::attendance::core::ports::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn cannot_act_for(actor_id: &str, user_id: &str) -> Self {
        ApplicationError::Forbidden(format!("{actor_id} may not act for {user_id}"))
    }
}
