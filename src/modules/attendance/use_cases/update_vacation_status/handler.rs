use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::attendance::core::ports::VacationRequestStore;
use crate::modules::attendance::core::vacation_request::VacationRequest;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::modules::attendance::use_cases::update_vacation_status::command::UpdateVacationStatus;
use crate::modules::attendance::use_cases::update_vacation_status::decide::decide_transition;
use crate::modules::attendance::use_cases::update_vacation_status::decision::{
    DecideError, Decision,
};

pub struct UpdateVacationStatusHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    requests: Arc<TRequests>,
}

impl<TRequests> UpdateVacationStatusHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    pub fn new(requests: Arc<TRequests>) -> Self {
        Self { requests }
    }

    pub async fn handle(
        &self,
        command: UpdateVacationStatus,
    ) -> Result<VacationRequest, ApplicationError> {
        let Some(current) = self.requests.find_request(&command.request_id).await? else {
            return Err(ApplicationError::NotFound(format!(
                "vacation request {}",
                command.request_id
            )));
        };

        let updated = match decide_transition(&current, &command) {
            Decision::Accepted { request } => request,
            Decision::Rejected { reason } => {
                warn!(
                    actor = %command.actor.user_id,
                    id = %command.request_id,
                    %reason,
                    "vacation status change rejected"
                );
                return Err(match reason {
                    DecideError::AdminOnly | DecideError::NotOwner => {
                        ApplicationError::Forbidden(reason.to_string())
                    }
                    DecideError::NotPending { .. } | DecideError::AlreadyClosed { .. } => {
                        ApplicationError::Domain(reason.to_string())
                    }
                });
            }
        };

        self.requests.update_request(updated.clone()).await?;
        info!(
            id = %updated.id,
            from = %current.status,
            to = %updated.status,
            actor = %command.actor.user_id,
            "vacation status changed"
        );
        Ok(updated)
    }
}
