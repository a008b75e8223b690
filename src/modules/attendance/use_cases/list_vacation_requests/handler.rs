use std::sync::Arc;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::ports::{VacationRequestFilter, VacationRequestStore};
use crate::modules::attendance::core::vacation_request::VacationRequest;
use crate::modules::attendance::use_cases::application_error::ApplicationError;

pub struct ListVacationRequestsHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    requests: Arc<TRequests>,
}

impl<TRequests> ListVacationRequestsHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    pub fn new(requests: Arc<TRequests>) -> Self {
        Self { requests }
    }

    /// Employees are always scoped to their own requests.
    pub async fn handle(
        &self,
        actor: &Actor,
        mut filter: VacationRequestFilter,
    ) -> Result<Vec<VacationRequest>, ApplicationError> {
        match filter.user_id.as_deref() {
            Some(user_id) if !actor.can_act_for(user_id) => {
                return Err(ApplicationError::cannot_act_for(&actor.user_id, user_id));
            }
            None if !actor.is_admin() => filter.user_id = Some(actor.user_id.clone()),
            _ => {}
        }
        Ok(self.requests.list_requests(&filter).await?)
    }
}
