use std::sync::Arc;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::modules::attendance::core::ports::MonthlyClosureStore;
use crate::modules::attendance::use_cases::application_error::ApplicationError;

pub struct ListMonthClosuresHandler<TClosures>
where
    TClosures: MonthlyClosureStore + Send + Sync + 'static,
{
    closures: Arc<TClosures>,
}

impl<TClosures> ListMonthClosuresHandler<TClosures>
where
    TClosures: MonthlyClosureStore + Send + Sync + 'static,
{
    pub fn new(closures: Arc<TClosures>) -> Self {
        Self { closures }
    }

    /// Admins see every closure unless they narrow to one user; employees see their own.
    pub async fn handle(
        &self,
        actor: &Actor,
        user_id: Option<&str>,
    ) -> Result<Vec<MonthlyClosure>, ApplicationError> {
        let scope = match user_id {
            Some(user_id) if !actor.can_act_for(user_id) => {
                return Err(ApplicationError::cannot_act_for(&actor.user_id, user_id));
            }
            Some(user_id) => Some(user_id),
            None if actor.is_admin() => None,
            None => Some(actor.user_id.as_str()),
        };
        Ok(self.closures.list_closures(scope).await?)
    }
}
