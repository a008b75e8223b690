use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::attendance::core::ports::VacationRequestStore;
use crate::modules::attendance::core::vacation_request::VacationRequest;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::modules::attendance::use_cases::request_vacation::command::RequestVacation;
use crate::modules::attendance::use_cases::request_vacation::decide::decide_request;
use crate::modules::attendance::use_cases::request_vacation::decision::{DecideError, Decision};

pub struct RequestVacationHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    requests: Arc<TRequests>,
}

impl<TRequests> RequestVacationHandler<TRequests>
where
    TRequests: VacationRequestStore + Send + Sync + 'static,
{
    pub fn new(requests: Arc<TRequests>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, command: RequestVacation) -> Result<VacationRequest, ApplicationError> {
        let actor_id = command.actor.user_id.clone();
        let request = match decide_request(command) {
            Decision::Accepted { request } => request,
            Decision::Rejected { reason } => {
                warn!(actor = %actor_id, %reason, "vacation request rejected");
                return Err(match reason {
                    DecideError::Forbidden => ApplicationError::Forbidden(reason.to_string()),
                    DecideError::InvalidRange { .. } => {
                        ApplicationError::Invalid(reason.to_string())
                    }
                });
            }
        };

        self.requests.insert_request(request.clone()).await?;
        info!(
            id = %request.id,
            user_id = %request.user_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            "vacation requested"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod request_vacation_handler_tests {
    use super::*;
    use crate::modules::attendance::adapters::outbound::vacation_requests_in_memory::InMemoryVacationRequests;
    use crate::modules::attendance::core::actor::{Actor, Role};
    use crate::modules::attendance::core::ports::StoreError;
    use crate::modules::attendance::core::vacation_request::VacationStatus;
    use chrono::{NaiveDate, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> RequestVacation {
        RequestVacation {
            request_id: "vr-0001".into(),
            actor: Actor::new("u-1", Role::Employee),
            user_id: "u-1".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 11).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 15).expect("valid date"),
            requested_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_request_stores_a_pending_request(command: RequestVacation) {
        let requests = Arc::new(InMemoryVacationRequests::new());
        let handler = RequestVacationHandler::new(requests.clone());
        let request = handler.handle(command).await.expect("handle failed");
        assert_eq!(request.status, VacationStatus::Pending);

        let stored = requests.find_request("vr-0001").await.expect("find failed");
        assert_eq!(stored, Some(request));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_request_fails_on_an_inverted_range(command: RequestVacation) {
        let handler = RequestVacationHandler::new(Arc::new(InMemoryVacationRequests::new()));
        let result = handler
            .handle(RequestVacation {
                start_date: command.end_date,
                end_date: command.start_date,
                ..command
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::Invalid(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_request_fails_on_a_duplicate_id(command: RequestVacation) {
        let handler = RequestVacationHandler::new(Arc::new(InMemoryVacationRequests::new()));
        handler
            .handle(command.clone())
            .await
            .expect("first handle failed");
        let result = handler.handle(command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::Duplicate { .. }))
        ));
    }
}
