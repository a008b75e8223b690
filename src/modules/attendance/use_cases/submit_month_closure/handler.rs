use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::modules::attendance::core::period_accounting::PeriodAccounting;
use crate::modules::attendance::core::ports::{AttendanceRecordStore, MonthlyClosureStore};
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::modules::attendance::use_cases::month_summary::handler::compute_month;
use crate::modules::attendance::use_cases::submit_month_closure::command::SubmitMonthClosure;
use crate::modules::attendance::use_cases::submit_month_closure::decide::decide_submit;
use crate::modules::attendance::use_cases::submit_month_closure::decision::{
    DecideError, Decision,
};

/// What the user signed off on: the closure and the month as computed at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedClosure {
    pub closure: MonthlyClosure,
    pub period: PeriodAccounting,
    pub resubmission: bool,
}

pub struct SubmitMonthClosureHandler<TRecords, TClosures>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
    TClosures: MonthlyClosureStore + Send + Sync + 'static,
{
    records: Arc<TRecords>,
    closures: Arc<TClosures>,
    policy: AccountingPolicy,
}

impl<TRecords, TClosures> SubmitMonthClosureHandler<TRecords, TClosures>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
    TClosures: MonthlyClosureStore + Send + Sync + 'static,
{
    pub fn new(records: Arc<TRecords>, closures: Arc<TClosures>, policy: AccountingPolicy) -> Self {
        Self {
            records,
            closures,
            policy,
        }
    }

    pub async fn handle(
        &self,
        command: SubmitMonthClosure,
    ) -> Result<SubmittedClosure, ApplicationError> {
        let actor_id = command.actor.user_id.clone();
        let closure = match decide_submit(command) {
            Decision::Accepted { closure } => closure,
            Decision::Rejected { reason } => {
                warn!(actor = %actor_id, %reason, "month closure rejected");
                return Err(match reason {
                    DecideError::Forbidden => ApplicationError::Forbidden(reason.to_string()),
                    DecideError::FutureMonth { .. } => {
                        ApplicationError::Invalid(reason.to_string())
                    }
                });
            }
        };

        let period =
            compute_month(&*self.records, &self.policy, &closure.user_id, closure.month).await?;
        let resubmission = self
            .closures
            .find_closure(&closure.user_id, closure.month)
            .await?
            .is_some();
        self.closures.upsert_closure(closure.clone()).await?;

        info!(
            user_id = %closure.user_id,
            month = %closure.month,
            resubmission,
            total_hours = period.totals.total_hours,
            "month closure submitted"
        );
        Ok(SubmittedClosure {
            closure,
            period,
            resubmission,
        })
    }
}
