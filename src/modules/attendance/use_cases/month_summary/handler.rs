// Month summary query.
//
// Purpose
// - Load a user's records for one calendar month and run the period aggregator
//   over every day of it. The summary view, the spreadsheet and the printable
//   report are all projections of the returned PeriodAccounting.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::period_accounting::{
    PeriodAccounting, compute_period, index_by_date,
};
use crate::modules::attendance::core::ports::AttendanceRecordStore;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::shared::core::month_key::MonthKey;

pub struct MonthSummaryHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    records: Arc<TRecords>,
    policy: AccountingPolicy,
}

impl<TRecords> MonthSummaryHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    pub fn new(records: Arc<TRecords>, policy: AccountingPolicy) -> Self {
        Self { records, policy }
    }

    pub fn policy(&self) -> &AccountingPolicy {
        &self.policy
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        user_id: &str,
        month: MonthKey,
    ) -> Result<PeriodAccounting, ApplicationError> {
        if !actor.can_act_for(user_id) {
            warn!(actor = %actor.user_id, %user_id, %month, "month summary rejected");
            return Err(ApplicationError::cannot_act_for(&actor.user_id, user_id));
        }
        compute_month(&*self.records, &self.policy, user_id, month).await
    }
}

/// Shared with the closure submission so the receipt matches the summary.
pub async fn compute_month<TRecords>(
    records: &TRecords,
    policy: &AccountingPolicy,
    user_id: &str,
    month: MonthKey,
) -> Result<PeriodAccounting, ApplicationError>
where
    TRecords: AttendanceRecordStore + ?Sized,
{
    let rows = records
        .fetch_records(user_id, month.first_day(), month.last_day())
        .await?;
    let period = compute_period(&month.days(), &index_by_date(rows), policy);
    debug!(
        %user_id,
        %month,
        total_hours = period.totals.total_hours,
        overtime_hours = period.totals.overtime_hours,
        shortfall_hours = period.totals.shortfall_hours,
        vacation_hours = period.totals.vacation_hours,
        worked_days = period.worked_day_count,
        "period computed"
    );
    Ok(period)
}
