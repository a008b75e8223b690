use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::attendance::core::accounting_policy::AccountingPolicy;
use crate::modules::attendance::core::day_accounting::{DayAccounting, compute_day};
use crate::modules::attendance::core::ports::AttendanceRecordStore;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;

pub struct RecordAttendanceHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    records: Arc<TRecords>,
    policy: AccountingPolicy,
}

impl<TRecords> RecordAttendanceHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    pub fn new(records: Arc<TRecords>, policy: AccountingPolicy) -> Self {
        Self { records, policy }
    }

    /// Stores the record and returns the day as every export will show it.
    pub async fn handle(&self, command: RecordAttendance) -> Result<DayAccounting, ApplicationError> {
        let RecordAttendance {
            actor,
            user_id,
            record,
        } = command;

        if !actor.can_act_for(&user_id) {
            warn!(actor = %actor.user_id, %user_id, "record attendance rejected");
            return Err(ApplicationError::cannot_act_for(&actor.user_id, &user_id));
        }

        let day = compute_day(record.work_date, Some(&record), self.policy.threshold());
        let work_date = record.work_date;
        self.records.upsert_record(&user_id, record).await?;

        info!(%user_id, %work_date, total_hours = day.total_hours, "attendance recorded");
        Ok(day)
    }
}
