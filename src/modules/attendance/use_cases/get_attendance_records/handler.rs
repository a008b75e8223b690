// Attendance read-back.
//
// Purpose
// - Hand the stored clock events back to the daily editor and to the history
//   view, exactly as they were recorded.
//
// Notes
// - A day with nothing stored reads as an empty record for that date so the
//   editor always has a form to fill.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::warn;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::modules::attendance::core::ports::AttendanceRecordStore;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::shared::core::month_key::MonthKey;

pub struct GetAttendanceRecordsHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    records: Arc<TRecords>,
}

impl<TRecords> GetAttendanceRecordsHandler<TRecords>
where
    TRecords: AttendanceRecordStore + Send + Sync + 'static,
{
    pub fn new(records: Arc<TRecords>) -> Self {
        Self { records }
    }

    pub async fn handle_day(
        &self,
        actor: &Actor,
        user_id: &str,
        work_date: NaiveDate,
    ) -> Result<AttendanceRecord, ApplicationError> {
        ensure_can_read(actor, user_id)?;
        let record = self.records.find_record(user_id, work_date).await?;
        Ok(record.unwrap_or_else(|| AttendanceRecord::empty(work_date)))
    }

    /// Only stored days, ordered by date.
    pub async fn handle_month(
        &self,
        actor: &Actor,
        user_id: &str,
        month: MonthKey,
    ) -> Result<Vec<AttendanceRecord>, ApplicationError> {
        ensure_can_read(actor, user_id)?;
        Ok(self
            .records
            .fetch_records(user_id, month.first_day(), month.last_day())
            .await?)
    }
}

fn ensure_can_read(actor: &Actor, user_id: &str) -> Result<(), ApplicationError> {
    if actor.can_act_for(user_id) {
        return Ok(());
    }
    warn!(actor = %actor.user_id, %user_id, "attendance read rejected");
    Err(ApplicationError::cannot_act_for(&actor.user_id, user_id))
}
