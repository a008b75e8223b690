// In memory implementation of the AttendanceRecordStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep one record per (user_id, work_date); upserts replace.
// - Return range reads ordered by date.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::modules::attendance::core::ports::{AttendanceRecordStore, StoreError};

#[derive(Default)]
pub struct InMemoryAttendanceRecords {
    inner: RwLock<BTreeMap<(String, NaiveDate), AttendanceRecord>>,
    is_offline: bool,
}

impl InMemoryAttendanceRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Attendance store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AttendanceRecordStore for InMemoryAttendanceRecords {
    async fn fetch_records(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        if from > to {
            return Ok(Vec::new());
        }
        let guard = self.inner.read().await;
        let range = (user_id.to_string(), from)..=(user_id.to_string(), to);
        Ok(guard.range(range).map(|(_, record)| record.clone()).collect())
    }

    async fn find_record(
        &self,
        user_id: &str,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(&(user_id.to_string(), work_date)).cloned())
    }

    async fn upsert_record(
        &self,
        user_id: &str,
        record: AttendanceRecord,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.insert((user_id.to_string(), record.work_date), record);
        Ok(())
    }
}
