// Ports define what the attendance core needs from persistence, without implementing it.
//
// Purpose
// - Describe the record, closure and vacation-request stores as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
// - Atomicity of a single upsert is the store's concern, not the engine's.
//
// Testing guidance
// - Use the in memory adapters for handler tests and local development.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::modules::attendance::core::monthly_closure::MonthlyClosure;
use crate::modules::attendance::core::vacation_request::{VacationRequest, VacationStatus};
use crate::shared::core::month_key::MonthKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key: {key}")]
    Duplicate { key: String },

    #[error("not found: {key}")]
    NotFound { key: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AttendanceRecordStore: Send + Sync {
    /// Records for `user_id` with `from <= work_date <= to`, ordered by date.
    async fn fetch_records(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    async fn find_record(
        &self,
        user_id: &str,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    /// Insert or replace the record keyed by (user_id, work_date).
    async fn upsert_record(&self, user_id: &str, record: AttendanceRecord)
    -> Result<(), StoreError>;
}

#[async_trait]
pub trait MonthlyClosureStore: Send + Sync {
    /// Insert or replace the closure keyed by (user_id, month).
    async fn upsert_closure(&self, closure: MonthlyClosure) -> Result<(), StoreError>;

    async fn find_closure(
        &self,
        user_id: &str,
        month: MonthKey,
    ) -> Result<Option<MonthlyClosure>, StoreError>;

    /// Newest submission first. `None` lists every user.
    async fn list_closures(&self, user_id: Option<&str>)
    -> Result<Vec<MonthlyClosure>, StoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationRequestFilter {
    pub user_id: Option<String>,
    pub status: Option<VacationStatus>,
    /// Inclusive range the request must overlap.
    pub overlapping: Option<(NaiveDate, NaiveDate)>,
}

impl VacationRequestFilter {
    pub fn matches(&self, request: &VacationRequest) -> bool {
        self.user_id
            .as_deref()
            .is_none_or(|user_id| request.user_id == user_id)
            && self.status.is_none_or(|status| request.status == status)
            && self
                .overlapping
                .is_none_or(|(from, to)| request.overlaps(from, to))
    }
}

#[async_trait]
pub trait VacationRequestStore: Send + Sync {
    async fn insert_request(&self, request: VacationRequest) -> Result<(), StoreError>;

    async fn find_request(&self, id: &str) -> Result<Option<VacationRequest>, StoreError>;

    /// Replace an existing request. Unknown ids fail with NotFound.
    async fn update_request(&self, request: VacationRequest) -> Result<(), StoreError>;

    /// Newest request first.
    async fn list_requests(
        &self,
        filter: &VacationRequestFilter,
    ) -> Result<Vec<VacationRequest>, StoreError>;
}
