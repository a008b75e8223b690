use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::attendance_record::AttendanceRecord;

/// Replace one user's record for `record.work_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAttendance {
    pub actor: Actor,
    pub user_id: String,
    pub record: AttendanceRecord,
}
