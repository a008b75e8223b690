// Shared test fixture for AttendanceRecord.
// Seeded from json/attendance_record.json: an empty Tuesday, 2025-04-01.

use chrono::NaiveDate;
use std::fs;

use crate::modules::attendance::core::attendance_record::AttendanceRecord;

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl Default for AttendanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AttendanceRecordBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/attendance_record.json")
            .expect("read attendance record fixture");
        let inner: AttendanceRecord =
            serde_json::from_str(&json_str).expect("parse attendance record fixture");
        Self { inner }
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn morning(self, enter: impl Into<String>, exit: impl Into<String>) -> Self {
        self.morning_in(enter).morning_out(exit)
    }

    pub fn afternoon(self, enter: impl Into<String>, exit: impl Into<String>) -> Self {
        self.afternoon_in(enter).afternoon_out(exit)
    }

    pub fn morning_in(mut self, v: impl Into<String>) -> Self {
        self.inner.morning_in = Some(v.into());
        self
    }

    pub fn morning_out(mut self, v: impl Into<String>) -> Self {
        self.inner.morning_out = Some(v.into());
        self
    }

    pub fn afternoon_in(mut self, v: impl Into<String>) -> Self {
        self.inner.afternoon_in = Some(v.into());
        self
    }

    pub fn afternoon_out(mut self, v: impl Into<String>) -> Self {
        self.inner.afternoon_out = Some(v.into());
        self
    }

    pub fn vacation(mut self) -> Self {
        self.inner.is_vacation = true;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}

#[cfg(test)]
mod attendance_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AttendanceRecordBuilder::default().build();
        assert_eq!(
            built,
            AttendanceRecord::empty(NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"))
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date");
        let custom = AttendanceRecordBuilder::new()
            .work_date(date)
            .morning("08:00", "12:00")
            .afternoon("13:00", "17:00")
            .vacation()
            .notes("ponte")
            .build();

        assert_eq!(custom.work_date, date);
        assert_eq!(custom.morning_in.as_deref(), Some("08:00"));
        assert_eq!(custom.morning_out.as_deref(), Some("12:00"));
        assert_eq!(custom.afternoon_in.as_deref(), Some("13:00"));
        assert_eq!(custom.afternoon_out.as_deref(), Some("17:00"));
        assert!(custom.is_vacation);
        assert_eq!(custom.notes, "ponte");
    }
}
