// Canonical policies for tests. The eight hour variants match the month-close
// screen; the four hour threshold matches the printable report.

use rstest::fixture;

use crate::modules::attendance::core::accounting_policy::{AccountingPolicy, Threshold};

#[fixture]
pub fn eight_hour_threshold() -> Threshold {
    Threshold::new(8.0).expect("valid threshold")
}

#[fixture]
pub fn four_hour_threshold() -> Threshold {
    Threshold::new(4.0).expect("valid threshold")
}

#[fixture]
pub fn eight_hour_policy() -> AccountingPolicy {
    AccountingPolicy::new(8.0, 8.0, false).expect("valid policy")
}

#[fixture]
pub fn absent_days_as_vacation_policy() -> AccountingPolicy {
    AccountingPolicy::new(8.0, 8.0, true).expect("valid policy")
}
