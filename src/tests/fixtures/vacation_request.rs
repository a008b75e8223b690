// Shared test fixture for VacationRequest.
// Seeded from json/vacation_request.json: a pending request for 2025-08-11 ..= 2025-08-20.

use rstest::fixture;
use std::fs;

use crate::modules::attendance::core::vacation_request::VacationRequest;

#[fixture]
pub fn pending_request() -> VacationRequest {
    let json_str = fs::read_to_string("./src/tests/fixtures/json/vacation_request.json")
        .expect("read vacation request fixture");
    serde_json::from_str(&json_str).expect("parse vacation request fixture")
}
