use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::attendance_record::AttendanceRecord;
use crate::modules::attendance::use_cases::record_attendance::command::RecordAttendance;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordAttendanceBody {
    pub user_id: String,
    #[serde(flatten)]
    pub record: AttendanceRecord,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RecordAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordAttendance {
        actor,
        user_id: body.user_id,
        record: body.record,
    };

    match state.record_attendance.handle(command).await {
        Ok(day) => Json(day).into_response(),
        Err(error) => application_error_response(error),
    }
}
