use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::use_cases::update_vacation_status::command::{
    UpdateVacationStatus, VacationAction,
};
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateVacationStatusBody {
    pub action: VacationAction,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    actor: Actor,
    body: Result<Json<UpdateVacationStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateVacationStatus {
        actor,
        request_id,
        action: body.action,
        updated_at: Utc::now(),
    };

    match state.update_vacation_status.handle(command).await {
        Ok(request) => Json(request).into_response(),
        Err(error) => application_error_response(error),
    }
}
