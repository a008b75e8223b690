use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::use_cases::request_vacation::command::RequestVacation;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RequestVacationBody {
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize)]
pub struct RequestVacationResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RequestVacationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RequestVacation {
        request_id: Uuid::now_v7().to_string(),
        actor,
        user_id: body.user_id,
        start_date: body.start_date,
        end_date: body.end_date,
        requested_at: Utc::now(),
    };

    match state.request_vacation.handle(command).await {
        Ok(request) => (
            StatusCode::CREATED,
            Json(RequestVacationResponse { id: request.id }),
        )
            .into_response(),
        Err(error) => application_error_response(error),
    }
}
