use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tracing::error;

use crate::modules::attendance::core::ports::StoreError;
use crate::modules::attendance::use_cases::application_error::ApplicationError;
use crate::modules::attendance::use_cases::get_attendance_records::inbound::http as get_records_http;
use crate::modules::attendance::use_cases::list_month_closures::inbound::http as list_closures_http;
use crate::modules::attendance::use_cases::list_vacation_requests::inbound::http as list_vacations_http;
use crate::modules::attendance::use_cases::month_summary::inbound::http as month_summary_http;
use crate::modules::attendance::use_cases::record_attendance::inbound::http as record_http;
use crate::modules::attendance::use_cases::request_vacation::inbound::http as request_vacation_http;
use crate::modules::attendance::use_cases::submit_month_closure::inbound::http as submit_closure_http;
use crate::modules::attendance::use_cases::update_vacation_status::inbound::http as update_vacation_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/attendance-records",
            put(record_http::handle).get(get_records_http::handle),
        )
        .route(
            "/attendance-records/spreadsheet",
            get(get_records_http::presence_sheet),
        )
        .route("/month-summary", get(month_summary_http::summary))
        .route(
            "/month-summary/spreadsheet",
            get(month_summary_http::spreadsheet),
        )
        .route("/month-summary/report", get(month_summary_http::report))
        .route(
            "/month-closures",
            post(submit_closure_http::handle).get(list_closures_http::handle),
        )
        .route(
            "/vacation-requests",
            post(request_vacation_http::handle).get(list_vacations_http::handle),
        )
        .route(
            "/vacation-requests/{id}/status",
            post(update_vacation_http::handle),
        )
        .with_state(state)
}

pub fn application_error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Store(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Store(StoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %error, "request failed");
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
