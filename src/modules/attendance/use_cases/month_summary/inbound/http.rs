use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

use crate::modules::attendance::adapters::outbound::spreadsheet_csv::write_spreadsheet_csv;
use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::projections::printable_report::printable_report;
use crate::modules::attendance::core::projections::spreadsheet::{
    spreadsheet_file_name, spreadsheet_rows,
};
use crate::modules::attendance::core::projections::summary_view::summary_view;
use crate::shared::core::month_key::MonthKey;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthSummaryParams {
    pub user_id: String,
    pub month: MonthKey,
}

#[derive(Deserialize)]
pub struct PrintableReportParams {
    pub user_id: String,
    pub month: MonthKey,
    /// Name printed in the title; falls back to the user id.
    pub employee_name: Option<String>,
}

pub async fn summary(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<MonthSummaryParams>,
) -> impl IntoResponse {
    match state
        .month_summary
        .handle(&actor, &params.user_id, params.month)
        .await
    {
        Ok(period) => Json(summary_view(params.month, &period)).into_response(),
        Err(error) => application_error_response(error),
    }
}

pub async fn spreadsheet(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<MonthSummaryParams>,
) -> impl IntoResponse {
    let period = match state
        .month_summary
        .handle(&actor, &params.user_id, params.month)
        .await
    {
        Ok(period) => period,
        Err(error) => return application_error_response(error),
    };

    match write_spreadsheet_csv(&spreadsheet_rows(&period)) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename=\"{}\"",
                        spreadsheet_file_name(params.month)
                    ),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "spreadsheet rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn report(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<PrintableReportParams>,
) -> impl IntoResponse {
    match state
        .month_summary
        .handle(&actor, &params.user_id, params.month)
        .await
    {
        Ok(period) => {
            let employee_name = params
                .employee_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(params.user_id.as_str());
            Json(printable_report(
                employee_name,
                params.month,
                &period,
                state.month_summary.policy(),
            ))
            .into_response()
        }
        Err(error) => application_error_response(error),
    }
}
