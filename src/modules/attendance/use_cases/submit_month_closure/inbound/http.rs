use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::projections::summary_view::{SummaryHours, summary_hours};
use crate::modules::attendance::use_cases::submit_month_closure::command::SubmitMonthClosure;
use crate::modules::attendance::use_cases::submit_month_closure::handler::SubmittedClosure;
use crate::shared::core::month_key::MonthKey;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitMonthClosureBody {
    pub user_id: String,
    pub month: MonthKey,
}

#[derive(Serialize)]
pub struct SubmitMonthClosureResponse {
    pub user_id: String,
    pub month: MonthKey,
    pub submitted_at: DateTime<Utc>,
    pub resubmission: bool,
    pub totals: SummaryHours,
    pub worked_day_count: u32,
}

impl From<SubmittedClosure> for SubmitMonthClosureResponse {
    fn from(v: SubmittedClosure) -> Self {
        Self {
            user_id: v.closure.user_id,
            month: v.closure.month,
            submitted_at: v.closure.submitted_at,
            resubmission: v.resubmission,
            totals: summary_hours(&v.period.totals),
            worked_day_count: v.period.worked_day_count,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<SubmitMonthClosureBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitMonthClosure {
        actor,
        user_id: body.user_id,
        month: body.month,
        submitted_at: Utc::now(),
    };

    match state.submit_month_closure.handle(command).await {
        Ok(submitted) => {
            let status = if submitted.resubmission {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            (status, Json(SubmitMonthClosureResponse::from(submitted))).into_response()
        }
        Err(error) => application_error_response(error),
    }
}
