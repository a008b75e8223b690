use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::ports::VacationRequestFilter;
use crate::modules::attendance::core::vacation_request::VacationStatus;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListVacationRequestsParams {
    pub user_id: Option<String>,
    pub status: Option<VacationStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ListVacationRequestsParams {
    /// An open end of the range stretches to the edge of the calendar.
    fn into_filter(self) -> Option<VacationRequestFilter> {
        let overlapping = match (self.from, self.to) {
            (None, None) => None,
            (from, to) => {
                let from = from.unwrap_or(NaiveDate::MIN);
                let to = to.unwrap_or(NaiveDate::MAX);
                if from > to {
                    return None;
                }
                Some((from, to))
            }
        };
        Some(VacationRequestFilter {
            user_id: self.user_id,
            status: self.status,
            overlapping,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListVacationRequestsParams>,
) -> impl IntoResponse {
    let Some(filter) = params.into_filter() else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match state.list_vacation_requests.handle(&actor, filter).await {
        Ok(requests) => Json(requests).into_response(),
        Err(error) => application_error_response(error),
    }
}
