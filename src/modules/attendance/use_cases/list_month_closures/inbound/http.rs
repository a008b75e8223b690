use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::actor::Actor;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListMonthClosuresParams {
    pub user_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListMonthClosuresParams>,
) -> impl IntoResponse {
    match state
        .list_month_closures
        .handle(&actor, params.user_id.as_deref())
        .await
    {
        Ok(closures) => Json(closures).into_response(),
        Err(error) => application_error_response(error),
    }
}
