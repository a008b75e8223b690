use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::modules::attendance::adapters::outbound::spreadsheet_csv::write_spreadsheet_csv;
use crate::modules::attendance::core::actor::Actor;
use crate::modules::attendance::core::projections::presence_sheet::{
    presence_file_name, presence_rows,
};
use crate::shared::core::month_key::MonthKey;
use crate::shell::http::application_error_response;
use crate::shell::state::AppState;

/// Exactly one of `date` and `month` selects the read.
#[derive(Deserialize)]
pub struct GetAttendanceRecordsParams {
    pub user_id: String,
    pub date: Option<NaiveDate>,
    pub month: Option<MonthKey>,
}

#[derive(Deserialize)]
pub struct PresenceSheetParams {
    pub user_id: String,
    pub month: MonthKey,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<GetAttendanceRecordsParams>,
) -> impl IntoResponse {
    let handler = &state.get_attendance_records;
    match (params.date, params.month) {
        (Some(date), None) => match handler.handle_day(&actor, &params.user_id, date).await {
            Ok(record) => Json(record).into_response(),
            Err(error) => application_error_response(error),
        },
        (None, Some(month)) => match handler.handle_month(&actor, &params.user_id, month).await {
            Ok(records) => Json(records).into_response(),
            Err(error) => application_error_response(error),
        },
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

pub async fn presence_sheet(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<PresenceSheetParams>,
) -> impl IntoResponse {
    let records = match state
        .get_attendance_records
        .handle_month(&actor, &params.user_id, params.month)
        .await
    {
        Ok(records) => records,
        Err(error) => return application_error_response(error),
    };

    match write_spreadsheet_csv(&presence_rows(&records)) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename=\"{}\"",
                        presence_file_name(params.month)
                    ),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "presence sheet rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod get_attendance_records_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::attendance::core::ports::AttendanceRecordStore;
    use crate::modules::attendance::core::projections::presence_sheet::PRESENCE_HEADERS;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::accounting_policy::eight_hour_policy;
    use crate::tests::fixtures::attendance_record::AttendanceRecordBuilder;

    use super::{handle, presence_sheet};

    async fn seeded_state() -> AppState {
        let state = AppState::in_memory(eight_hour_policy());
        state
            .records
            .upsert_record(
                "u-1",
                AttendanceRecordBuilder::new()
                    .work_date(NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"))
                    .morning("08:30", "12:30")
                    .afternoon("13:30", "17:00")
                    .notes("riunione")
                    .build(),
            )
            .await
            .unwrap();
        state
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/attendance-records", get(handle))
            .route("/attendance-records/spreadsheet", get(presence_sheet))
            .with_state(state)
    }

    fn get_as(user: &str, uri: &str) -> Request<Body> {
        Request::get(uri)
            .header("x-user-id", user)
            .header("x-user-role", "user")
            .body(Body::empty())
            .unwrap()
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_raw_day_for_the_editor() {
        let response = app(seeded_state().await)
            .oneshot(get_as("u-1", "/attendance-records?user_id=u-1&date=2025-04-02"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["work_date"], "2025-04-02");
        assert_eq!(json["morning_in"], "08:30");
        assert_eq!(json["afternoon_out"], "17:00");
        assert_eq!(json["notes"], "riunione");
    }

    #[tokio::test]
    async fn it_should_return_an_empty_day_when_nothing_is_stored() {
        let response = app(seeded_state().await)
            .oneshot(get_as("u-1", "/attendance-records?user_id=u-1&date=2025-04-03"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["work_date"], "2025-04-03");
        assert_eq!(json["morning_in"], serde_json::Value::Null);
        assert_eq!(json["is_vacation"], false);
    }

    #[tokio::test]
    async fn it_should_list_the_stored_days_of_a_month() {
        let response = app(seeded_state().await)
            .oneshot(get_as("u-1", "/attendance-records?user_id=u-1&month=2025-04"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["morning_out"], "12:30");
    }

    #[tokio::test]
    async fn it_should_return_400_unless_exactly_one_selector_is_given() {
        let app = app(seeded_state().await);
        for uri in [
            "/attendance-records?user_id=u-1",
            "/attendance-records?user_id=u-1&date=2025-04-02&month=2025-04",
        ] {
            let response = app.clone().oneshot(get_as("u-1", uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn it_should_return_403_for_someone_elses_records() {
        let response = app(seeded_state().await)
            .oneshot(get_as("u-2", "/attendance-records?user_id=u-1&date=2025-04-02"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn it_should_export_the_presence_sheet() {
        let response = app(seeded_state().await)
            .oneshot(get_as(
                "u-1",
                "/attendance-records/spreadsheet?user_id=u-1&month=2025-04",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Presenze_2025-04.csv\""
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], PRESENCE_HEADERS.join(";"));
        assert_eq!(lines[1], "2025-04-02;08:30;12:30;13:30;17:00;riunione");
    }
}
