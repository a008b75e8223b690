// Month-close flow through the composed router and schema.
//
// An employee records three April days, reads the month back as summary,
// spreadsheet and printable report, then closes it. All four views must
// carry the same totals.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::attendance::core::actor::{Actor, Role};
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::accounting_policy::{absent_days_as_vacation_policy, eight_hour_policy};

const EMPLOYEE: &str = "emp-7";

#[fixture]
fn state() -> AppState {
    AppState::in_memory(eight_hour_policy())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", EMPLOYEE)
        .header("x-user-role", "employee");
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn record_april(app: &Router) {
    for day in [
        json!({
            "user_id": EMPLOYEE,
            "work_date": "2025-04-01",
            "morning_in": "08:00",
            "morning_out": "12:00",
            "afternoon_in": "13:00",
            "afternoon_out": "18:00",
        }),
        json!({
            "user_id": EMPLOYEE,
            "work_date": "2025-04-02",
            "morning_in": "08:00",
            "morning_out": "12:00",
            "afternoon_in": "13:00",
            "afternoon_out": "15:00",
            "notes": "dentista",
        }),
        json!({
            "user_id": EMPLOYEE,
            "work_date": "2025-04-03",
            "is_vacation": true,
        }),
    ] {
        let (status, _) = send(app, request("PUT", "/attendance-records", Some(day))).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[rstest]
#[tokio::test]
async fn it_should_agree_on_totals_across_every_month_view(state: AppState) {
    let app = router(state);
    record_april(&app).await;

    let (status, bytes) = send(
        &app,
        request("GET", &format!("/month-summary?user_id={EMPLOYEE}&month=2025-04"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let summary: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(summary["rows"].as_array().unwrap().len(), 30);
    assert_eq!(
        summary["totals"],
        json!({ "total": "15:00", "overtime": "1:00", "shortfall": "2:00", "vacation": "8:00" })
    );
    assert_eq!(summary["worked_day_count"], 3);

    let (status, bytes) = send(
        &app,
        request(
            "GET",
            &format!("/month-summary/spreadsheet?user_id={EMPLOYEE}&month=2025-04"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let csv = String::from_utf8(bytes).unwrap();
    assert!(csv.contains("02/04;mer;6.00;0.00;2.00;0.00;dentista"));
    assert_eq!(csv.lines().last(), Some("TOTALE;;15.00;1.00;2.00;8.00;"));

    let (status, bytes) = send(
        &app,
        request(
            "GET",
            &format!("/month-summary/report?user_id={EMPLOYEE}&month=2025-04&employee_name=Anna%20Rossi"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report["title"], "Riepilogo Presenze: Anna Rossi");
    assert_eq!(report["totals"]["total"], summary["totals"]["total"]);
    assert_eq!(report["totals"]["overtime"], summary["totals"]["overtime"]);
    assert_eq!(report["totals"]["shortfall"], summary["totals"]["shortfall"]);
    assert_eq!(report["totals"]["vacation"], summary["totals"]["vacation"]);
    assert_eq!(report["standard_hours_baseline_label"], "24:00");

    let close = json!({ "user_id": EMPLOYEE, "month": "2025-04" });
    let (status, bytes) = send(&app, request("POST", "/month-closures", Some(close.clone()))).await;
    assert_eq!(status, StatusCode::CREATED);
    let receipt: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(receipt["totals"], summary["totals"]);
    assert_eq!(receipt["worked_day_count"], 3);
    assert_eq!(receipt["resubmission"], false);

    let (status, bytes) = send(&app, request("POST", "/month-closures", Some(close))).await;
    assert_eq!(status, StatusCode::OK);
    let receipt: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(receipt["resubmission"], true);

    let (status, bytes) = send(&app, request("GET", "/month-closures", None)).await;
    assert_eq!(status, StatusCode::OK);
    let closures: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(closures.as_array().unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_credit_absent_weekdays_only_on_the_printable_report() {
    let app = router(AppState::in_memory(absent_days_as_vacation_policy()));
    record_april(&app).await;

    let (_, bytes) = send(
        &app,
        request("GET", &format!("/month-summary?user_id={EMPLOYEE}&month=2025-04"), None),
    )
    .await;
    let summary: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(summary["totals"]["vacation"], "8:00");
    assert_eq!(summary["worked_day_count"], 3);

    let (_, bytes) = send(
        &app,
        request(
            "GET",
            &format!("/month-summary/spreadsheet?user_id={EMPLOYEE}&month=2025-04"),
            None,
        ),
    )
    .await;
    let csv = String::from_utf8(bytes).unwrap();
    assert_eq!(csv.lines().last(), Some("TOTALE;;15.00;1.00;2.00;8.00;"));

    let (_, bytes) = send(
        &app,
        request("GET", &format!("/month-summary/report?user_id={EMPLOYEE}&month=2025-04"), None),
    )
    .await;
    let report: Value = serde_json::from_slice(&bytes).unwrap();
    // 22 weekdays: three stored, nineteen credited.
    assert_eq!(report["totals"]["vacation"], "160:00");
    assert_eq!(report["totals"]["total"], "15:00");
    assert_eq!(report["worked_day_count"], 22);
    assert_eq!(report["standard_hours_baseline_label"], "176:00");
}

#[rstest]
#[tokio::test]
async fn it_should_read_back_what_the_editor_recorded(state: AppState) {
    let app = router(state);
    record_april(&app).await;

    let (status, bytes) = send(
        &app,
        request("GET", &format!("/attendance-records?user_id={EMPLOYEE}&date=2025-04-02"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let day: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(day["morning_in"], "08:00");
    assert_eq!(day["afternoon_out"], "15:00");
    assert_eq!(day["notes"], "dentista");

    let (_, bytes) = send(
        &app,
        request("GET", &format!("/attendance-records?user_id={EMPLOYEE}&month=2025-04"), None),
    )
    .await;
    let month: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(month.as_array().unwrap().len(), 3);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_same_month_over_graphql(state: AppState) {
    let app = router(state.clone());
    record_april(&app).await;
    let schema = build_schema(state);

    let query = format!(
        r#"{{ monthSummary(userId: "{EMPLOYEE}", month: "2025-04") {{ totals {{ total overtime shortfall vacation }} workedDayCount }} }}"#
    );
    let response = schema
        .execute(async_graphql::Request::new(query).data(Actor::new(EMPLOYEE, Role::Employee)))
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["monthSummary"]["totals"],
        json!({ "total": "15:00", "overtime": "1:00", "shortfall": "2:00", "vacation": "8:00" })
    );
    assert_eq!(data["monthSummary"]["workedDayCount"], 3);

    let mutation = format!(
        r#"mutation {{ submitMonthClosure(userId: "{EMPLOYEE}", month: "2025-04") {{ resubmission workedDayCount }} }}"#
    );
    let response = schema
        .execute(async_graphql::Request::new(mutation).data(Actor::new(EMPLOYEE, Role::Employee)))
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["submitMonthClosure"]["resubmission"], false);
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_anonymous_graphql_callers(state: AppState) {
    let schema = build_schema(state);
    let response = schema
        .execute(r#"{ monthSummary(userId: "emp-7", month: "2025-04") { workedDayCount } }"#)
        .await;
    assert_eq!(response.errors.len(), 1);
}
