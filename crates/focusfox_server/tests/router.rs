use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use focusfox_server::{ServerConfig, app};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

fn router() -> Router {
    app(&ServerConfig::default()).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_plan(body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri("/focusfox")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn status_route_reports_running() {
    let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "FocusFox API is running!"}));
}

#[tokio::test]
async fn weighted_plan_matches_reference() {
    let (status, body) = post_plan(json!({
        "tasks": [
            {"name": "A", "estimated_time": {"hours": 0, "minutes": 10}, "priority": "high"},
            {"name": "B", "estimated_time": {"hours": 0, "minutes": 10}, "priority": "low"}
        ],
        "mood": "neutral",
        "time_available": {"hours": 0, "minutes": 30}
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "greeting": "Here's a tiny plan for when you're neutral:",
            "plan": [
                {"task": "A", "priority": "high", "time": {"hours": 0, "minutes": 22}},
                {"task": "B", "priority": "low", "time": {"hours": 0, "minutes": 8}}
            ],
            "motivation": "Pick one small, one important task."
        })
    );
}

#[tokio::test]
async fn low_energy_mood_limits_plan_to_three() {
    let tasks: Vec<Value> = (0..6).map(|i| json!({"name": format!("t{i}")})).collect();
    let (status, body) = post_plan(json!({"tasks": tasks, "mood": "Tired"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"].as_array().unwrap().len(), 3);
    assert_eq!(body["greeting"], "Here's a tiny plan for when you're tired:");
    assert_eq!(body["motivation"], "Small steps — one tiny win at a time.");
}

#[tokio::test]
async fn unknown_mood_uses_neutral_message_and_five_tasks() {
    let tasks: Vec<Value> = (0..7).map(|i| json!({"name": format!("t{i}")})).collect();
    let (status, body) = post_plan(json!({"tasks": tasks, "mood": "excited"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"].as_array().unwrap().len(), 5);
    assert_eq!(body["motivation"], "Pick one small, one important task.");
}

#[tokio::test]
async fn zero_budget_gives_zero_allocations() {
    let (status, body) = post_plan(json!({
        "tasks": [{"name": "a", "priority": "high"}, {"name": "b"}],
        "time_available": {"hours": 0, "minutes": 0}
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    for entry in body["plan"].as_array().unwrap() {
        assert_eq!(entry["time"], json!({"hours": 0, "minutes": 0}));
    }
}

#[tokio::test]
async fn empty_task_list_gives_empty_plan() {
    let (status, body) = post_plan(json!({"tasks": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"], json!([]));
    assert_eq!(body["greeting"], "Here's a tiny plan for when you're neutral:");
}

#[tokio::test]
async fn missing_tasks_is_unprocessable() {
    let (status, body) = post_plan(json!({"mood": "happy"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn missing_task_name_is_unprocessable() {
    let (status, _) = post_plan(json!({"tasks": [{"priority": "low"}]})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, body) = send(
        Request::post("/focusfox")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"tasks\": ["))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "json_error");
}

#[tokio::test]
async fn missing_content_type_is_unsupported() {
    let (status, body) = send(
        Request::post("/focusfox")
            .body(Body::from(json!({"tasks": []}).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"]["type"], "unsupported_media_type");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/focusfox")
                .header(header::ORIGIN, "https://somewhere.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://somewhere.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
