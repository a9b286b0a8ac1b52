//! Client behaviour against an in-process mock of the tasks API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use task_api::{ApiError, CreateTaskPayload, Task, TaskClient, TaskStatus};

/// In-memory stand-in for the real backend.
#[derive(Clone, Default)]
struct MockApi {
    tasks: Arc<Mutex<Vec<Task>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn list_tasks(State(api): State<MockApi>) -> Json<Vec<Task>> {
    Json(api.tasks.lock().unwrap().clone())
}

async fn create_task(State(api): State<MockApi>, Json(body): Json<Value>) -> (StatusCode, Json<Task>) {
    api.bodies.lock().unwrap().push(body.clone());

    let mut tasks = api.tasks.lock().unwrap();
    let task = Task {
        id: format!("task-{}", tasks.len() + 1),
        title: body["title"].as_str().unwrap_or_default().to_string(),
        description: body["description"].as_str().map(str::to_string),
        status: serde_json::from_value(body["status"].clone()).unwrap(),
        due_date_time: body["dueDateTime"].as_str().unwrap_or_default().to_string(),
    };
    tasks.push(task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn serve(router: Router) -> TaskClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    TaskClient::new(format!("http://{addr}/"))
}

async fn serve_mock() -> (TaskClient, MockApi) {
    let api = MockApi::default();
    let router = Router::new()
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .with_state(api.clone());
    (serve(router).await, api)
}

fn payload() -> CreateTaskPayload {
    let due = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    CreateTaskPayload::new("  Write report  ", "", TaskStatus::InProgress, Some(due))
}

#[tokio::test]
async fn create_task_posts_json_and_returns_created_task() {
    let (client, api) = serve_mock().await;

    let task = client.create_task(&payload()).await.unwrap();

    assert_eq!(task.id, "task-1");
    assert_eq!(task.title, "Write report");
    assert_eq!(task.status, TaskStatus::InProgress);

    let bodies = api.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        json!({
            "title": "Write report",
            "description": null,
            "status": "InProgress",
            "dueDateTime": "2025-03-01T09:30:00Z"
        })
    );
}

#[tokio::test]
async fn created_task_appears_in_next_listing() {
    let (client, _api) = serve_mock().await;

    assert!(client.get_tasks().await.unwrap().is_empty());

    let created = client.create_task(&payload()).await.unwrap();
    let tasks = client.get_tasks().await.unwrap();

    assert_eq!(tasks, vec![created]);
}

#[tokio::test]
async fn error_field_becomes_the_message() {
    let router = Router::new().route(
        "/api/v1/tasks",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "X" }))) }),
    );
    let client = serve(router).await;

    let err = client.create_task(&payload()).await.unwrap_err();

    assert_eq!(err.to_string(), "X");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn empty_server_error_falls_back_to_status_message() {
    let router = Router::new().route(
        "/api/v1/tasks",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = serve(router).await;

    let err = client.create_task(&payload()).await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn listing_failure_uses_problem_details_title() {
    let router = Router::new().route(
        "/api/v1/tasks",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "title": "Database offline", "status": 503 })),
            )
        }),
    );
    let client = serve(router).await;

    let err = client.get_tasks().await.unwrap_err();

    assert_eq!(err.to_string(), "Database offline");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn listing_with_malformed_body_is_a_decoding_error() {
    let router = Router::new().route(
        "/api/v1/tasks",
        get(|| async { Json(json!({ "items": [] })) }),
    );
    let client = serve(router).await;

    let err = client.get_tasks().await.unwrap_err();

    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TaskClient::new(format!("http://{addr}"));
    let err = client.get_tasks().await.unwrap_err();

    assert!(matches!(err, ApiError::Request(_)));
    assert!(!err.to_string().is_empty());
}
