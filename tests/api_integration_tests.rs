//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, including the
//! operation log side effect.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use math_service::{
    api::create_router, models::Operation, storage::SqliteOperationLog, AppState, Config,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

async fn create_test_app(config: &Config) -> (Router, Arc<SqliteOperationLog>) {
    let log = Arc::new(SqliteOperationLog::new_in_memory().await.unwrap());
    let state = AppState::from_config(config, log.clone());
    (create_router(state), log)
}

async fn default_app() -> (Router, Arc<SqliteOperationLog>) {
    create_test_app(&Config::default()).await
}

async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// == Power ==

#[tokio::test]
async fn test_power_success() {
    let (app, log) = default_app().await;

    let (status, json) = post(&app, "/api/power", r#"{"value":2,"exponent":10}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["operation"], "power");
    assert_eq!(json["input_value"], "2^10");
    assert_eq!(json["result"].as_f64(), Some(1024.0));
    assert_eq!(log.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_power_missing_exponent() {
    let (app, log) = default_app().await;

    let (status, json) = post(&app, "/api/power", r#"{"value":2}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Exponent is required for power computation");
    assert_eq!(log.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_power_overflow_is_opaque_server_error() {
    let (app, log) = default_app().await;

    let (status, json) = post(&app, "/api/power", r#"{"value":10,"exponent":400}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
    assert_eq!(log.count().await.unwrap(), 0);
}

// == Fibonacci ==

#[tokio::test]
async fn test_fibonacci_sequence() {
    let (app, _log) = default_app().await;

    for (n, want) in [(0, 0.0), (1, 1.0), (2, 1.0), (3, 2.0), (4, 3.0), (5, 5.0), (10, 55.0)] {
        let (status, json) = post(&app, "/api/fibonacci", &format!(r#"{{"value":{n}}}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"].as_f64(), Some(want), "F({n})");
        assert_eq!(json["input_value"], n.to_string());
    }
}

#[tokio::test]
async fn test_fibonacci_negative() {
    let (app, log) = default_app().await;

    let (status, json) = post(&app, "/api/fibonacci", r#"{"value":-1}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Fibonacci number cannot be negative");
    assert_eq!(log.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_fibonacci_repeated_calls_are_identical_and_logged() {
    let (app, log) = default_app().await;

    let (_, first) = post(&app, "/api/fibonacci", r#"{"value":40}"#).await;
    let (_, second) = post(&app, "/api/fibonacci", r#"{"value":40}"#).await;

    assert_eq!(first, second);
    assert_eq!(first["result"].as_f64(), Some(102_334_155.0));
    assert_eq!(log.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_fibonacci_correct_after_cache_expiry() {
    let config = Config {
        fib_cache_ttl: 1,
        ..Config::default()
    };
    let (app, _log) = create_test_app(&config).await;

    let (_, before) = post(&app, "/api/fibonacci", r#"{"value":25}"#).await;
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let (status, after) = post(&app, "/api/fibonacci", r#"{"value":25}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
    assert_eq!(after["result"].as_f64(), Some(75_025.0));
}

// == Factorial ==

#[tokio::test]
async fn test_factorial_success() {
    let (app, _log) = default_app().await;

    let (status, json) = post(&app, "/api/factorial", r#"{"value":0}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"].as_f64(), Some(1.0));

    let (status, json) = post(&app, "/api/factorial", r#"{"value":5}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["operation"], "factorial");
    assert_eq!(json["result"].as_f64(), Some(120.0));
}

#[tokio::test]
async fn test_factorial_over_bound() {
    let (app, log) = default_app().await;

    let (status, json) = post(&app, "/api/factorial", r#"{"value":5001}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Value too large. Try a number <= 5000");
    assert_eq!(log.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_factorial_negative() {
    let (app, _log) = default_app().await;

    let (status, json) = post(&app, "/api/factorial", r#"{"value":-3}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Factorial input must be non-negative");
}

#[tokio::test]
async fn test_factorial_custom_bound() {
    let config = Config {
        factorial_max: 20,
        ..Config::default()
    };
    let (app, _log) = create_test_app(&config).await;

    let (status, json) = post(&app, "/api/factorial", r#"{"value":21}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Value too large. Try a number <= 20");
}

// == Operation Log ==

#[tokio::test]
async fn test_each_success_logs_exactly_one_matching_record() {
    let (app, log) = default_app().await;

    let calls = [
        ("/api/power", r#"{"value":3,"exponent":4}"#),
        ("/api/fibonacci", r#"{"value":12}"#),
        ("/api/factorial", r#"{"value":6}"#),
        ("/api/fibonacci", r#"{"value":-5}"#),
        ("/api/fibonacci", r#"{"value":12}"#),
    ];

    let mut responses = Vec::new();
    for (uri, body) in calls {
        let (status, json) = post(&app, uri, body).await;
        if status == StatusCode::OK {
            responses.push(json);
        }
    }

    let records = log.records().await.unwrap();
    assert_eq!(records.len(), responses.len());
    assert_eq!(records.len(), 4);

    for (record, response) in records.iter().zip(&responses) {
        assert_eq!(record.operation.as_str(), response["operation"]);
        assert_eq!(record.input_value, response["input_value"]);
        assert_eq!(Some(record.result), response["result"].as_f64());
    }

    assert_eq!(records[0].operation, Operation::Power);
    assert_eq!(records[0].input_value, "3^4");
    assert!(records.windows(2).all(|w| w[0].id < w[1].id));
}

// == Misc Endpoints ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _log) = default_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["fib_cache"]["total_entries"], 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (app, log) = default_app().await;

    let (status, _) = post(&app, "/api/fibonacci", r#"{"value":"ten"}"#).await;

    assert!(status.is_client_error());
    assert_eq!(log.count().await.unwrap(), 0);
}
