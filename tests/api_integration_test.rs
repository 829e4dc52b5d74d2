#![cfg(feature = "server")]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use math_ops::config::toml_config::ApiInfo;
use math_ops::domain::ports::Calculator;
use math_ops::{build_router, AppState, DecimalCalculator, MathError};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn app() -> Router {
    build_router(AppState::new(
        Arc::new(DecimalCalculator::new()),
        ApiInfo::default(),
    ))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(request).await
}

#[tokio::test]
async fn test_api_exists() {
    let (status, data) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(data["message"]
        .as_str()
        .unwrap()
        .contains("Welcome to the Math Operations API"));
}

#[tokio::test]
async fn test_info_endpoint() {
    let (status, data) = get("/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["title"], "Math Operations API");
    assert_eq!(data["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_addition_post() {
    let (status, data) = post_json("/add", json!({"a": 2, "b": 3})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["operation"], "addition");
    assert_eq!(data["a"].as_f64(), Some(2.0));
    assert_eq!(data["b"].as_f64(), Some(3.0));
    assert_eq!(data["result"].as_f64(), Some(5.0));

    let (_, data) = post_json("/add", json!({"a": -1, "b": 1})).await;
    assert_eq!(data["result"].as_f64(), Some(0.0));

    let (_, data) = post_json("/add", json!({"a": 2.5, "b": 3.5})).await;
    assert_eq!(data["result"].as_f64(), Some(6.0));
}

#[tokio::test]
async fn test_addition_post_precision() {
    let (status, data) = post_json("/add", json!({"a": -1, "b": 2.3})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["result"].as_f64(), Some(1.3));

    let (_, data) = post_json("/add", json!({"a": 0.1, "b": 0.2})).await;
    assert_eq!(data["operation"], "addition");
    assert_eq!(data["result"].as_f64(), Some(0.3));

    let (_, data) = post_json("/add", json!({"a": 0.1, "b": 0.7})).await;
    assert_eq!(data["result"].as_f64(), Some(0.8));
}

#[tokio::test]
async fn test_addition_post_accepts_numeric_strings() {
    let (status, data) = post_json("/add", json!({"a": "0.1", "b": "0.2"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["result"].as_f64(), Some(0.3));
}

#[tokio::test]
async fn test_subtraction_post() {
    let (status, data) = post_json("/subtract", json!({"a": 5, "b": 3})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["operation"], "subtraction");
    assert_eq!(data["a"].as_f64(), Some(5.0));
    assert_eq!(data["b"].as_f64(), Some(3.0));
    assert_eq!(data["result"].as_f64(), Some(2.0));

    let (_, data) = post_json("/subtract", json!({"a": 1, "b": 1})).await;
    assert_eq!(data["result"].as_f64(), Some(0.0));

    let (_, data) = post_json("/subtract", json!({"a": 10.5, "b": 4.5})).await;
    assert_eq!(data["result"].as_f64(), Some(6.0));

    let (_, data) = post_json("/subtract", json!({"a": 3, "b": 7})).await;
    assert_eq!(data["result"].as_f64(), Some(-4.0));
}

#[tokio::test]
async fn test_subtraction_post_precision() {
    let (_, data) = post_json("/subtract", json!({"a": 1.3, "b": 1})).await;
    assert_eq!(data["result"].as_f64(), Some(0.3));

    let (_, data) = post_json("/subtract", json!({"a": 0.3, "b": 0.1})).await;
    assert_eq!(data["result"].as_f64(), Some(0.2));

    let (_, data) = post_json("/subtract", json!({"a": 1, "b": 0.7})).await;
    assert_eq!(data["result"].as_f64(), Some(0.3));
}

#[tokio::test]
async fn test_addition_get() {
    let (status, data) = get("/add/2/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["operation"], "addition");
    assert_eq!(data["a"].as_f64(), Some(2.0));
    assert_eq!(data["b"].as_f64(), Some(3.0));
    assert_eq!(data["result"].as_f64(), Some(5.0));

    let (_, data) = get("/add/-1/1").await;
    assert_eq!(data["result"].as_f64(), Some(0.0));

    let (_, data) = get("/add/2.5/3.5").await;
    assert_eq!(data["result"].as_f64(), Some(6.0));
}

#[tokio::test]
async fn test_addition_get_precision() {
    let (_, data) = get("/add/-1/2.3").await;
    assert_eq!(data["result"].as_f64(), Some(1.3));

    let (_, data) = get("/add/0.1/0.2").await;
    assert_eq!(data["result"].as_f64(), Some(0.3));
}

#[tokio::test]
async fn test_subtraction_get() {
    let (status, data) = get("/subtract/5/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["operation"], "subtraction");
    assert_eq!(data["result"].as_f64(), Some(2.0));

    let (_, data) = get("/subtract/3/7").await;
    assert_eq!(data["result"].as_f64(), Some(-4.0));
}

#[tokio::test]
async fn test_subtraction_get_precision() {
    let (_, data) = get("/subtract/1.3/1").await;
    assert_eq!(data["result"].as_f64(), Some(0.3));

    let (_, data) = get("/subtract/1/0.7").await;
    assert_eq!(data["result"].as_f64(), Some(0.3));
}

#[tokio::test]
async fn test_invalid_inputs() {
    // 非數字路徑參數
    let (status, data) = get("/add/abc/3").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(data["detail"][0]["loc"], json!(["path", "a"]));

    // 缺少欄位
    let (status, data) = post_json("/add", json!({"a": 5})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(data["detail"][0]["loc"], json!(["body"]));

    // 非法 JSON
    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header("content-type", "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let (status, data) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(data["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn test_both_path_errors_reported() {
    let (status, data) = get("/subtract/xyz/abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = data["detail"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[1]["loc"], json!(["path", "b"]));
}

#[tokio::test]
async fn test_missing_content_type_is_validation_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/subtract")
        .body(Body::from(r#"{"a": 1, "b": 2}"#))
        .unwrap();
    let (status, data) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(data["detail"][0]["type"], "content_type");
}

#[tokio::test]
async fn test_non_finite_inputs_rejected() {
    let (status, _) = get("/add/inf/1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post_json("/subtract", json!({"a": "NaN", "b": 1})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_tiny_and_huge_magnitudes_accepted() {
    let (status, data) = post_json("/add", json!({"a": 1e30, "b": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["result"].as_f64(), Some(1e30));

    let (status, data) = post_json("/add", json!({"a": 1e-29, "b": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["result"].as_f64(), Some(1.0));

    let (status, data) = get("/subtract/1e300/1e300").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["result"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_result_beyond_float_range_rejected() {
    let max = f64::MAX.to_string();
    let (status, data) = post_json("/add", json!({"a": max, "b": max})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(data["detail"][0]["type"], "result_out_of_range");
}

#[tokio::test]
async fn test_every_operation_has_both_routes() {
    for (route, operation) in [("add", "addition"), ("subtract", "subtraction")] {
        let (status, data) = post_json(&format!("/{}", route), json!({"a": 1, "b": 1})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["operation"], operation);

        let (status, data) = get(&format!("/{}/1/1", route)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["operation"], operation);
    }

    let (status, _) = get("/multiply/1/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

struct UnavailableCalculator;

impl Calculator for UnavailableCalculator {
    fn add(&self, _a: f64, _b: f64) -> math_ops::Result<f64> {
        Err(MathError::ConversionError {
            message: "decimal backend unavailable".to_string(),
        })
    }

    fn subtract(&self, a: f64, b: f64) -> math_ops::Result<f64> {
        self.add(a, b)
    }
}

#[tokio::test]
async fn test_calculation_errors_are_validation_errors() {
    let app = build_router(AppState::new(
        Arc::new(UnavailableCalculator),
        ApiInfo::default(),
    ));
    let response = app
        .oneshot(Request::builder().uri("/add/1/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let data: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(data["detail"][0]["type"], "value_error");
}
