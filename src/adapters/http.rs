//! HTTP API: `/add` and `/subtract`, each reachable through `POST` (JSON body)
//! and `GET /<op>/{a}/{b}` (path segments).
//!
//! Invalid input of any kind (malformed JSON, missing fields, non-numeric
//! values, non-finite numbers, results beyond `f64::MAX`) is answered with
//! `422` and a `{"detail": [{"loc", "msg", "type"}]}` body.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

use crate::config::toml_config::ApiInfo;
use crate::core::engine::CalculationEngine;
use crate::core::{CalculationRequest, CalculationResponse, Calculator, Operation};
use crate::utils::error::{MathError, Result};
use crate::utils::validation::parse_number;

pub const WELCOME_MESSAGE: &str = "Welcome to the Math Operations API";

#[derive(Clone)]
pub struct AppState {
    engine: Arc<CalculationEngine<Arc<dyn Calculator>>>,
    info: Arc<ApiInfo>,
}

impl AppState {
    pub fn new(calculator: Arc<dyn Calculator>, info: ApiInfo) -> Self {
        Self {
            engine: Arc::new(CalculationEngine::new(calculator)),
            info: Arc::new(info),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationDetail {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<ValidationDetail>),
    Calculation(MathError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match self {
            ApiError::Validation(details) => details,
            ApiError::Calculation(e) => {
                vec![ValidationDetail::new(&["body"], e.user_friendly_message(), "value_error")]
            }
        };

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": details })),
        )
            .into_response()
    }
}

/// 建立路由；每個運算各自註冊 POST 與 GET 兩種入口
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler));

    Operation::ALL
        .into_iter()
        .fold(router, |router, operation| {
            router
                .route(&format!("/{}", operation.route()), json_route(operation))
                .route(&format!("/{}/{{a}}/{{b}}", operation.route()), path_route(operation))
        })
        .with_state(state)
}

fn json_route(operation: Operation) -> MethodRouter<AppState> {
    post(
        move |State(state): State<AppState>,
              payload: std::result::Result<Json<CalculationRequest>, JsonRejection>| async move {
            calculate_json(&state, operation, payload)
        },
    )
}

fn path_route(operation: Operation) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>,
              segments: std::result::Result<Path<(String, String)>, PathRejection>| async move {
            calculate_path(&state, operation, segments)
        },
    )
}

pub async fn bind(address: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!(addr = %address, "HTTP listener bound");
    Ok(listener)
}

pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn info_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.info.as_ref().clone())
}

fn calculate_json(
    state: &AppState,
    operation: Operation,
    payload: std::result::Result<Json<CalculationRequest>, JsonRejection>,
) -> std::result::Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected {} body: {}", operation, rejection.body_text());
        ApiError::Validation(vec![json_rejection_detail(&rejection)])
    })?;

    run(state, operation, request.a, request.b)
}

fn calculate_path(
    state: &AppState,
    operation: Operation,
    segments: std::result::Result<Path<(String, String)>, PathRejection>,
) -> std::result::Result<Json<CalculationResponse>, ApiError> {
    let Path((raw_a, raw_b)) = segments.map_err(|rejection| {
        ApiError::Validation(vec![ValidationDetail::new(
            &["path"],
            rejection.body_text(),
            "missing",
        )])
    })?;

    let mut details = Vec::new();
    let a = parse_path_segment("a", &raw_a, &mut details);
    let b = parse_path_segment("b", &raw_b, &mut details);

    match (a, b) {
        (Some(a), Some(b)) => run(state, operation, a, b),
        _ => Err(ApiError::Validation(details)),
    }
}

fn parse_path_segment(field: &str, raw: &str, details: &mut Vec<ValidationDetail>) -> Option<f64> {
    match parse_number(field, raw) {
        Ok(value) => Some(value),
        Err(MathError::ValidationError { message, .. }) => {
            details.push(ValidationDetail::new(&["path", field], message, "float_parsing"));
            None
        }
        Err(e) => {
            details.push(ValidationDetail::new(&["path", field], e.to_string(), "float_parsing"));
            None
        }
    }
}

fn json_rejection_detail(rejection: &JsonRejection) -> ValidationDetail {
    let kind = match rejection {
        JsonRejection::JsonDataError(_) => "value_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_invalid",
    };
    ValidationDetail::new(&["body"], rejection.body_text(), kind)
}

fn run(
    state: &AppState,
    operation: Operation,
    a: f64,
    b: f64,
) -> std::result::Result<Json<CalculationResponse>, ApiError> {
    let response = state
        .engine
        .run(operation, a, b)
        .map_err(ApiError::Calculation)?;

    // JSON 無法表示 inf
    if !response.result.is_finite() {
        return Err(ApiError::Validation(vec![ValidationDetail::new(
            &["body"],
            format!("The {} result is outside the double-precision range", operation),
            "result_out_of_range",
        )]));
    }
    Ok(Json(response))
}
