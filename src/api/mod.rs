use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{GREETING, QUICK_FACTS, Suggestion, SuggestionAction, Tool};
use crate::requests::{ChatRequest, ProjectionRequest, SavingsRequest, TaxRequest};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxPayload {
    income: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SavingsPayload {
    #[serde(alias = "targetAmount")]
    target: Option<f64>,
    #[serde(alias = "periods")]
    months: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    principal: Option<f64>,
    #[serde(alias = "annualRatePct", alias = "annualRate")]
    rate: Option<f64>,
    years: Option<u32>,
    #[serde(alias = "annualContribution")]
    contribution: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ChatPayload {
    message: Option<String>,
    seed: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionEntry {
    id: Suggestion,
    label: &'static str,
    tool: Option<Tool>,
    message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionsResponse {
    greeting: &'static str,
    suggestions: Vec<SuggestionEntry>,
    quick_facts: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/suggestions", get(suggestions_handler))
        .route("/api/tax", get(tax_get_handler).post(tax_post_handler))
        .route(
            "/api/savings",
            get(savings_get_handler).post(savings_post_handler),
        )
        .route(
            "/api/projection",
            get(projection_get_handler).post(projection_post_handler),
        )
        .route("/api/chat", get(chat_get_handler).post(chat_post_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "finchat HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/suggestions");

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn suggestions_handler() -> Response {
    json_response(StatusCode::OK, suggestions_response())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn tax_get_handler(payload: Result<Query<TaxPayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => tax_handler_impl(payload),
        Err(rejection) => bad_request("tax", &rejection.body_text()),
    }
}

async fn tax_post_handler(payload: Result<Json<TaxPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => tax_handler_impl(payload),
        Err(rejection) => bad_request("tax", &rejection.body_text()),
    }
}

async fn savings_get_handler(payload: Result<Query<SavingsPayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => savings_handler_impl(payload),
        Err(rejection) => bad_request("savings", &rejection.body_text()),
    }
}

async fn savings_post_handler(payload: Result<Json<SavingsPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => savings_handler_impl(payload),
        Err(rejection) => bad_request("savings", &rejection.body_text()),
    }
}

async fn projection_get_handler(
    payload: Result<Query<ProjectionPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => projection_handler_impl(payload),
        Err(rejection) => bad_request("projection", &rejection.body_text()),
    }
}

async fn projection_post_handler(
    payload: Result<Json<ProjectionPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => projection_handler_impl(payload),
        Err(rejection) => bad_request("projection", &rejection.body_text()),
    }
}

async fn chat_get_handler(payload: Result<Query<ChatPayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => chat_handler_impl(payload),
        Err(rejection) => bad_request("chat", &rejection.body_text()),
    }
}

async fn chat_post_handler(payload: Result<Json<ChatPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => chat_handler_impl(payload),
        Err(rejection) => bad_request("chat", &rejection.body_text()),
    }
}

fn tax_handler_impl(payload: TaxPayload) -> Response {
    match tax_request_from_payload(payload).and_then(|r| r.run()) {
        Ok(outcome) => {
            info!(income = outcome.breakdown.income, "tax estimate served");
            json_response(StatusCode::OK, outcome)
        }
        Err(msg) => bad_request("tax", &msg),
    }
}

fn savings_handler_impl(payload: SavingsPayload) -> Response {
    match savings_request_from_payload(payload).and_then(|r| r.run()) {
        Ok(outcome) => {
            info!(months = outcome.plan.periods, "savings plan served");
            json_response(StatusCode::OK, outcome)
        }
        Err(msg) => bad_request("savings", &msg),
    }
}

fn projection_handler_impl(payload: ProjectionPayload) -> Response {
    match projection_request_from_payload(payload).and_then(|r| r.run()) {
        Ok(outcome) => {
            info!(years = outcome.projection.years, "projection served");
            json_response(StatusCode::OK, outcome)
        }
        Err(msg) => bad_request("projection", &msg),
    }
}

fn chat_handler_impl(payload: ChatPayload) -> Response {
    match chat_request_from_payload(payload) {
        Ok(request) => {
            let reply = request.run();
            info!(intent = ?reply.intent, "chat reply served");
            json_response(StatusCode::OK, reply)
        }
        Err(msg) => bad_request("chat", &msg),
    }
}

fn tax_request_from_payload(payload: TaxPayload) -> Result<TaxRequest, String> {
    let mut request = TaxRequest::default();
    if let Some(v) = payload.income {
        request.income = v;
    }
    Ok(request)
}

fn savings_request_from_payload(payload: SavingsPayload) -> Result<SavingsRequest, String> {
    let mut request = SavingsRequest::default();
    if let Some(v) = payload.target {
        request.target = v;
    }
    if let Some(v) = payload.months {
        request.months = v;
    }
    request.validate()
}

fn projection_request_from_payload(
    payload: ProjectionPayload,
) -> Result<ProjectionRequest, String> {
    let mut request = ProjectionRequest::default();
    if let Some(v) = payload.principal {
        request.principal = v;
    }
    if let Some(v) = payload.rate {
        request.rate = v;
    }
    if let Some(v) = payload.years {
        request.years = v;
    }
    if let Some(v) = payload.contribution {
        request.contribution = v;
    }
    request.validate()
}

fn chat_request_from_payload(payload: ChatPayload) -> Result<ChatRequest, String> {
    let Some(message) = payload.message else {
        return Err("message is required".to_string());
    };
    ChatRequest::new(message, payload.seed).validate()
}

fn suggestions_response() -> SuggestionsResponse {
    let suggestions = Suggestion::ALL
        .into_iter()
        .map(|s| {
            let (tool, message) = match s.action() {
                SuggestionAction::OpenTool(tool) => (Some(tool), None),
                SuggestionAction::Say(text) => (None, Some(text)),
            };
            SuggestionEntry {
                id: s,
                label: s.label(),
                tool,
                message,
            }
        })
        .collect();
    SuggestionsResponse {
        greeting: GREETING,
        suggestions,
        quick_facts: QUICK_FACTS.to_vec(),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn bad_request(endpoint: &'static str, msg: &str) -> Response {
    warn!(endpoint, error = msg, "request rejected");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
