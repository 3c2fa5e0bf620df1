use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use recruit_fit::error::AppError;
use recruit_fit::portfolio::{
    calculate_portfolio_health, PortfolioHealth, PortfolioImporter, SchoolHealthEntry,
};
use recruit_fit::scoring::{
    calculate_fit_score, get_fit_score_recommendation, AthleteProfile, FitEvaluation,
    FitScoreInputs, FitScoreResult, SchoolProfile,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct FitScoreResponse {
    #[serde(flatten)]
    pub(crate) result: FitScoreResult,
    pub(crate) recommendation: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FitEvaluationRequest {
    pub(crate) athlete: AthleteProfile,
    pub(crate) school: SchoolProfile,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioHealthRequest {
    #[serde(default)]
    pub(crate) schools: Vec<SchoolHealthEntry>,
    #[serde(default)]
    pub(crate) csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioHealthResponse {
    pub(crate) data_source: PortfolioDataSource,
    #[serde(flatten)]
    pub(crate) health: PortfolioHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PortfolioDataSource {
    Csv,
    Inline,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/fit/score", post(fit_score_endpoint))
        .route("/api/v1/fit/evaluate", post(fit_evaluation_endpoint))
        .route("/api/v1/portfolio/health", post(portfolio_health_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn fit_score_endpoint(Json(inputs): Json<FitScoreInputs>) -> Json<FitScoreResponse> {
    let result = calculate_fit_score(&inputs);
    let recommendation = get_fit_score_recommendation(result.score, result.tier);
    Json(FitScoreResponse {
        result,
        recommendation,
    })
}

pub(crate) async fn fit_evaluation_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<FitEvaluationRequest>,
) -> Json<FitEvaluation> {
    let FitEvaluationRequest {
        athlete,
        school,
        today,
    } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    Json(state.evaluator.evaluate(&athlete, &school, today))
}

pub(crate) async fn portfolio_health_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<PortfolioHealthRequest>,
) -> Result<Json<PortfolioHealthResponse>, AppError> {
    let PortfolioHealthRequest { schools, csv } = payload;

    let (entries, data_source) = match csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            (PortfolioImporter::from_reader(reader)?, PortfolioDataSource::Csv)
        }
        None => (schools, PortfolioDataSource::Inline),
    };

    let health = calculate_portfolio_health(&entries, &state.portfolio);
    info!(
        total = health.total,
        status = ?health.status,
        warnings = health.warnings.len(),
        "portfolio health evaluated"
    );

    Ok(Json(PortfolioHealthResponse {
        data_source,
        health,
    }))
}
