//! Route handlers: survey lookups and the prediction endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::LazyLock;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use prepcheck_core::{
    HouseholdProfile, KnowledgeBase, RecommendationPolicy, build_feature_vector, recommend,
};
use prepcheck_model::Classifier;

use crate::error::ApiError;

/// Shared read-only application state. Built once at startup; every request
/// borrows it, nothing writes to it.
#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeBase>,
    pub classifier: Arc<Classifier>,
    pub policy: RecommendationPolicy,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/states", get(states))
        .route("/api/disasters", get(disasters))
        .route("/api/checklist", get(checklist))
        .route("/api/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Lookup endpoints ──

#[derive(Serialize)]
struct StatesResponse {
    states: Vec<String>,
}

async fn states(State(app): State<AppState>) -> Json<StatesResponse> {
    Json(StatesResponse { states: app.kb.regions().to_vec() })
}

#[derive(Deserialize)]
struct DisastersQuery {
    state: Option<String>,
}

#[derive(Serialize)]
struct DisastersResponse {
    disasters: Vec<String>,
}

async fn disasters(
    State(app): State<AppState>,
    Query(query): Query<DisastersQuery>,
) -> Result<Json<DisastersResponse>, ApiError> {
    let state = query.state.filter(|s| !s.is_empty()).ok_or(ApiError::InvalidState)?;
    let disasters = app
        .kb
        .disaster_types_for_region(&state)
        .map_err(|_| ApiError::InvalidState)?
        .to_vec();
    Ok(Json(DisastersResponse { disasters }))
}

#[derive(Deserialize)]
struct ChecklistQuery {
    disaster_type: Option<String>,
}

#[derive(Serialize)]
struct ChecklistResponseBody {
    checklist: Vec<String>,
}

async fn checklist(
    State(app): State<AppState>,
    Query(query): Query<ChecklistQuery>,
) -> Result<Json<ChecklistResponseBody>, ApiError> {
    let disaster_type =
        query.disaster_type.filter(|s| !s.is_empty()).ok_or(ApiError::InvalidDisasterType)?;
    let checklist = app
        .kb
        .checklist_template(&disaster_type)
        .map_err(|_| ApiError::InvalidDisasterType)?
        .to_vec();
    Ok(Json(ChecklistResponseBody { checklist }))
}

// ── Prediction ──

/// Every field optional so presence can be checked in declaration order and
/// the first missing one named in the error.
#[derive(Deserialize)]
struct PredictRequest {
    state: Option<String>,
    disaster_type: Option<String>,
    household_size: Option<u32>,
    has_kit: Option<bool>,
    checklist_responses: Option<HashMap<String, bool>>,
}

#[derive(Serialize)]
struct PredictResponse {
    preparedness_level: String,
    improvement_tips: Vec<String>,
    recommendations: Vec<String>,
    completion_percentage: f64,
    awareness_score: u32,
}

async fn predict(
    State(app): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    // Presence of `state` is required even though prediction itself only
    // depends on the disaster type; the survey always submits it.
    let _state = req.state.ok_or(ApiError::MissingField("state"))?;
    let disaster_type = req.disaster_type.ok_or(ApiError::MissingField("disaster_type"))?;
    let household_size = req.household_size.ok_or(ApiError::MissingField("household_size"))?;
    let has_kit = req.has_kit.ok_or(ApiError::MissingField("has_kit"))?;
    let checklist = req.checklist_responses.ok_or(ApiError::MissingField("checklist_responses"))?;

    let profile = HouseholdProfile { household_size, has_kit, disaster_type, checklist };
    let features = build_feature_vector(&profile, &app.kb)?;
    let level = app.classifier.classify(&features)?;

    Ok(Json(PredictResponse {
        improvement_tips: app.kb.improvement_tips(&level).to_vec(),
        recommendations: recommend(&app.kb, app.policy, &profile.disaster_type, &level),
        completion_percentage: features.completion_percent,
        awareness_score: features.awareness_score,
        preparedness_level: level,
    }))
}

// ── Health ──

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    })
}
