use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use common::AppState;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use store::StoreError;

use crate::projection::Projection;
use crate::safe_save::SafeSave;
use crate::weekly::DayTotals;
use crate::{instant_recommendation, project, weekly_breakdown};

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AnalyticsError {
    fn from(err: StoreError) -> Self {
        AnalyticsError::Internal(err.to_string())
    }
}

impl IntoResponse for AnalyticsError {
    fn into_response(self) -> Response {
        tracing::error!("analytics error: {:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": "Internal server error" })),
        )
            .into_response()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeeklyResponse {
    success: bool,
    weekly_data: HashMap<String, DayTotals>,
}

#[derive(Serialize)]
struct ProjectionResponse {
    success: bool,
    projection: Projection,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SafeSaveResponse {
    success: bool,
    safe_save: SafeSave,
}

pub fn analytics_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions/week", get(weekly))
        .route("/projection", get(projection))
        .route("/safe-save", get(safe_save))
        .with_state(state)
}

async fn weekly(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AnalyticsError> {
    let snapshot = state.store.snapshot_transactions()?;
    Ok(Json(WeeklyResponse {
        success: true,
        weekly_data: weekly_breakdown(&snapshot, Utc::now()),
    }))
}

async fn projection(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AnalyticsError> {
    let snapshot = state.store.snapshot_transactions()?;
    Ok(Json(ProjectionResponse {
        success: true,
        projection: project(&snapshot, Utc::now()),
    }))
}

async fn safe_save(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AnalyticsError> {
    let snapshot = state.store.snapshot_transactions()?;
    Ok(Json(SafeSaveResponse {
        success: true,
        safe_save: instant_recommendation(&snapshot, Utc::now()),
    }))
}
