use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::AppState;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use store::StoreError;

use crate::models::{BudgetView, UpdateBudgetRequest};

#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for BudgetError {
    fn from(err: StoreError) -> Self {
        BudgetError::Internal(err.to_string())
    }
}

impl IntoResponse for BudgetError {
    fn into_response(self) -> Response {
        tracing::error!("budget error: {:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": "Internal server error" })),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct BudgetResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    budgets: BudgetView,
}

pub fn budget_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget", get(get_budget).put(update_budget))
        .with_state(state)
}

async fn get_budget(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, BudgetError> {
    let budget = state.store.budget()?;
    Ok(Json(BudgetResponse {
        success: true,
        message: None,
        budgets: budget.into(),
    }))
}

async fn update_budget(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateBudgetRequest>,
) -> Result<impl IntoResponse, BudgetError> {
    let current = state.store.budget()?;
    let updated = state.store.replace_budget(payload.apply(current))?;

    Ok(Json(BudgetResponse {
        success: true,
        message: Some("Budget updated successfully".to_string()),
        budgets: updated.into(),
    }))
}
