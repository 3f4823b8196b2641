use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use common::AppState;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use store::{StoreError, UserProfile};
use transactions::service::{TransactionError, TransactionService};
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for SetupError {
    fn from(err: StoreError) -> Self {
        SetupError::Internal(err.to_string())
    }
}

impl From<TransactionError> for SetupError {
    fn from(err: TransactionError) -> Self {
        SetupError::Internal(err.to_string())
    }
}

impl IntoResponse for SetupError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            SetupError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            SetupError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "success": false, "error": msg }))).into_response()
    }
}

/// Onboarding form. Everything is optional; sensible demo defaults apply.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    pub name: Option<String>,
    pub income_frequency: Option<String>,
    #[validate(range(min = 0))]
    pub rent: Option<i64>,
    #[validate(range(min = 0))]
    pub emi: Option<i64>,
    #[validate(range(min = 0))]
    pub goal: Option<i64>,
    pub language: Option<String>,
}

#[derive(Serialize)]
struct SetupResponse {
    success: bool,
    message: String,
    user: UserProfile,
}

/// POST /user/setup - stores the profile and regenerates the demo history.
pub async fn setup_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SetupRequest>,
) -> Result<impl IntoResponse, SetupError> {
    payload
        .validate()
        .map_err(|e| SetupError::InvalidInput(e.to_string()))?;

    let profile = UserProfile {
        id: state.store.allocate_id(),
        name: payload.name.unwrap_or_else(|| "User".to_string()),
        income_frequency: payload
            .income_frequency
            .unwrap_or_else(|| "monthly".to_string()),
        rent: payload.rent.unwrap_or(0),
        emi: payload.emi.unwrap_or(0),
        goal: payload.goal.unwrap_or(10000),
        language: payload.language.unwrap_or_else(|| "en".to_string()),
        created_at: Utc::now(),
    };

    state.store.set_user(profile.clone())?;
    TransactionService::regenerate(&state.store, 15, Utc::now())?;
    tracing::info!("onboarded user {:?}", profile.name);

    Ok(Json(SetupResponse {
        success: true,
        message: "User setup completed successfully".to_string(),
        user: profile,
    }))
}
