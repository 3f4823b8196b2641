use crate::models::{AddTransactionRequest, UpdateCategoryRequest};
use crate::service::{TransactionError, TransactionService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use common::AppState;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use store::Transaction;

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            TransactionError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            TransactionError::NotFound => {
                (StatusCode::NOT_FOUND, "Transaction not found".to_string())
            }
            TransactionError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "success": false, "error": msg }))).into_response()
    }
}

#[derive(Serialize)]
struct TransactionListResponse {
    success: bool,
    transactions: Vec<Transaction>,
}

#[derive(Serialize)]
struct TransactionResponse {
    success: bool,
    message: String,
    transaction: Transaction,
}

pub fn transactions_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        // Specific routes first
        .route("/transactions", get(list_transactions))
        .route("/transactions/add", post(add_transaction))
        // Then parameterized routes
        .route("/transactions/{id}", put(update_category))
        .with_state(state)
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TransactionError> {
    let transactions = TransactionService::list(&state.store, Utc::now()).map_err(|e| {
        tracing::error!("list_transactions error: {:?}", e);
        e
    })?;

    Ok(Json(TransactionListResponse {
        success: true,
        transactions,
    }))
}

async fn add_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddTransactionRequest>,
) -> Result<impl IntoResponse, TransactionError> {
    let transaction = TransactionService::add(&state.store, payload, Utc::now()).map_err(|e| {
        tracing::error!("add_transaction error: {:?}", e);
        e
    })?;

    Ok(Json(TransactionResponse {
        success: true,
        message: "Transaction added successfully".to_string(),
        transaction,
    }))
}

async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, TransactionError> {
    let transaction =
        TransactionService::update_category(&state.store, id, payload.category.canonical())?;

    Ok(Json(TransactionResponse {
        success: true,
        message: "Transaction updated successfully".to_string(),
        transaction,
    }))
}
