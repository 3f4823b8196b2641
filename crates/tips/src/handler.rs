use axum::{extract::Query, response::IntoResponse, routing::get, Json, Router};
use common::AppState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog;
use crate::models::Tip;

#[derive(Deserialize)]
struct TipsQuery {
    lang: Option<String>,
}

#[derive(Serialize)]
struct TipsResponse {
    success: bool,
    tips: &'static [Tip],
}

pub fn tips_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().route("/tips", get(get_tips)).with_state(state)
}

async fn get_tips(Query(params): Query<TipsQuery>) -> impl IntoResponse {
    let lang = params.lang.as_deref().unwrap_or("en");
    Json(TipsResponse {
        success: true,
        tips: catalog::tips_for(lang),
    })
}
