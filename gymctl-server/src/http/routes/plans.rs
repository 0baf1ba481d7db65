//! Plan endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Plan;

/// GET /plans - every membership plan, by name
async fn list_plans(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Plan>>, ApiError> {
    let plans = state.plans.list().await?;
    Ok(Json(plans))
}

/// Plan routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plans", get(list_plans))
}
