use std::sync::Arc;

use axum::{Json, extract::State};
use loopmind_optimizer::{json::types::JsonOptimizationRequest, optimizer::OptimizationResult};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

pub async fn post_optimize_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOptimizationRequest>,
) -> Result<Json<OptimizationResult>, ApiError> {
    debug!("Optimizing for {} trucks", body.truck_count());

    let result = body.optimize(&state.optimizer).await?;

    Ok(Json(result))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
