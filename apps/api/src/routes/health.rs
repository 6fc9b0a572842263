use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "Servidor de Petições está no ar!";

/// GET /
/// Plain-text liveness acknowledgment.
pub async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "petition-api",
        "model": MODEL,
        "api_key_configured": state.config.has_api_key()
    }))
}
