use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.directory.len().await,
        "enforce_capacity": state.directory.enforces_capacity(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
