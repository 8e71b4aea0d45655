use axum::{extract::State, Json};
use contracts::shell::ShellConfig;

use crate::routes::AppState;

/// GET /api/shell/config
pub async fn get_config(State(state): State<AppState>) -> Json<ShellConfig> {
    Json(state.shell.as_ref().clone())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
