use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use classroom_sheets_middleware::utils::logging::*;
use classroom_sheets_middleware::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "classroom-sheets-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_integration_status_check();

    // Hay token persistido? (no valida contra Google: eso lo hace la
    // primera llamada a la API)
    let token_stored = state.token_manager.has_stored_token();
    let spreadsheet_configured = !state.settings.sheets.spreadsheet_id.is_empty();

    Json(json!({
        "service": "classroom-sheets-middleware",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "integrations": {
            "classroom": {
                "authorized": token_stored,
                "token_path": state.settings.google.token_path
            },
            "sheets": {
                "spreadsheet_configured": spreadsheet_configured
            }
        }
    }))
}
