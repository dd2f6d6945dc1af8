//! Handler de exportación del roster a Sheets

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use classroom_sheets_middleware::utils::logging::*;
use classroom_sheets_middleware::utils::AppResult;
use classroom_sheets_middleware::AppState;

/// POST /api/exportar-estudiantes/:course_id
pub async fn exportar_estudiantes(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> AppResult<Json<Value>> {
    log_request_received("/api/exportar-estudiantes", "POST");

    let client = state.token_manager.authenticated_client()?;
    let result = state
        .export
        .export_roster(&client, &course_id, &state.settings.sheets.spreadsheet_id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Estudiantes exportados correctamente.",
        "rowCount": result.row_count
    })))
}
