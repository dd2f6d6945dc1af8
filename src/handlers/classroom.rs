//! Handlers de la API consumida por el frontend
//!
//! Cada petición obtiene su propio cliente autenticado a partir del token
//! persistido y reenvía la llamada a Classroom; el resultado se devuelve
//! como arreglo JSON plano.

use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use classroom::{Course, CourseWork, Student, Submission};

use classroom_sheets_middleware::utils::logging::*;
use classroom_sheets_middleware::utils::AppResult;
use classroom_sheets_middleware::AppState;

/// GET /api/cursos
pub async fn list_cursos(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Course>>> {
    log_request_received("/api/cursos", "GET");

    let client = state.token_manager.authenticated_client()?;
    let cursos = client.list_courses().await.map_err(|e| {
        log_classroom_api_error("courses.list", &e.to_string());
        e
    })?;

    log_info(&format!("📚 {} cursos obtenidos", cursos.len()));

    Ok(Json(cursos))
}

/// GET /api/estudiantes/:course_id
pub async fn list_estudiantes(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> AppResult<Json<Vec<Student>>> {
    log_request_received("/api/estudiantes", "GET");

    let client = state.token_manager.authenticated_client()?;
    let estudiantes = client.list_students(&course_id).await.map_err(|e| {
        log_classroom_api_error("students.list", &e.to_string());
        e
    })?;

    log_info(&format!(
        "🧑‍🎓 {} estudiantes en el curso {}",
        estudiantes.len(),
        course_id
    ));

    Ok(Json(estudiantes))
}

/// GET /api/tareas/:course_id
pub async fn list_tareas(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> AppResult<Json<Vec<CourseWork>>> {
    log_request_received("/api/tareas", "GET");

    let client = state.token_manager.authenticated_client()?;
    let tareas = client.list_course_work(&course_id).await.map_err(|e| {
        log_classroom_api_error("courseWork.list", &e.to_string());
        e
    })?;

    Ok(Json(tareas))
}

/// GET /api/entregas/:course_id/:tarea_id
///
/// El id de la tarea es parte de la ruta: Classroom lista entregas por
/// courseWork, no por curso completo.
pub async fn list_entregas(
    State(state): State<Arc<AppState>>,
    Path((course_id, tarea_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<Submission>>> {
    log_request_received("/api/entregas", "GET");

    let client = state.token_manager.authenticated_client()?;
    let entregas = client
        .list_submissions(&course_id, &tarea_id)
        .await
        .map_err(|e| {
            log_classroom_api_error("studentSubmissions.list", &e.to_string());
            e
        })?;

    Ok(Json(entregas))
}
