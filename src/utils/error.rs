use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ClassroomApi(classroom::ClassroomError),
    AuthExchange(String),
    MissingToken,
    ConfigError(String),
    ExportError(String),
    ValidationError(String),
    JsonError(serde_json::Error),
    HttpError(reqwest::Error),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ClassroomApi(err) => write!(f, "Classroom API error: {}", err),
            AppError::AuthExchange(msg) => write!(f, "OAuth2 exchange error: {}", msg),
            AppError::MissingToken => write!(f, "No stored token"),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ExportError(msg) => write!(f, "Export error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
            AppError::HttpError(err) => write!(f, "HTTP error: {}", err),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<classroom::ClassroomError> for AppError {
    fn from(err: classroom::ClassroomError) -> Self {
        AppError::ClassroomApi(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ClassroomApi(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::AuthExchange(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            // El backend original respondía 500 aquí; se expone 401 para que
            // el operador sepa que debe pasar por /auth
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "No hay token almacenado. Visita /auth para autorizar la aplicación.".to_string(),
            ),
            AppError::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ExportError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::JsonError(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::HttpError(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = json!({
            "error": error_message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
