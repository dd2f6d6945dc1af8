//! Tipos de error para el crate classroom

use thiserror::Error;

/// Errores del cliente de Google Classroom
#[derive(Debug, Error)]
pub enum ClassroomError {
    /// Error de red o de la capa HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error de la API de Classroom (status no-2xx)
    #[error("Classroom API error in {operation} (status {status}): {message}")]
    ApiError {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// Error de parseo JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error de configuración del cliente
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ClassroomError {
    /// Nombre de la operación de la API que falló, si aplica
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ClassroomError::ApiError { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// Tipo Result estándar para el crate
pub type Result<T> = std::result::Result<T, ClassroomError>;
