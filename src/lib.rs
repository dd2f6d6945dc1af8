// Biblioteca del middleware Classroom-Sheets
// Expone los módulos para uso en tests y binarios

pub mod auth;
pub mod config;
pub mod services;
pub mod utils;

// AppState se define aquí para ser compartido
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub token_manager: auth::TokenManager,
    pub export: services::ExportService,
}
