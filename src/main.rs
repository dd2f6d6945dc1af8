//! Middleware Classroom-Sheets
//!
//! Arquitectura:
//! - El navegador consume /api/* y renderiza las listas
//! - El flujo OAuth2 (/auth + callback en /) persiste el token en disco
//! - Cada petición de /api obtiene su propio cliente autenticado
//! - La exportación escribe el roster en Google Sheets por un canal aparte
//!
//! Sin caché, sin reintentos, sin estado compartido más allá del token.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

// Importar módulos de la biblioteca
use classroom_sheets_middleware::{auth, config, services, utils, AppState};

mod handlers;

use auth::{handle_oauth_callback, start_oauth_flow, ClientCredentials, FileTokenStore, TokenManager};
use config::Settings;
use handlers::{
    exportar_estudiantes, health_check, list_cursos, list_entregas, list_estudiantes, list_tareas,
    status_check,
};
use services::{ExportService, SheetsService};
use utils::{logging::*, AppError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Cargar variables de entorno del archivo .env (si existe)
    if dotenvy::dotenv().is_err() {
        tracing::debug!("Archivo .env no encontrado - usando variables de entorno del sistema");
    }

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    // Cargar configuración
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Credenciales OAuth2 de la aplicación: se cargan una sola vez y se
    // inyectan; ningún otro componente relee credentials.json
    let credentials = ClientCredentials::load(&settings.google.credentials_path)?;
    log_info(&format!(
        "🔑 Credenciales cargadas desde {}",
        settings.google.credentials_path
    ));

    // Gestor de tokens con almacenamiento en archivo
    let store = Arc::new(FileTokenStore::new(&settings.google.token_path));
    let token_manager = TokenManager::new(credentials, settings.google.scopes.clone(), store);
    log_info("✅ TokenManager inicializado");

    // Servicio de exportación (canal de Sheets independiente del token OAuth2)
    let export = ExportService::new(SheetsService::new());
    if settings.sheets.spreadsheet_id.is_empty() {
        log_warning("⚠️  SPREADSHEET_ID no configurado: la exportación fallará hasta definirlo");
    }

    // Estado de la aplicación
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        token_manager,
        export,
    });

    // Rutas
    let app = Router::new()
        // Flujo OAuth2 (el callback de Google llega a la raíz)
        .route("/auth", get(start_oauth_flow))
        .route("/", get(handle_oauth_callback))
        // Health checks
        .route("/health", get(health_check))
        .route("/status", get(status_check))
        // API consumida por el frontend
        .route("/api/cursos", get(list_cursos))
        .route("/api/estudiantes/:course_id", get(list_estudiantes))
        .route("/api/tareas/:course_id", get(list_tareas))
        .route("/api/entregas/:course_id/:tarea_id", get(list_entregas))
        .route(
            "/api/exportar-estudiantes/:course_id",
            post(exportar_estudiantes),
        )
        // Archivos estáticos del frontend + CORS para la página local
        .fallback_service(ServeDir::new(&settings.server.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Iniciar servidor (PORT ya viene aplicado en Settings)
    let port = settings.server.port;
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(port);

    // Apagado ordenado con manejo de señales
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Manejo de señales para el apagado ordenado
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
