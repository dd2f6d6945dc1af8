use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_classroom_api_error(operation: &str, error: &str) {
    error!("Classroom API error: {} - {}", operation, error);
}

pub fn log_sheets_api_error(endpoint: &str, status: Option<u16>, error: &str) {
    error!(
        "Sheets API error: {} - Status: {:?} - Error: {}",
        endpoint, status, error
    );
}

pub fn log_export_completed(course_id: &str, rows: usize) {
    info!(
        "📤 Alumnos exportados a Sheets: curso {} - {} filas",
        course_id, rows
    );
}

pub fn log_token_stored() {
    info!("💾 Token OAuth2 persistido en disco");
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 Classroom-Sheets middleware server starting on port {}", port);
}

pub fn log_server_ready(port: u16) {
    info!("✅ Server ready and listening on http://0.0.0.0:{}", port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_integration_status_check() {
    debug!("Integration status check requested");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
