//! Handlers HTTP del flujo OAuth2
//!
//! Endpoints para iniciar el flujo de consentimiento y recibir el callback
//! de Google en la raíz del servidor.

use axum::{
    extract::{Query, State},
    response::{Json, Redirect},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// Parámetros del callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code devuelto por Google
    code: Option<String>,
    /// Error devuelto por Google (si el operador rechazó el consentimiento)
    error: Option<String>,
}

/// GET /auth
///
/// Redirige al operador a la pantalla de consentimiento de Google.
pub async fn start_oauth_flow(State(state): State<Arc<AppState>>) -> Redirect {
    log_request_received("/auth", "GET");

    let auth_url = state.token_manager.authorization_url();
    log_info(&format!("↗️  [OAuth2] Redirigiendo a: {}", auth_url));

    Redirect::to(&auth_url)
}

/// GET /?code=XXX
///
/// Callback de Google: intercambia el code por tokens y los persiste.
///
/// # Códigos de estado
/// - 200: autenticación completada
/// - 400: falta el parámetro `code` (o el consentimiento fue rechazado)
/// - 500: Google rechazó el intercambio
pub async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OAuthCallbackParams>,
) -> AppResult<Json<Value>> {
    log_request_received("/", "GET");

    if let Some(error) = params.error {
        log_error(&format!("❌ [OAuth2] Autorización rechazada: {}", error));
        return Err(AppError::ValidationError(format!(
            "Autorización rechazada: {}",
            error
        )));
    }

    let code = params.code.ok_or_else(|| {
        log_error("❌ [OAuth2] Código de autorización no recibido");
        AppError::ValidationError("Código de autorización no recibido".to_string())
    })?;

    state.token_manager.exchange_code(&code).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Autenticación exitosa"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::TokenSet;
    use crate::auth::token_store::TokenStore;
    use crate::auth::{ClientCredentials, OAuth2Client, TokenManager};
    use crate::config::settings::{GoogleSettings, ServerSettings, Settings, SheetsSettings};
    use crate::services::{ExportService, SheetsService};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct MemoryStore(Mutex<Option<TokenSet>>);

    impl TokenStore for MemoryStore {
        fn load(&self) -> AppResult<Option<TokenSet>> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn save(&self, token: &TokenSet) -> AppResult<()> {
            *self.0.lock().unwrap() = Some(token.clone());
            Ok(())
        }
    }

    fn test_state(token_url: &str) -> Arc<AppState> {
        let credentials = ClientCredentials {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            redirect_uri: "http://localhost:3000".to_string(),
        };
        let scopes =
            vec!["https://www.googleapis.com/auth/classroom.courses.readonly".to_string()];
        let store = Arc::new(MemoryStore(Mutex::new(None)));
        let oauth_client = OAuth2Client::with_token_url(credentials.clone(), token_url);
        let token_manager =
            TokenManager::with_oauth_client(credentials, scopes, store, oauth_client);

        let settings = Settings {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "static".to_string(),
            },
            google: GoogleSettings {
                credentials_path: "credentials.json".to_string(),
                token_path: "token.json".to_string(),
                scopes: vec![],
            },
            sheets: SheetsSettings {
                spreadsheet_id: "SHEET1".to_string(),
            },
        };

        Arc::new(AppState {
            settings,
            token_manager,
            export: ExportService::new(SheetsService::with_token("t", "http://localhost:1")),
        })
    }

    #[tokio::test]
    async fn callback_without_code_is_a_validation_error() {
        let state = test_state("http://localhost:1/token");

        let params = OAuthCallbackParams {
            code: None,
            error: None,
        };
        let err = handle_oauth_callback(State(state), Query(params))
            .await
            .unwrap_err();

        // ValidationError se traduce a 400 en la frontera HTTP
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn callback_with_code_exchanges_and_persists() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({
                "access_token": "ya29.fresh",
                "refresh_token": "1//refresh",
                "expires_in": 3600
            }));
        });

        let state = test_state(&server.url("/token"));

        let params = OAuthCallbackParams {
            code: Some("4/abc".to_string()),
            error: None,
        };
        let Json(body) = handle_oauth_callback(State(state.clone()), Query(params))
            .await
            .unwrap();

        assert_eq!(body["success"], json!(true));
        // El token quedó persistido: las siguientes peticiones ya no
        // necesitan código
        assert!(state.token_manager.authenticated_client().is_ok());
    }

    #[tokio::test]
    async fn callback_with_denied_consent_is_a_validation_error() {
        let state = test_state("http://localhost:1/token");

        let params = OAuthCallbackParams {
            code: None,
            error: Some("access_denied".to_string()),
        };
        let err = handle_oauth_callback(State(state), Query(params))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
