//! Ciclo de vida del token OAuth2
//!
//! Genera la URL de consentimiento, intercambia el authorization code y
//! entrega clientes autenticados construidos a partir del token persistido.
//! Estados: sin token (solo sirve /auth) → token persistido (todas las
//! operaciones), hasta que el almacenamiento se borre externamente o Google
//! revoque el token (lo que se detecta recién al fallar una llamada).

use std::sync::Arc;

use classroom::ClassroomClient;

use super::client::OAuth2Client;
use super::credentials::ClientCredentials;
use super::token::TokenSet;
use super::token_store::TokenStore;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Gestor del token OAuth2 de la aplicación (un solo juego de credenciales)
#[derive(Clone)]
pub struct TokenManager {
    credentials: ClientCredentials,
    scopes: Vec<String>,
    oauth_client: OAuth2Client,
    store: Arc<dyn TokenStore>,
}

impl TokenManager {
    /// Crea el gestor con el cliente OAuth2 por defecto de Google
    pub fn new(
        credentials: ClientCredentials,
        scopes: Vec<String>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let oauth_client = OAuth2Client::new(credentials.clone());
        Self {
            credentials,
            scopes,
            oauth_client,
            store,
        }
    }

    /// Variante con cliente OAuth2 propio (tests: endpoint de token falso)
    pub fn with_oauth_client(
        credentials: ClientCredentials,
        scopes: Vec<String>,
        store: Arc<dyn TokenStore>,
        oauth_client: OAuth2Client,
    ) -> Self {
        Self {
            credentials,
            scopes,
            oauth_client,
            store,
        }
    }

    /// Genera la URL de consentimiento de Google
    ///
    /// Determinista: no toca red ni disco. `access_type=offline` pide un
    /// refresh token en la primera autorización.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline",
            GOOGLE_AUTH_URL,
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(&self.credentials.redirect_uri),
            urlencoding::encode(&self.scopes.join(" ")),
        )
    }

    /// Intercambia el authorization code y persiste el resultado
    ///
    /// Una re-autorización sobrescribe el token anterior (last-write-wins;
    /// carrera aceptada en una herramienta mono-operador).
    pub async fn exchange_code(&self, code: &str) -> AppResult<TokenSet> {
        let token = self.oauth_client.exchange_code(code).await?;
        self.store.save(&token)?;
        log_token_stored();

        Ok(token)
    }

    /// Construye un cliente autenticado con el token almacenado
    ///
    /// # Retorno
    /// - `Err(AppError::MissingToken)` si nunca se autorizó la aplicación:
    ///   el operador debe pasar primero por /auth
    pub fn authenticated_client(&self) -> AppResult<ClassroomClient> {
        let token = self.store.load()?.ok_or(AppError::MissingToken)?;

        if token.is_expired() {
            // No se renueva localmente: la llamada a la API lo confirmará
            log_warning("⚠️  [OAuth2] El access token almacenado parece vencido");
        }

        ClassroomClient::new(token.access_token).map_err(|e| {
            AppError::InternalError(format!("No se pudo crear el cliente de Classroom: {}", e))
        })
    }

    /// Indica si hay un token persistido (para /status)
    pub fn has_stored_token(&self) -> bool {
        matches!(self.store.load(), Ok(Some(_)))
    }
}
