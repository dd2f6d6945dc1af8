//! Cliente HTTP OAuth2
//!
//! Cliente aislado para hablar con el endpoint de tokens de Google.

use reqwest::Client;

use super::credentials::ClientCredentials;
use super::token::{TokenResponse, TokenSet};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Cliente OAuth2 contra el endpoint de token de Google
#[derive(Clone)]
pub struct OAuth2Client {
    credentials: ClientCredentials,
    http_client: Client,
    token_url: String,
}

impl OAuth2Client {
    /// Crea un nuevo cliente OAuth2
    pub fn new(credentials: ClientCredentials) -> Self {
        Self::with_token_url(credentials, GOOGLE_TOKEN_URL)
    }

    /// Cliente apuntando a otro endpoint de token (tests)
    pub fn with_token_url(credentials: ClientCredentials, token_url: impl Into<String>) -> Self {
        Self {
            credentials,
            http_client: Client::new(),
            token_url: token_url.into(),
        }
    }

    /// Intercambia un authorization code por un par de tokens
    ///
    /// # Parámetros
    /// - `code`: authorization code recibido en el callback
    ///
    /// # Retorno
    /// - `Ok(TokenSet)`: tokens listos para persistir
    /// - `Err(AppError::AuthExchange)`: código rechazado o fallo de red
    pub async fn exchange_code(&self, code: &str) -> AppResult<TokenSet> {
        log_info("🔐 [OAuth2] Intercambiando authorization code por access token...");

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::AuthExchange(format!(
                    "No se pudo conectar con el endpoint de token: {}",
                    e
                ))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_error(&format!(
                "❌ [OAuth2] Token exchange failed: {} - {}",
                status, error_text
            ));
            return Err(AppError::AuthExchange(format!(
                "OAuth token exchange failed [{}]: {}",
                status, error_text
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            AppError::AuthExchange(format!("No se pudo parsear la respuesta del token: {}", e))
        })?;

        log_info("✅ [OAuth2] Access token obtenido");

        Ok(token_response.into())
    }
}
