//! TokenSet persistido y respuesta del endpoint de token de Google

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Par de tokens emitido por Google, con expiración absoluta
///
/// Se crea en la primera autorización, se sobrescribe en cada
/// re-autorización y nunca lo borra el sistema (eso queda en manos del
/// operador).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Expiración del access token como timestamp unix (segundos)
    pub expiry: i64,
}

impl TokenSet {
    /// Indica si el access token ya venció
    ///
    /// Solo informativo: la expiración real la confirma la llamada a la API,
    /// no se renueva proactivamente.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expiry
    }
}

/// Respuesta cruda del endpoint de token de Google
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Vigencia en segundos relativa al momento de emisión
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expiry: Utc::now().timestamp() + response.expires_in,
        }
    }
}
