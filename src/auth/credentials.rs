//! Credenciales OAuth2 de la aplicación
//!
//! Lee el archivo `credentials.json` descargado de Google Cloud Console
//! (formato de aplicación "installed") y valida su forma. Se carga una sola
//! vez al arrancar y se inyecta en el TokenManager.

use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

/// Contenido del archivo de credenciales: `{"installed": {...}}`
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    installed: InstalledCredentials,
}

#[derive(Debug, Deserialize)]
struct InstalledCredentials {
    #[serde(default)]
    client_id: String,
    #[serde(default)]
    client_secret: String,
    #[serde(default)]
    redirect_uris: Vec<String>,
}

/// Credenciales de cliente OAuth2, inmutables durante la vida del proceso
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// Primera redirect URI registrada para la aplicación
    pub redirect_uri: String,
}

impl ClientCredentials {
    /// Carga y valida las credenciales desde un archivo JSON
    ///
    /// # Retorno
    /// - `Err(AppError::ConfigError)`: archivo ilegible, sin la clave
    ///   `installed`, o con campos vacíos
    pub fn load(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("No se pudo leer {}: {}", path, e)))?;

        let file: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            AppError::ConfigError(format!(
                "Credenciales inválidas (se espera la clave \"installed\"): {}",
                e
            ))
        })?;

        let installed = file.installed;
        let redirect_uri = installed.redirect_uris.into_iter().next().ok_or_else(|| {
            AppError::ConfigError("redirect_uris vacío en credentials.json".to_string())
        })?;

        let credentials = Self {
            client_id: installed.client_id,
            client_secret: installed.client_secret,
            redirect_uri,
        };
        credentials.validate()?;

        Ok(credentials)
    }

    /// Valida que ningún campo esté vacío
    pub fn validate(&self) -> AppResult<()> {
        if self.client_id.is_empty() {
            return Err(AppError::ConfigError(
                "client_id vacío en credentials.json".to_string(),
            ));
        }
        if self.client_secret.is_empty() {
            return Err(AppError::ConfigError(
                "client_secret vacío en credentials.json".to_string(),
            ));
        }
        if self.redirect_uri.is_empty() {
            return Err(AppError::ConfigError(
                "redirect_uri vacío en credentials.json".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_credentials(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_installed_credentials() {
        let file = write_credentials(
            r#"{
                "installed": {
                    "client_id": "id-123.apps.googleusercontent.com",
                    "client_secret": "secret-abc",
                    "redirect_uris": ["http://localhost:3000", "http://localhost:3000/alt"]
                }
            }"#,
        );

        let credentials = ClientCredentials::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(credentials.client_id, "id-123.apps.googleusercontent.com");
        assert_eq!(credentials.client_secret, "secret-abc");
        // Se usa la primera redirect URI
        assert_eq!(credentials.redirect_uri, "http://localhost:3000");
    }

    #[test]
    fn rejects_file_without_installed_key() {
        let file = write_credentials(r#"{"web": {"client_id": "x"}}"#);

        let err = ClientCredentials::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn rejects_empty_client_id() {
        let file = write_credentials(
            r#"{
                "installed": {
                    "client_id": "",
                    "client_secret": "secret",
                    "redirect_uris": ["http://localhost:3000"]
                }
            }"#,
        );

        let err = ClientCredentials::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn rejects_missing_file() {
        let err = ClientCredentials::load("/nonexistent/credentials.json").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
