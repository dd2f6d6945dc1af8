//! Almacenamiento durable del TokenSet
//!
//! El token vive en un único archivo JSON (herramienta mono-operador, un solo
//! juego de credenciales). La abstracción permite sustituir el almacenamiento
//! en tests sin tocar el TokenManager.

use std::path::PathBuf;

use super::token::TokenSet;
use crate::utils::{AppError, AppResult};

/// Capacidad de leer y escribir el TokenSet persistido
pub trait TokenStore: Send + Sync {
    /// Carga el token almacenado; `None` si nunca se autorizó
    fn load(&self) -> AppResult<Option<TokenSet>>;

    /// Persiste el token, sobrescribiendo el anterior
    fn save(&self, token: &TokenSet) -> AppResult<()>;
}

/// Almacenamiento en un archivo JSON (`token.json`)
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> AppResult<Option<TokenSet>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::ConfigError(format!("No se pudo leer {}: {}", self.path.display(), e))
        })?;
        let token = serde_json::from_str(&content)?;

        Ok(Some(token))
    }

    fn save(&self, token: &TokenSet) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::ConfigError(format!(
                        "No se pudo crear {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(token)?;
        std::fs::write(&self.path, json).map_err(|e| {
            AppError::ConfigError(format!("No se pudo escribir {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
