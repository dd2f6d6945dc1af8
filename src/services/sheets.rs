//! Cliente de la API de Google Sheets
//!
//! Canal autenticado independiente del flujo OAuth2 del operador: usa las
//! Application Default Credentials del entorno (gcloud), de modo que una
//! credencial de servicio distinta de la del TokenManager escribe la hoja.

use anyhow::{anyhow, Result as AnyResult};
use reqwest::Client;
use serde_json::json;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// Encabezado que la exportación escribe en la primera hoja
pub const HEADER_ROW: [&str; 3] = ["ID del Estudiante", "Nombre", "Correo Electrónico"];

#[derive(Clone)]
pub struct SheetsService {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SheetsService {
    /// Servicio contra la API real; el token se resuelve en cada operación
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: SHEETS_API_BASE.to_string(),
            access_token: None,
        }
    }

    /// Servicio con token y URL base fijos (tests)
    pub fn with_token(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
        }
    }

    /// Resuelve el access token del canal de Sheets
    async fn get_access_token(&self) -> AppResult<String> {
        if let Some(token) = &self.access_token {
            return Ok(token.clone());
        }

        Self::adc_token().map_err(|e| {
            AppError::ExportError(format!("No se pudo obtener el token de Sheets: {}", e))
        })
    }

    /// Obtiene un access token de las Application Default Credentials
    fn adc_token() -> AnyResult<String> {
        let output = std::process::Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .map_err(|e| anyhow!("Failed to execute gcloud command: {}", e))?;

        if !output.status.success() {
            return Err(anyhow!(
                "Failed to get access token: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        let token = String::from_utf8(output.stdout)
            .map_err(|e| anyhow!("Invalid UTF-8 in token: {}", e))?
            .trim()
            .to_string();

        Ok(token)
    }

    /// Escribe la fila de encabezado en la primera hoja del documento
    pub async fn set_header_row(&self, spreadsheet_id: &str) -> AppResult<()> {
        let token = self.get_access_token().await?;
        let url = format!(
            "{}/spreadsheets/{}/values/A1:C1?valueInputOption=RAW",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        );

        let body = json!({
            "range": "A1:C1",
            "majorDimension": "ROWS",
            "values": [HEADER_ROW]
        });

        let response = self
            .client
            .put(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExportError(format!("No se pudo conectar con Sheets: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log_sheets_api_error(&url, Some(status.as_u16()), &error_text);
            return Err(AppError::ExportError(format!(
                "Sheets devolvió {} al escribir el encabezado: {}",
                status, error_text
            )));
        }

        Ok(())
    }

    /// Agrega filas al final de la primera hoja
    pub async fn append_rows(&self, spreadsheet_id: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let token = self.get_access_token().await?;
        let url = format!(
            "{}/spreadsheets/{}/values/A1:append?valueInputOption=RAW",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        );

        let body = json!({
            "majorDimension": "ROWS",
            "values": rows
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExportError(format!("No se pudo conectar con Sheets: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log_sheets_api_error(&url, Some(status.as_u16()), &error_text);
            return Err(AppError::ExportError(format!(
                "Sheets devolvió {} al agregar filas: {}",
                status, error_text
            )));
        }

        Ok(())
    }
}

impl Default for SheetsService {
    fn default() -> Self {
        Self::new()
    }
}
