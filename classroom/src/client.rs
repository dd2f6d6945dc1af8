//! Cliente HTTP para la API de Google Classroom

use crate::error::{ClassroomError, Result};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://classroom.googleapis.com/v1";

/// Cliente autenticado contra la API de Google Classroom
///
/// Cada instancia queda ligada a un access token OAuth2 vigente que se envía
/// como `Authorization: Bearer` en todas las peticiones. El cliente es barato
/// de construir: se crea uno por petición entrante del middleware.
#[derive(Clone, Debug)]
pub struct ClassroomClient {
    http_client: HttpClient,
    access_token: String,
    base_url: String,
}

impl ClassroomClient {
    /// Crea un nuevo cliente ligado a un access token
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Crea un cliente apuntando a otra URL base (tests)
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                ClassroomError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: base_url.into(),
        })
    }

    /// Ejecuta una petición GET sobre la API
    pub(crate) async fn get(&self, endpoint: &str, operation: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response, operation).await
    }

    /// Ejecuta una petición GET y parsea el JSON de respuesta
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        operation: &'static str,
    ) -> Result<T> {
        let response = self.get(endpoint, operation).await?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Procesa la respuesta HTTP y traduce los errores de la API
    async fn handle_response(
        &self,
        response: Response,
        operation: &'static str,
    ) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(
                "Classroom API error in {} ({}): {}",
                operation,
                status_code,
                error_body
            );

            // Google envuelve el detalle en {"error": {"message": ...}}
            let message = if let Ok(json) = serde_json::from_str::<Value>(&error_body) {
                json.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or(error_body)
            } else {
                error_body
            };

            Err(ClassroomError::ApiError {
                operation,
                status: status_code,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn extracts_error_message_from_google_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/courses");
            then.status(403).json_body(json!({
                "error": {
                    "code": 403,
                    "message": "Request had insufficient authentication scopes.",
                    "status": "PERMISSION_DENIED"
                }
            }));
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let err = client.list_courses().await.unwrap_err();

        match err {
            ClassroomError::ApiError {
                operation,
                status,
                message,
            } => {
                assert_eq!(operation, "courses.list");
                assert_eq!(status, 403);
                assert_eq!(message, "Request had insufficient authentication scopes.");
            }
            other => panic!("se esperaba ApiError, se obtuvo {:?}", other),
        }
    }

    #[tokio::test]
    async fn keeps_raw_body_when_error_is_not_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/courses");
            then.status(500).body("upstream exploded");
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let err = client.list_courses().await.unwrap_err();

        match err {
            ClassroomError::ApiError {
                status, message, ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("se esperaba ApiError, se obtuvo {:?}", other),
        }
    }
}
