use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Scopes por defecto: solo lectura de cursos y rosters, coursework propio
const DEFAULT_SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/classroom.courses.readonly",
    "https://www.googleapis.com/auth/classroom.rosters.readonly",
    "https://www.googleapis.com/auth/classroom.coursework.me",
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub sheets: SheetsSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleSettings {
    pub credentials_path: String,
    pub token_path: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SheetsSettings {
    pub spreadsheet_id: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Valores por defecto (funcionan sin archivo de configuración)
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("google.credentials_path", "credentials.json")?
            .set_default("google.token_path", "token.json")?
            .set_default("google.scopes", DEFAULT_SCOPES.to_vec())?
            .set_default("sheets.spreadsheet_id", "")?
            // Archivo de configuración base
            .add_source(File::with_name("config/default").required(false))
            // Archivo específico del entorno
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Variables de entorno específicas
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(path) = std::env::var("CREDENTIALS_PATH") {
            builder = builder.set_override("google.credentials_path", path)?;
        }
        if let Ok(path) = std::env::var("TOKEN_PATH") {
            builder = builder.set_override("google.token_path", path)?;
        }
        if let Ok(scopes) = std::env::var("SCOPES") {
            // Lista separada por espacios, igual que en la URL de consentimiento
            let scopes: Vec<String> = scopes.split_whitespace().map(str::to_string).collect();
            builder = builder.set_override("google.scopes", scopes)?;
        }
        if let Ok(id) = std::env::var("SPREADSHEET_ID") {
            builder = builder.set_override("sheets.spreadsheet_id", id)?;
        }

        // También soportar el prefijo del proyecto
        builder = builder.add_source(Environment::with_prefix("CLASSROOM"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_override_defaults() {
        temp_env::with_vars(
            vec![
                ("PORT", Some("4000")),
                ("TOKEN_PATH", Some("/tmp/token-test.json")),
                (
                    "SCOPES",
                    Some("https://example.com/scope.a https://example.com/scope.b"),
                ),
            ],
            || {
                let settings = Settings::new().unwrap();

                assert_eq!(settings.server.port, 4000);
                assert_eq!(settings.google.token_path, "/tmp/token-test.json");
                assert_eq!(
                    settings.google.scopes,
                    vec![
                        "https://example.com/scope.a".to_string(),
                        "https://example.com/scope.b".to_string(),
                    ]
                );
            },
        );
    }

    #[test]
    fn defaults_apply_without_env() {
        temp_env::with_vars_unset(
            vec!["PORT", "CREDENTIALS_PATH", "TOKEN_PATH", "SCOPES", "SPREADSHEET_ID"],
            || {
                let settings = Settings::new().unwrap();

                assert_eq!(settings.server.port, 3000);
                assert_eq!(settings.google.credentials_path, "credentials.json");
                assert_eq!(settings.google.scopes.len(), 3);
            },
        );
    }
}
