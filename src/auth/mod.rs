//! # Módulo de autenticación OAuth2 con Google
//!
//! Módulo aislado que concentra el ciclo de vida del token:
//! - Generar la URL de consentimiento
//! - Intercambiar el authorization code por un par de tokens
//! - Persistir y reutilizar el TokenSet
//! - Entregar clientes autenticados para la API de Classroom
//!
//! ## Estructura:
//! - `credentials.rs`: credenciales de la aplicación (credentials.json)
//! - `token.rs`: TokenSet persistido y respuesta del endpoint de token
//! - `token_store.rs`: abstracción de almacenamiento + archivo JSON
//! - `client.rs`: cliente HTTP del endpoint de token
//! - `token_manager.rs`: orquestación del ciclo de vida
//! - `handlers.rs`: handlers HTTP (/auth y callback en /)

pub mod client;
pub mod credentials;
pub mod handlers;
pub mod token;
pub mod token_manager;
pub mod token_store;

pub use client::OAuth2Client;
pub use credentials::ClientCredentials;
pub use handlers::{handle_oauth_callback, start_oauth_flow};
pub use token::TokenSet;
pub use token_manager::TokenManager;
pub use token_store::{FileTokenStore, TokenStore};
