// Handlers HTTP del middleware
pub mod classroom;
pub mod export;
pub mod health;

pub use classroom::*;
pub use export::*;
pub use health::*;

// Los handlers OAuth2 viven en src/auth/handlers.rs (módulo separado)
