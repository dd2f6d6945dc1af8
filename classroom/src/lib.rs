//! Cliente de la API de Google Classroom
//!
//! Este crate ofrece una interfaz tipada y mínima sobre la API REST v1 de
//! Google Classroom, limitada a las operaciones de solo lectura que consume
//! el middleware:
//!
//! - Listado de cursos (`courses.list`)
//! - Listado de alumnos de un curso (`students.list`)
//! - Listado de tareas de un curso (`courseWork.list`)
//! - Listado de entregas de una tarea (`studentSubmissions.list`)
//!
//! # Autenticación
//!
//! El cliente no gestiona el flujo OAuth2: recibe un access token ya emitido
//! y lo adjunta como `Authorization: Bearer` en cada petición. La obtención y
//! persistencia del token es responsabilidad del llamador.
//!
//! # Semántica de resultados
//!
//! La API de Google omite el arreglo de resultados cuando no hay elementos;
//! este crate lo normaliza a una colección vacía. Un fallo de transporte o un
//! status no-2xx nunca se colapsa en una lista vacía: siempre se propaga como
//! [`ClassroomError`].
//!
//! # Ejemplo Básico
//!
//! ```rust,ignore
//! use classroom::ClassroomClient;
//!
//! #[tokio::main]
//! async fn main() -> classroom::Result<()> {
//!     let access_token = std::env::var("GOOGLE_ACCESS_TOKEN")
//!         .expect("GOOGLE_ACCESS_TOKEN no configurado");
//!
//!     let client = ClassroomClient::new(access_token)?;
//!     for curso in client.list_courses().await? {
//!         println!("{}: {}", curso.id, curso.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod client;
pub mod error;
pub mod types;

// Operaciones sobre el cliente
mod courses;
mod coursework;
mod rosters;

// Re-exports principales
pub use client::ClassroomClient;
pub use error::{ClassroomError, Result};
pub use types::{Course, CourseWork, Student, Submission};
