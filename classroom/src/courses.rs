//! Listado de cursos

use crate::client::ClassroomClient;
use crate::error::Result;
use crate::types::Course;
use serde::Deserialize;

/// Respuesta de `GET /courses`
///
/// La API omite el campo `courses` cuando no hay resultados.
#[derive(Debug, Deserialize)]
struct ListCoursesResponse {
    #[serde(default)]
    courses: Vec<CourseResource>,
}

#[derive(Debug, Deserialize)]
struct CourseResource {
    id: String,
    name: String,
}

impl ClassroomClient {
    /// Lista los cursos visibles para el usuario autenticado
    ///
    /// Devuelve una colección vacía cuando no hay cursos; cualquier fallo de
    /// transporte o de la API se propaga como error, nunca como lista vacía.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let response: ListCoursesResponse = self.get_json("/courses", "courses.list").await?;

        Ok(response
            .courses
            .into_iter()
            .map(|c| Course {
                id: c.id,
                name: c.name,
            })
            .collect())
    }
}
