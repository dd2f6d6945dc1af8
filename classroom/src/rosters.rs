//! Listado de alumnos (roster) de un curso

use crate::client::ClassroomClient;
use crate::error::Result;
use crate::types::Student;
use serde::Deserialize;

/// Respuesta de `GET /courses/{id}/students`
#[derive(Debug, Deserialize)]
struct ListStudentsResponse {
    #[serde(default)]
    students: Vec<StudentResource>,
}

/// Recurso `students` tal como lo devuelve la API (perfil anidado)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentResource {
    user_id: String,
    profile: Profile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Profile {
    name: ProfileName,
    #[serde(default)]
    email_address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileName {
    #[serde(default)]
    full_name: String,
}

impl ClassroomClient {
    /// Lista los alumnos inscritos en un curso
    ///
    /// Aplana `profile.name.fullName` y `profile.emailAddress` en un
    /// [`Student`] simple. Un curso sin alumnos devuelve una colección
    /// vacía, no un error.
    pub async fn list_students(&self, course_id: &str) -> Result<Vec<Student>> {
        let endpoint = format!("/courses/{}/students", urlencoding::encode(course_id));
        let response: ListStudentsResponse = self.get_json(&endpoint, "students.list").await?;

        Ok(response
            .students
            .into_iter()
            .map(|s| Student {
                user_id: s.user_id,
                full_name: s.profile.name.full_name,
                email_address: s.profile.email_address,
            })
            .collect())
    }
}
