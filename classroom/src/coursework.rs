//! Listado de tareas (courseWork) y entregas (studentSubmissions)

use crate::client::ClassroomClient;
use crate::error::Result;
use crate::types::{CourseWork, Submission};
use serde::Deserialize;

/// Respuesta de `GET /courses/{id}/courseWork`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCourseWorkResponse {
    #[serde(default)]
    course_work: Vec<CourseWorkResource>,
}

#[derive(Debug, Deserialize)]
struct CourseWorkResource {
    id: String,
    title: String,
}

/// Respuesta de `GET /courses/{id}/courseWork/{cwId}/studentSubmissions`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSubmissionsResponse {
    #[serde(default)]
    student_submissions: Vec<SubmissionResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionResource {
    user_id: String,
    state: String,
}

impl ClassroomClient {
    /// Lista las tareas asignadas en un curso
    pub async fn list_course_work(&self, course_id: &str) -> Result<Vec<CourseWork>> {
        let endpoint = format!("/courses/{}/courseWork", urlencoding::encode(course_id));
        let response: ListCourseWorkResponse =
            self.get_json(&endpoint, "courseWork.list").await?;

        Ok(response
            .course_work
            .into_iter()
            .map(|cw| CourseWork {
                id: cw.id,
                title: cw.title,
            })
            .collect())
    }

    /// Lista las entregas de los alumnos para una tarea concreta
    ///
    /// La API de Classroom lista entregas por courseWork: ambos ids son
    /// obligatorios.
    pub async fn list_submissions(
        &self,
        course_id: &str,
        course_work_id: &str,
    ) -> Result<Vec<Submission>> {
        let endpoint = format!(
            "/courses/{}/courseWork/{}/studentSubmissions",
            urlencoding::encode(course_id),
            urlencoding::encode(course_work_id)
        );
        let response: ListSubmissionsResponse = self
            .get_json(&endpoint, "studentSubmissions.list")
            .await?;

        Ok(response
            .student_submissions
            .into_iter()
            .map(|s| Submission {
                user_id: s.user_id,
                state: s.state,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassroomError;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn lists_course_work_titles() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/courses/C1/courseWork");
            then.status(200).json_body(json!({
                "courseWork": [
                    {"id": "T1", "title": "Ensayo", "workType": "ASSIGNMENT"},
                    {"id": "T2", "title": "Examen parcial"}
                ]
            }));
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let tareas = client.list_course_work("C1").await.unwrap();

        mock.assert();
        assert_eq!(
            tareas,
            vec![
                CourseWork {
                    id: "T1".into(),
                    title: "Ensayo".into()
                },
                CourseWork {
                    id: "T2".into(),
                    title: "Examen parcial".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn lists_submissions_for_a_course_work() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/courses/C1/courseWork/T1/studentSubmissions");
            then.status(200).json_body(json!({
                "studentSubmissions": [
                    {"id": "S1", "userId": "U1", "state": "TURNED_IN"},
                    {"id": "S2", "userId": "U2", "state": "NEW"}
                ]
            }));
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let entregas = client.list_submissions("C1", "T1").await.unwrap();

        mock.assert();
        assert_eq!(
            entregas,
            vec![
                Submission {
                    user_id: "U1".into(),
                    state: "TURNED_IN".into()
                },
                Submission {
                    user_id: "U2".into(),
                    state: "NEW".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_submissions_field_yields_empty_vec() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/courses/C1/courseWork/T1/studentSubmissions");
            then.status(200).json_body(json!({}));
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let entregas = client.list_submissions("C1", "T1").await.unwrap();

        assert!(entregas.is_empty());
    }

    #[tokio::test]
    async fn course_work_error_carries_operation() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/courses/C1/courseWork");
            then.status(401).json_body(json!({
                "error": {"code": 401, "message": "Invalid Credentials", "status": "UNAUTHENTICATED"}
            }));
        });

        let client = ClassroomClient::with_base_url("tok", server.base_url()).unwrap();
        let err = client.list_course_work("C1").await.unwrap_err();

        assert_eq!(err.operation(), Some("courseWork.list"));
        assert!(matches!(err, ClassroomError::ApiError { status: 401, .. }));
    }
}
