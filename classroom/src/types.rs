//! Proyecciones de dominio de la API de Google Classroom
//!
//! Las respuestas de la API traen muchos más campos; aquí se conservan solo
//! los que consume el frontend. Todos los tipos son efímeros: viven lo que
//! dura la petición que los obtuvo y nunca se persisten.

use serde::{Deserialize, Serialize};

/// Un curso de Classroom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

/// Un alumno inscrito en un curso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub user_id: String,
    pub full_name: String,
    pub email_address: String,
}

/// Una tarea (courseWork) de un curso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseWork {
    pub id: String,
    pub title: String,
}

/// La entrega de un alumno para una tarea
///
/// `state` llega tal cual de la API (`NEW`, `CREATED`, `TURNED_IN`,
/// `RETURNED`, ...); no se reinterpreta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub user_id: String,
    pub state: String,
}
