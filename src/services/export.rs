//! Exportación del roster de un curso a Google Sheets

use classroom::ClassroomClient;
use serde::Serialize;

use super::sheets::SheetsService;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Resultado de una exportación
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub row_count: usize,
}

#[derive(Clone)]
pub struct ExportService {
    sheets: SheetsService,
}

impl ExportService {
    pub fn new(sheets: SheetsService) -> Self {
        Self { sheets }
    }

    /// Exporta el roster de un curso a la hoja de cálculo configurada
    ///
    /// Con roster vacío no se toca la API de Sheets: no se genera un
    /// documento con solo encabezado. La escritura no es transaccional: un
    /// fallo después del encabezado puede dejar filas parciales ya escritas
    /// y no se revierten.
    ///
    /// # Parámetros
    /// - `client`: cliente autenticado de Classroom
    /// - `course_id`: curso cuyos alumnos se exportan
    /// - `spreadsheet_id`: documento destino
    pub async fn export_roster(
        &self,
        client: &ClassroomClient,
        course_id: &str,
        spreadsheet_id: &str,
    ) -> AppResult<ExportResult> {
        if spreadsheet_id.is_empty() {
            return Err(AppError::ConfigError(
                "sheets.spreadsheet_id no configurado (SPREADSHEET_ID)".to_string(),
            ));
        }

        let alumnos = client.list_students(course_id).await?;

        if alumnos.is_empty() {
            log_info(&format!(
                "ℹ️  Curso {} sin alumnos inscritos; no se exporta nada",
                course_id
            ));
            return Ok(ExportResult { row_count: 0 });
        }

        self.sheets.set_header_row(spreadsheet_id).await?;

        let rows: Vec<Vec<String>> = alumnos
            .iter()
            .map(|s| {
                vec![
                    s.user_id.clone(),
                    s.full_name.clone(),
                    s.email_address.clone(),
                ]
            })
            .collect();

        self.sheets.append_rows(spreadsheet_id, &rows).await?;

        log_export_completed(course_id, rows.len());

        Ok(ExportResult {
            row_count: rows.len(),
        })
    }
}
