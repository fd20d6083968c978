// src/models/answer.rs

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::utils::time::deserialize_instant;

/// DTO for `/enviarRespuesta`. Every field is required.
///
/// Timestamps without an offset are taken as UTC.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitAnswerRequest {
    pub id_pregunta: i64,
    pub id_estudiante: i64,
    pub resultado: bool,
    #[serde(deserialize_with = "deserialize_instant")]
    pub tiempo_inicio_pregunta: DateTime<FixedOffset>,
    #[serde(deserialize_with = "deserialize_instant")]
    pub tiempo_envio_respuesta: DateTime<FixedOffset>,
}

/// Answer ready to be inserted into the 'respuesta' table.
/// Timestamps are already serialized as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: i64,
    pub student_id: i64,
    pub result: bool,
    pub started_at: String,
    pub submitted_at: String,
}

impl From<SubmitAnswerRequest> for NewAnswer {
    fn from(req: SubmitAnswerRequest) -> Self {
        Self {
            question_id: req.id_pregunta,
            student_id: req.id_estudiante,
            result: req.resultado,
            started_at: req.tiempo_inicio_pregunta.to_rfc3339(),
            submitted_at: req.tiempo_envio_respuesta.to_rfc3339(),
        }
    }
}

/// A 'respuesta' row joined with the prompt of its question.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRecord {
    pub question_id: i64,
    pub prompt: String,
    pub result: bool,
    pub started_at: String,
    pub submitted_at: String,
}

/// One entry of a student's answer history.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerHistoryEntry {
    pub id_pregunta: i64,
    pub pregunta: String,
    pub resultado: bool,
    /// Seconds between showing the question and submitting the answer.
    pub duracion: i64,
}

/// Query parameters for `/getAllRespuestas`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnswerHistoryParams {
    pub id_estudiante: i64,
}
