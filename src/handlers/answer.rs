// src/handlers/answer.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::{AppError, ErrorBody},
    models::{
        answer::{AnswerHistoryEntry, AnswerHistoryParams, NewAnswer, SubmitAnswerRequest},
        health::MessageResponse,
    },
    state::SharedStore,
    utils::{
        extract::{ValidJson, ValidQuery},
        time::elapsed_seconds,
    },
};

/// Returns every answer a student submitted, with the time spent on each.
#[utoipa::path(
    get,
    path = "/getAllRespuestas",
    tag = "respuestas",
    params(AnswerHistoryParams),
    responses(
        (status = 200, description = "Answers of the student in store order", body = [AnswerHistoryEntry]),
        (status = 400, description = "Missing or malformed student id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_answers(
    State(store): State<SharedStore>,
    ValidQuery(params): ValidQuery<AnswerHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let records = store.list_answers(params.id_estudiante).await.map_err(|e| {
        tracing::error!("Failed to fetch answers of student {}: {}", params.id_estudiante, e);
        AppError::from(e)
    })?;

    let mut history = Vec::with_capacity(records.len());
    for record in records {
        let duracion = elapsed_seconds(&record.started_at, &record.submitted_at).map_err(|e| {
            AppError::InternalServerError(format!(
                "invalid timestamp on answer to question {}: {}",
                record.question_id, e
            ))
        })?;

        history.push(AnswerHistoryEntry {
            id_pregunta: record.question_id,
            pregunta: record.prompt,
            resultado: record.result,
            duracion,
        });
    }

    Ok(Json(history))
}

/// Records one answer of a student.
///
/// Returns 201 Created. Existence of the question and the student is left to
/// the store's foreign keys.
#[utoipa::path(
    post,
    path = "/enviarRespuesta",
    tag = "respuestas",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 201, description = "Answer recorded", body = MessageResponse),
        (status = 400, description = "Invalid payload or insert rejected", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn submit_answer(
    State(store): State<SharedStore>,
    ValidJson(req): ValidJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let answer = NewAnswer::from(req);

    let inserted = store.insert_answer(&answer).await.map_err(|e| {
        tracing::error!("Failed to insert answer: {}", e);
        AppError::from(e)
    })?;

    match inserted {
        Some(id) => {
            tracing::info!(
                "Answer {} recorded for student {} on question {}",
                id,
                answer.student_id,
                answer.question_id
            );
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Respuesta enviada exitosamente")),
            ))
        }
        None => Err(AppError::InsertRejected(
            "Error al enviar la respuesta".to_string(),
        )),
    }
}
