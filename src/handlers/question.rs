// src/handlers/question.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    config::QUESTION_PAGE_SIZE,
    error::{AppError, ErrorBody},
    models::question::{
        PaginatedQuestionParams, Question, QuestionListParams, QuestionWithStatus, RowRange,
    },
    state::SharedStore,
    utils::extract::ValidQuery,
};

/// Attaches the solved status of `student_id` to each question.
///
/// Issues one store lookup per question, in order. Pools are small (one quiz
/// unit), so the N+1 pattern is accepted here.
async fn with_solved_status(
    store: &SharedStore,
    student_id: i64,
    questions: Vec<Question>,
) -> Result<Vec<QuestionWithStatus>, AppError> {
    let mut records = Vec::with_capacity(questions.len());
    for question in questions {
        let solved = store
            .has_correct_answer(student_id, question.id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to check answers of student {} for question {}: {}",
                    student_id,
                    question.id,
                    e
                );
                AppError::from(e)
            })?;
        records.push(QuestionWithStatus { question, solved });
    }
    Ok(records)
}

/// Lists every question of a pool with the student's solved status.
#[utoipa::path(
    get,
    path = "/getAllPreguntas",
    tag = "preguntas",
    params(QuestionListParams),
    responses(
        (status = 200, description = "Questions of the pool in store order", body = [QuestionWithStatus]),
        (status = 400, description = "Missing or malformed parameters", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_questions(
    State(store): State<SharedStore>,
    ValidQuery(params): ValidQuery<QuestionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store
        .list_questions(params.tipo, &params.id_tipo, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions: {}", e);
            AppError::from(e)
        })?;

    let records = with_solved_status(&store, params.id_estudiante, questions).await?;
    Ok(Json(records))
}

/// Lists one page (10 questions) of a pool with the student's solved status.
#[utoipa::path(
    get,
    path = "/getPreguntasPaginado",
    tag = "preguntas",
    params(PaginatedQuestionParams),
    responses(
        (status = 200, description = "One page of questions; empty past the last page", body = [QuestionWithStatus]),
        (status = 400, description = "Page below 1 or malformed parameters", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_questions_paginated(
    State(store): State<SharedStore>,
    ValidQuery(params): ValidQuery<PaginatedQuestionParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    // A page whose offset overflows lies past any stored row.
    let Some(range) = RowRange::page(params.paginado, QUESTION_PAGE_SIZE) else {
        return Ok(Json(Vec::<QuestionWithStatus>::new()));
    };

    let questions = store
        .list_questions(params.tipo, &params.id_tipo, Some(range))
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch question page {}: {}", params.paginado, e);
            AppError::from(e)
        })?;

    let records = with_solved_status(&store, params.id_estudiante, questions).await?;
    Ok(Json(records))
}
