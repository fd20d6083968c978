// src/handlers/student.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::{AppError, ErrorBody},
    models::student::{RegisterStudentRequest, RegisterStudentResponse},
    state::SharedStore,
    utils::extract::ValidJson,
};

/// Registers a new student and returns the identifier assigned by the store.
#[utoipa::path(
    post,
    path = "/registrarEstudiante",
    tag = "estudiantes",
    request_body = RegisterStudentRequest,
    responses(
        (status = 200, description = "Identifier of the new student", body = RegisterStudentResponse),
        (status = 400, description = "Invalid payload or insert rejected", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn register_student(
    State(store): State<SharedStore>,
    ValidJson(payload): ValidJson<RegisterStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = store
        .insert_student(&payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to register student: {}", e);
            AppError::from(e)
        })?
        .ok_or(AppError::InsertRejected(
            "Error al registrar el estudiante".to_string(),
        ))?;

    tracing::info!("Registered student {}", id);
    Ok(Json(RegisterStudentResponse { id }))
}
