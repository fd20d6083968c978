// src/handlers/topic.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::{AppError, ErrorBody},
    models::topic::{Topic, TopicDetail, TopicDetailParams, TopicListParams, number_from_one},
    state::SharedStore,
    utils::extract::ValidQuery,
};

/// Lists every topic of a grade.
#[utoipa::path(
    get,
    path = "/getTodosTemas",
    tag = "temas",
    params(TopicListParams),
    responses(
        (status = 200, description = "Topics of the grade, possibly empty", body = [Topic]),
        (status = 400, description = "Missing or unknown grade", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_topics(
    State(store): State<SharedStore>,
    ValidQuery(params): ValidQuery<TopicListParams>,
) -> Result<impl IntoResponse, AppError> {
    let topics = store.list_topics(params.grado).await.map_err(|e| {
        tracing::error!("Failed to list topics: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(topics))
}

/// Retrieves a topic with its characters and researchers.
///
/// Characters and researchers are keyed by their 1-based position in the
/// order the store returns them.
#[utoipa::path(
    get,
    path = "/getTemaEspecifico",
    tag = "temas",
    params(TopicDetailParams),
    responses(
        (status = 200, description = "Topic with numbered characters and researchers", body = TopicDetail),
        (status = 400, description = "Missing or malformed parameters", body = ErrorBody),
        (status = 404, description = "No topic with that id in that grade", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_topic(
    State(store): State<SharedStore>,
    ValidQuery(params): ValidQuery<TopicDetailParams>,
) -> Result<impl IntoResponse, AppError> {
    let topic = store
        .find_topic(params.grado, params.id_tema)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch topic {}: {}", params.id_tema, e);
            AppError::from(e)
        })?
        .ok_or(AppError::NotFound("Tema no encontrado".to_string()))?;

    let characters = store.list_characters(params.id_tema).await.map_err(|e| {
        tracing::error!("Failed to fetch characters of topic {}: {}", params.id_tema, e);
        AppError::from(e)
    })?;

    let researchers = store.list_researchers(params.id_tema).await.map_err(|e| {
        tracing::error!("Failed to fetch researchers of topic {}: {}", params.id_tema, e);
        AppError::from(e)
    })?;

    Ok(Json(TopicDetail {
        topic,
        characters: number_from_one(characters),
        researchers: number_from_one(researchers),
    }))
}
