// src/handlers/health.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    models::health::{HealthReport, MessageResponse},
    state::SharedStore,
};

/// Static liveness message.
#[utoipa::path(
    get,
    path = "/",
    tag = "salud",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse::new("MINEDU RAG API funcionando correctamente"))
}

/// Checks the store with a row count.
/// A failure is reported in the payload; the status code stays 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "salud",
    responses((status = 200, description = "Store reachability diagnostic", body = HealthReport))
)]
pub async fn health_check(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.count_topics().await {
        Ok(_) => Json(HealthReport::reachable()),
        Err(e) => {
            tracing::warn!("Health check could not reach the store: {}", e);
            Json(HealthReport::unreachable(e.to_string()))
        }
    }
}
