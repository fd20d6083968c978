// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    handlers::{answer, health, question, student, topic},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Paths are served at the root, as the front-end expects.
/// * Serves the OpenAPI document at `/openapi.json` and Swagger UI at `/docs`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store handle and config).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/getTodosTemas", get(topic::list_topics))
        .route("/getTemaEspecifico", get(topic::get_topic))
        .route("/getAllPreguntas", get(question::list_questions))
        .route(
            "/getPreguntasPaginado",
            get(question::list_questions_paginated),
        )
        .route("/getAllRespuestas", get(answer::list_answers))
        .route("/enviarRespuesta", post(answer::submit_answer))
        .route("/registrarEstudiante", post(student::register_student))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Config, store::memory::MemoryStore};

    fn test_state(cors_origins: Vec<String>) -> AppState {
        AppState {
            store: Arc::new(MemoryStore::new()),
            config: Config {
                database_url: "postgres://localhost/minedu_test".to_string(),
                rust_log: "error".to_string(),
                log_dir: "logs".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0,
                max_connections: 1,
                run_migrations: false,
                cors_origins,
            },
        }
    }

    #[tokio::test]
    async fn allowed_origin_is_echoed() {
        let app = create_router(test_state(vec!["http://localhost:5173".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn any_origin_when_none_configured() {
        let app = create_router(test_state(Vec::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://otro.example.pe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
