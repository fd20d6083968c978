// src/docs.rs

use utoipa::OpenApi;

use crate::handlers::{answer, health, question, student, topic};

/// OpenAPI description of the service, served at `/openapi.json` and
/// browsable at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MINEDU RAG API",
        description = "API para sistema educativo MINEDU",
        version = "1.0.0"
    ),
    paths(
        health::root,
        health::health_check,
        topic::list_topics,
        topic::get_topic,
        question::list_questions,
        question::list_questions_paginated,
        answer::list_answers,
        answer::submit_answer,
        student::register_student,
    ),
    tags(
        (name = "salud", description = "Liveness and store reachability"),
        (name = "temas", description = "Topics with their characters and researchers"),
        (name = "preguntas", description = "Quiz questions with solved status"),
        (name = "respuestas", description = "Answer submission and history"),
        (name = "estudiantes", description = "Student registration")
    )
)]
pub struct ApiDoc;
