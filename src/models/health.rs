// src/models/health.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Diagnostic payload of `/health`. Always returned with status 200.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReport {
    pub status: String,
    pub database: String,
    pub tables_accessible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl HealthReport {
    pub fn reachable() -> Self {
        Self {
            status: "OK".to_string(),
            database: "Connected".to_string(),
            tables_accessible: true,
            error: None,
            message: "Conexión a la base de datos exitosa".to_string(),
        }
    }

    pub fn unreachable(error: String) -> Self {
        Self {
            status: "ERROR".to_string(),
            database: "Failed".to_string(),
            tables_accessible: false,
            error: Some(error),
            message: "Error de conexión a la base de datos".to_string(),
        }
    }
}

/// Payload of the liveness endpoint and of successful submissions.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
