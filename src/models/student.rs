// src/models/student.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::grade::Grade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

/// DTO for `/registrarEstudiante`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterStudentRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "nombre must be between 1 and 100 characters."
    ))]
    #[schema(min_length = 1, max_length = 100)]
    pub nombre: String,
    pub sexo: Sex,
    pub grado: Grade,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterStudentResponse {
    pub id: i64,
}
