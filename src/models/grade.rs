// src/models/grade.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// School year a topic or a student belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Primero,
    Segundo,
    Tercero,
    Cuarto,
    Quinto,
}

impl Grade {
    /// Value stored in the `grado` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Primero => "primero",
            Grade::Segundo => "segundo",
            Grade::Tercero => "tercero",
            Grade::Cuarto => "cuarto",
            Grade::Quinto => "quinto",
        }
    }
}
