// src/models/topic.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::grade::Grade;

/// Represents a row of the 'tema' table, as exposed to clients.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    #[serde(rename = "tema")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    /// URL of the topic illustration.
    #[serde(rename = "imagen")]
    pub image: String,
}

/// Represents a row of the 'personaje' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Character {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: String,
}

/// Represents a row of the 'investigador' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Researcher {
    #[serde(rename = "nombres")]
    pub full_name: String,

    #[serde(rename = "sexo")]
    pub sex: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    /// Whether the researcher comes from outside the capital.
    #[serde(rename = "es_provincia")]
    pub from_province: bool,

    /// Link to the researcher's RENACYT profile, when registered.
    #[serde(rename = "enlace_renacyt")]
    pub profile_link: Option<String>,

    #[serde(rename = "area")]
    pub subject_area: String,

    #[serde(rename = "imagen")]
    pub image: String,
}

/// Query parameters for `/getTodosTemas`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicListParams {
    pub grado: Grade,
}

/// Query parameters for `/getTemaEspecifico`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopicDetailParams {
    pub grado: Grade,
    pub id_tema: i64,
}

/// Topic with its characters and researchers, keyed by 1-based position.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetail {
    #[serde(flatten)]
    pub topic: Topic,
    #[serde(rename = "personajes")]
    pub characters: BTreeMap<usize, Character>,
    #[serde(rename = "investigadores")]
    pub researchers: BTreeMap<usize, Researcher>,
}

/// Numbers records 1..n, keeping the order the store returned them in.
pub fn number_from_one<T>(records: Vec<T>) -> BTreeMap<usize, T> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| (i + 1, record))
        .collect()
}
