// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Partition key of the question pool ('pregunta.tipo').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Questions scoped to a single topic; `id_tipo` holds the topic id.
    Tema,
    /// Questions scoped to a unit; `id_tipo` holds the unit code.
    Unidad,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Tema => "tema",
            QuestionType::Unidad => "unidad",
        }
    }
}

/// Represents a row of the 'pregunta' table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Question {
    #[serde(rename = "id_pregunta")]
    pub id: i64,

    #[serde(rename = "pregunta")]
    pub prompt: String,

    #[serde(rename = "alternativa_a")]
    pub option_a: String,
    #[serde(rename = "alternativa_b")]
    pub option_b: String,
    #[serde(rename = "alternativa_c")]
    pub option_c: String,
    #[serde(rename = "alternativa_d")]
    pub option_d: String,

    /// Label of the right alternative (e.g. "b").
    #[serde(rename = "alternativa_correcta")]
    pub correct_option: String,
}

/// A question plus whether the requesting student has ever solved it.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionWithStatus {
    #[serde(flatten)]
    pub question: Question,

    #[serde(rename = "estado")]
    pub solved: bool,
}

/// Query parameters for `/getAllPreguntas`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListParams {
    pub tipo: QuestionType,
    pub id_tipo: String,
    pub id_estudiante: i64,
}

/// Query parameters for `/getPreguntasPaginado`.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginatedQuestionParams {
    pub tipo: QuestionType,
    pub id_tipo: String,
    /// 1-based page number.
    #[param(minimum = 1)]
    #[validate(range(min = 1, message = "paginado must be greater than or equal to 1"))]
    pub paginado: i64,
    pub id_estudiante: i64,
}

/// Offset-based row window requested from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub offset: i64,
    pub limit: i64,
}

impl RowRange {
    /// Window of page `page` (1-based) with `page_size` rows per page.
    ///
    /// `None` when the offset does not fit in an `i64`; no store can hold
    /// that many rows, so such a page is always empty.
    pub fn page(page: i64, page_size: i64) -> Option<Self> {
        let offset = page.checked_sub(1)?.checked_mul(page_size)?;
        Some(Self {
            offset,
            limit: page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_windows() {
        assert_eq!(
            RowRange::page(1, 10),
            Some(RowRange { offset: 0, limit: 10 })
        );
        assert_eq!(
            RowRange::page(3, 10),
            Some(RowRange { offset: 20, limit: 10 })
        );
    }

    #[test]
    fn huge_page_has_no_window() {
        assert_eq!(RowRange::page(i64::MAX, 10), None);
        assert_eq!(RowRange::page(922_337_203_685_477_582, 10), None);
        assert_eq!(
            RowRange::page(922_337_203_685_477_580, 10),
            Some(RowRange {
                offset: 9_223_372_036_854_775_790,
                limit: 10
            })
        );
    }

    #[test]
    fn page_zero_fails_validation() {
        let params = PaginatedQuestionParams {
            tipo: QuestionType::Tema,
            id_tipo: "1".to_string(),
            paginado: 0,
            id_estudiante: 1,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn status_is_flattened_into_question_record() {
        let record = QuestionWithStatus {
            question: Question {
                id: 7,
                prompt: "¿En qué año se proclamó la independencia?".to_string(),
                option_a: "1821".to_string(),
                option_b: "1824".to_string(),
                option_c: "1879".to_string(),
                option_d: "1532".to_string(),
                correct_option: "a".to_string(),
            },
            solved: true,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id_pregunta"], 7);
        assert_eq!(value["alternativa_correcta"], "a");
        assert_eq!(value["estado"], true);
    }
}
