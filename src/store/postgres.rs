// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Datastore, StoreResult};
use crate::models::{
    answer::{AnswerRecord, NewAnswer},
    grade::Grade,
    question::{Question, QuestionType, RowRange},
    student::RegisterStudentRequest,
    topic::{Character, Researcher, Topic},
};

const QUESTION_COLUMNS: &str = r#"
    id,
    pregunta AS prompt,
    alternativa_a AS option_a,
    alternativa_b AS option_b,
    alternativa_c AS option_c,
    alternativa_d AS option_d,
    alternativa_correcta AS correct_option
"#;

/// [`Datastore`] backed by the Postgres database of the managed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Datastore for PgStore {
    async fn list_topics(&self, grade: Grade) -> StoreResult<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(
            r#"
            SELECT nombre AS name, descripcion AS description, imagen AS image
            FROM tema
            WHERE grado = $1
            ORDER BY id
            "#,
        )
        .bind(grade.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(topics)
    }

    async fn find_topic(&self, grade: Grade, id: i64) -> StoreResult<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"
            SELECT nombre AS name, descripcion AS description, imagen AS image
            FROM tema
            WHERE grado = $1 AND id = $2
            "#,
        )
        .bind(grade.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(topic)
    }

    async fn list_characters(&self, topic_id: i64) -> StoreResult<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT nombre AS name, descripcion AS description, imagen AS image
            FROM personaje
            WHERE id_tema = $1
            ORDER BY id
            "#,
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    async fn list_researchers(&self, topic_id: i64) -> StoreResult<Vec<Researcher>> {
        let researchers = sqlx::query_as::<_, Researcher>(
            r#"
            SELECT
                nombres AS full_name,
                sexo AS sex,
                descripcion AS description,
                es_provincia AS from_province,
                enlace_renacyt AS profile_link,
                area AS subject_area,
                imagen AS image
            FROM investigador
            WHERE id_tema = $1
            ORDER BY id
            "#,
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(researchers)
    }

    async fn list_questions(
        &self,
        question_type: QuestionType,
        type_id: &str,
        range: Option<RowRange>,
    ) -> StoreResult<Vec<Question>> {
        let mut sql = format!(
            "SELECT {} FROM pregunta WHERE tipo = $1 AND id_tipo = $2 ORDER BY id",
            QUESTION_COLUMNS
        );
        if range.is_some() {
            sql.push_str(" LIMIT $3 OFFSET $4");
        }

        let mut query = sqlx::query_as::<_, Question>(&sql)
            .bind(question_type.as_str())
            .bind(type_id);
        if let Some(range) = range {
            query = query.bind(range.limit).bind(range.offset);
        }

        let questions = query.fetch_all(&self.pool).await?;
        Ok(questions)
    }

    async fn has_correct_answer(&self, student_id: i64, question_id: i64) -> StoreResult<bool> {
        let solved = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM respuesta
                WHERE id_pregunta = $1 AND id_estudiante = $2 AND resultado = TRUE
            )
            "#,
        )
        .bind(question_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(solved)
    }

    async fn list_answers(&self, student_id: i64) -> StoreResult<Vec<AnswerRecord>> {
        // Instants come back as UTC text with a trailing "Z".
        let answers = sqlx::query_as::<_, AnswerRecord>(
            r#"
            SELECT
                r.id_pregunta AS question_id,
                p.pregunta AS prompt,
                r.resultado AS result,
                to_char(r.tiempo_inicio_pregunta AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.US"Z"') AS started_at,
                to_char(r.tiempo_envio_respuesta AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.US"Z"') AS submitted_at
            FROM respuesta r
            JOIN pregunta p ON p.id = r.id_pregunta
            WHERE r.id_estudiante = $1
            ORDER BY r.id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    async fn insert_answer(&self, answer: &NewAnswer) -> StoreResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO respuesta
                (id_pregunta, id_estudiante, resultado, tiempo_inicio_pregunta, tiempo_envio_respuesta)
            VALUES ($1, $2, $3, $4::TIMESTAMPTZ, $5::TIMESTAMPTZ)
            RETURNING id
            "#,
        )
        .bind(answer.question_id)
        .bind(answer.student_id)
        .bind(answer.result)
        .bind(&answer.started_at)
        .bind(&answer.submitted_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn insert_student(&self, student: &RegisterStudentRequest) -> StoreResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO estudiante (nombre, sexo, grado)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&student.nombre)
        .bind(student.sexo.as_str())
        .bind(student.grado.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn count_topics(&self) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tema")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
