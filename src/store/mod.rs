// src/store/mod.rs

//! Access to the managed relational store that owns every table.
//!
//! Handlers only talk to the store through [`Datastore`], so the same handler
//! code runs against Postgres in production and against [`memory::MemoryStore`]
//! in tests.

pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::models::{
    answer::{AnswerRecord, NewAnswer},
    grade::Grade,
    question::{Question, QuestionType, RowRange},
    student::RegisterStudentRequest,
    topic::{Character, Researcher, Topic},
};

/// Errors raised by a store call.
#[derive(Debug)]
pub enum StoreError {
    /// Error reported by the database driver.
    Database(sqlx::Error),

    /// The store could not be reached.
    Unavailable(String),

    /// A referential or uniqueness rule of the store rejected the write.
    Constraint(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "{}", e),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::Constraint(msg) => write!(f, "constraint violation: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Queries the service needs from the store.
///
/// Every list method returns rows in store order (insertion order).
#[async_trait]
pub trait Datastore: Send + Sync {
    /// All topics of a grade.
    async fn list_topics(&self, grade: Grade) -> StoreResult<Vec<Topic>>;

    /// The topic with `id` if it belongs to `grade`.
    async fn find_topic(&self, grade: Grade, id: i64) -> StoreResult<Option<Topic>>;

    async fn list_characters(&self, topic_id: i64) -> StoreResult<Vec<Character>>;

    async fn list_researchers(&self, topic_id: i64) -> StoreResult<Vec<Researcher>>;

    /// Questions matching `(question_type, type_id)`, restricted to `range` when given.
    async fn list_questions(
        &self,
        question_type: QuestionType,
        type_id: &str,
        range: Option<RowRange>,
    ) -> StoreResult<Vec<Question>>;

    /// Whether at least one correct answer exists for the pair.
    async fn has_correct_answer(&self, student_id: i64, question_id: i64) -> StoreResult<bool>;

    /// Every answer of a student, joined with the question prompt.
    async fn list_answers(&self, student_id: i64) -> StoreResult<Vec<AnswerRecord>>;

    /// Inserts an answer. `None` means the store returned no row.
    async fn insert_answer(&self, answer: &NewAnswer) -> StoreResult<Option<i64>>;

    /// Inserts a student. Returns the identifier assigned by the store.
    async fn insert_student(&self, student: &RegisterStudentRequest) -> StoreResult<Option<i64>>;

    /// Row count of the topic table; used as a reachability check.
    async fn count_topics(&self) -> StoreResult<i64>;
}
