// src/store/memory.rs

use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;

use super::{Datastore, StoreError, StoreResult};
use crate::models::{
    answer::{AnswerRecord, NewAnswer},
    grade::Grade,
    question::{Question, QuestionType, RowRange},
    student::RegisterStudentRequest,
    topic::{Character, Researcher, Topic},
};

struct TopicRow {
    id: i64,
    grade: Grade,
    topic: Topic,
}

struct QuestionRow {
    question_type: QuestionType,
    type_id: String,
    question: Question,
}

struct AnswerRow {
    answer: NewAnswer,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    topics: Vec<TopicRow>,
    characters: Vec<(i64, Character)>,
    researchers: Vec<(i64, Researcher)>,
    questions: Vec<QuestionRow>,
    students: Vec<i64>,
    answers: Vec<AnswerRow>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process [`Datastore`] with the same ordering and referential rules as
/// the Postgres schema.
///
/// Also counts the store calls it serves and can simulate an unreachable
/// store, a store that goes down after a number of calls, or an insert that
/// returns no row.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    unreachable: AtomicBool,
    fail_after: Mutex<Option<usize>>,
    reject_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails as if the store could not be reached.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Serves the next `calls` calls, then fails every call after them as
    /// if the store had become unreachable.
    pub fn fail_after(&self, calls: usize) {
        let limit = self.calls() + calls;
        *self
            .fail_after
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(limit);
    }

    /// Inserts succeed without returning a row.
    pub fn set_reject_inserts(&self, reject: bool) {
        self.reject_inserts.store(reject, Ordering::SeqCst);
    }

    /// Number of store calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn add_topic(&self, grade: Grade, topic: Topic) -> i64 {
        let mut tables = self.lock();
        let id = tables.allocate_id();
        tables.topics.push(TopicRow { id, grade, topic });
        id
    }

    pub fn add_character(&self, topic_id: i64, character: Character) {
        self.lock().characters.push((topic_id, character));
    }

    pub fn add_researcher(&self, topic_id: i64, researcher: Researcher) {
        self.lock().researchers.push((topic_id, researcher));
    }

    /// Adds a question to the pool. The `id` of `question` is replaced by the
    /// identifier assigned here, which is returned.
    pub fn add_question(
        &self,
        question_type: QuestionType,
        type_id: &str,
        mut question: Question,
    ) -> i64 {
        let mut tables = self.lock();
        let id = tables.allocate_id();
        question.id = id;
        tables.questions.push(QuestionRow {
            question_type,
            type_id: type_id.to_string(),
            question,
        });
        id
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // A poisoned lock only means a test panicked mid-write; the rows are still usable.
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Counts the call and fails it when the store is marked unreachable or
    /// past its `fail_after` limit.
    fn enter(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let limit = *self
            .fail_after
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.unreachable.load(Ordering::SeqCst) || limit.is_some_and(|limit| call > limit) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(self.lock())
    }
}

#[async_trait]
impl Datastore for MemoryStore {
    async fn list_topics(&self, grade: Grade) -> StoreResult<Vec<Topic>> {
        let tables = self.enter()?;
        Ok(tables
            .topics
            .iter()
            .filter(|row| row.grade == grade)
            .map(|row| row.topic.clone())
            .collect())
    }

    async fn find_topic(&self, grade: Grade, id: i64) -> StoreResult<Option<Topic>> {
        let tables = self.enter()?;
        Ok(tables
            .topics
            .iter()
            .find(|row| row.grade == grade && row.id == id)
            .map(|row| row.topic.clone()))
    }

    async fn list_characters(&self, topic_id: i64) -> StoreResult<Vec<Character>> {
        let tables = self.enter()?;
        Ok(tables
            .characters
            .iter()
            .filter(|(id, _)| *id == topic_id)
            .map(|(_, c)| c.clone())
            .collect())
    }

    async fn list_researchers(&self, topic_id: i64) -> StoreResult<Vec<Researcher>> {
        let tables = self.enter()?;
        Ok(tables
            .researchers
            .iter()
            .filter(|(id, _)| *id == topic_id)
            .map(|(_, r)| r.clone())
            .collect())
    }

    async fn list_questions(
        &self,
        question_type: QuestionType,
        type_id: &str,
        range: Option<RowRange>,
    ) -> StoreResult<Vec<Question>> {
        let tables = self.enter()?;
        let matching = tables
            .questions
            .iter()
            .filter(|row| row.question_type == question_type && row.type_id == type_id)
            .map(|row| row.question.clone());

        let questions = match range {
            Some(range) => matching
                .skip(range.offset.max(0) as usize)
                .take(range.limit.max(0) as usize)
                .collect(),
            None => matching.collect(),
        };
        Ok(questions)
    }

    async fn has_correct_answer(&self, student_id: i64, question_id: i64) -> StoreResult<bool> {
        let tables = self.enter()?;
        Ok(tables.answers.iter().any(|row| {
            row.answer.student_id == student_id
                && row.answer.question_id == question_id
                && row.answer.result
        }))
    }

    async fn list_answers(&self, student_id: i64) -> StoreResult<Vec<AnswerRecord>> {
        let tables = self.enter()?;
        let answers = tables
            .answers
            .iter()
            .filter(|row| row.answer.student_id == student_id)
            .filter_map(|row| {
                let question = tables
                    .questions
                    .iter()
                    .find(|q| q.question.id == row.answer.question_id)?;
                Some(AnswerRecord {
                    question_id: row.answer.question_id,
                    prompt: question.question.prompt.clone(),
                    result: row.answer.result,
                    started_at: row.answer.started_at.clone(),
                    submitted_at: row.answer.submitted_at.clone(),
                })
            })
            .collect();
        Ok(answers)
    }

    async fn insert_answer(&self, answer: &NewAnswer) -> StoreResult<Option<i64>> {
        let mut tables = self.enter()?;
        if self.reject_inserts.load(Ordering::SeqCst) {
            return Ok(None);
        }
        if !tables.questions.iter().any(|q| q.question.id == answer.question_id) {
            return Err(StoreError::Constraint(format!(
                "pregunta {} does not exist",
                answer.question_id
            )));
        }
        if !tables.students.contains(&answer.student_id) {
            return Err(StoreError::Constraint(format!(
                "estudiante {} does not exist",
                answer.student_id
            )));
        }

        let id = tables.allocate_id();
        tables.answers.push(AnswerRow {
            answer: answer.clone(),
        });
        Ok(Some(id))
    }

    async fn insert_student(&self, _student: &RegisterStudentRequest) -> StoreResult<Option<i64>> {
        let mut tables = self.enter()?;
        if self.reject_inserts.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let id = tables.allocate_id();
        tables.students.push(id);
        Ok(Some(id))
    }

    async fn count_topics(&self) -> StoreResult<i64> {
        let tables = self.enter()?;
        Ok(tables.topics.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::Sex;

    fn question(prompt: &str) -> Question {
        Question {
            id: 0,
            prompt: prompt.to_string(),
            option_a: "a".to_string(),
            option_b: "b".to_string(),
            option_c: "c".to_string(),
            option_d: "d".to_string(),
            correct_option: "a".to_string(),
        }
    }

    fn student() -> RegisterStudentRequest {
        RegisterStudentRequest {
            nombre: "Rosa".to_string(),
            sexo: Sex::Female,
            grado: Grade::Tercero,
        }
    }

    #[tokio::test]
    async fn questions_are_filtered_by_type_and_type_id() {
        let store = MemoryStore::new();
        store.add_question(QuestionType::Tema, "1", question("q1"));
        store.add_question(QuestionType::Unidad, "1", question("q2"));
        store.add_question(QuestionType::Tema, "2", question("q3"));

        let questions = store
            .list_questions(QuestionType::Tema, "1", None)
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "q1");
    }

    #[tokio::test]
    async fn answer_insert_enforces_references() {
        let store = MemoryStore::new();
        let question_id = store.add_question(QuestionType::Tema, "1", question("q1"));

        let answer = NewAnswer {
            question_id,
            student_id: 999,
            result: true,
            started_at: "2025-03-10T15:00:00+00:00".to_string(),
            submitted_at: "2025-03-10T15:00:10+00:00".to_string(),
        };
        let err = store.insert_answer(&answer).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));

        let student_id = store.insert_student(&student()).await.unwrap().unwrap();
        let answer = NewAnswer { student_id, ..answer };
        assert!(store.insert_answer(&answer).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unreachable_store_fails_every_call_and_counts_it() {
        let store = MemoryStore::new();
        store.set_unreachable(true);

        assert!(store.count_topics().await.is_err());
        assert!(store.list_topics(Grade::Primero).await.is_err());
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn fail_after_serves_the_given_number_of_calls() {
        let store = MemoryStore::new();
        store.add_topic(
            Grade::Primero,
            Topic {
                name: "Incas".to_string(),
                description: "Imperio".to_string(),
                image: "incas.png".to_string(),
            },
        );
        assert!(store.count_topics().await.is_ok());

        store.fail_after(2);
        assert!(store.count_topics().await.is_ok());
        assert!(store.list_topics(Grade::Primero).await.is_ok());
        assert!(store.count_topics().await.is_err());
        assert!(store.list_topics(Grade::Primero).await.is_err());
    }

    #[tokio::test]
    async fn rejected_insert_returns_no_row() {
        let store = MemoryStore::new();
        store.set_reject_inserts(true);

        assert_eq!(store.insert_student(&student()).await.unwrap(), None);
    }
}
