//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`); fields are only readable from outside the
//! crate so the view layer cannot mutate a snapshot behind the store's back.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Question};
use crate::error::CatalogError;
use crate::shuffle::shuffled;

pub const DEFAULT_STUDENT_ID: &str = "1234567890";

/// How clearing an answer adjusts `answered_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCountPolicy {
    /// Decrement only when an answer was actually removed. The count always
    /// equals the number of stored answers.
    #[default]
    Tracked,

    /// Decrement on every clear, even if nothing was stored. Clearing an
    /// unanswered question drives the count below the real number of
    /// answers, and possibly below zero.
    Legacy,
}

/// Everything needed to build the initial state
#[derive(Debug, Clone)]
pub struct QuizSetup {
    pub student_id: String,
    pub catalog: Arc<Catalog>,
    pub policy: AnswerCountPolicy,
}

impl Default for QuizSetup {
    fn default() -> Self {
        Self {
            student_id: DEFAULT_STUDENT_ID.to_string(),
            catalog: Arc::new(Catalog::builtin()),
            policy: AnswerCountPolicy::default(),
        }
    }
}

/// Root application state
///
/// The single source of truth for the quiz. Snapshots are cheap to clone:
/// the catalog is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) student_id: String,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) policy: AnswerCountPolicy,
    pub(crate) question_order: Vec<String>,
    pub(crate) answers: BTreeMap<String, String>,
    pub(crate) answered_count: i64,
    pub(crate) current_index: usize,
    pub(crate) current_question: Question,
    pub(crate) submitted: bool,
}

impl AppState {
    /// Fresh state with a randomly shuffled question order
    pub fn initial(setup: &QuizSetup) -> Self {
        Self::initial_with_rng(setup, &mut rand::thread_rng())
    }

    pub fn initial_with_rng<R: Rng + ?Sized>(setup: &QuizSetup, rng: &mut R) -> Self {
        let order = shuffled(setup.catalog.ids().map(str::to_string), rng);
        Self::from_order(setup, order)
    }

    /// Fresh state with a caller-chosen order, which must be a permutation of
    /// the catalog ids
    pub fn with_order<S: Into<String>>(
        setup: &QuizSetup,
        order: impl IntoIterator<Item = S>,
    ) -> Result<Self, CatalogError> {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();

        let expected: HashSet<&str> = setup.catalog.ids().collect();
        let given: HashSet<&str> = order.iter().map(String::as_str).collect();
        if order.len() != setup.catalog.len() || given != expected {
            return Err(CatalogError::NotAPermutation);
        }

        Ok(Self::from_order(setup, order))
    }

    fn from_order(setup: &QuizSetup, question_order: Vec<String>) -> Self {
        // The catalog is non-empty and the order is a permutation of its ids
        let current_question = question_at(&setup.catalog, &question_order, 0);

        Self {
            student_id: setup.student_id.clone(),
            catalog: Arc::clone(&setup.catalog),
            policy: setup.policy,
            question_order,
            answers: BTreeMap::new(),
            answered_count: 0,
            current_index: 0,
            current_question,
            submitted: false,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> AnswerCountPolicy {
        self.policy
    }

    pub fn question_order(&self) -> &[String] {
        &self.question_order
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    pub fn answer(&self, id: &str) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    pub fn answered_count(&self) -> i64 {
        self.answered_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.current_question
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn question_count(&self) -> usize {
        self.question_order.len()
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.question_count()
    }

    /// Every question has an answer, according to the running count
    pub fn all_answered(&self) -> bool {
        self.answered_count == self.question_count() as i64
    }

    /// Move to `index` and refresh the cached current question. Callers
    /// bounds-check first.
    pub(crate) fn reposition(&mut self, index: usize) {
        self.current_index = index;
        self.current_question = question_at(&self.catalog, &self.question_order, index);
    }

    /// Summary of the quiz in presentation order
    pub fn report(&self) -> SubmissionReport {
        let answers = self
            .question_order
            .iter()
            .enumerate()
            .map(|(position, id)| ReportedAnswer {
                position: position + 1,
                question_id: id.clone(),
                question: self
                    .catalog
                    .get(id)
                    .map(|q| q.text.clone())
                    .unwrap_or_default(),
                answer: self.answers.get(id).cloned(),
            })
            .collect();

        SubmissionReport {
            student_id: self.student_id.clone(),
            submitted: self.submitted,
            answered: self.answers.len(),
            total: self.question_count(),
            answers,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial(&QuizSetup::default())
    }
}

fn question_at(catalog: &Catalog, order: &[String], index: usize) -> Question {
    order
        .get(index)
        .and_then(|id| catalog.get(id))
        .or_else(|| catalog.questions().first())
        .cloned()
        .unwrap_or_else(|| Question::new("", ""))
}

/// What the quiz looked like when it was handed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub student_id: String,
    pub submitted: bool,
    pub answered: usize,
    pub total: usize,
    pub answers: Vec<ReportedAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedAnswer {
    pub position: usize,
    pub question_id: String,
    pub question: String,
    pub answer: Option<String>,
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student: {}", self.student_id)?;
        writeln!(f, "Answered: {} of {}", self.answered, self.total)?;
        for entry in &self.answers {
            writeln!(f)?;
            writeln!(f, "{}. [{}] {}", entry.position, entry.question_id, entry.question)?;
            match &entry.answer {
                Some(answer) => {
                    for line in answer.lines() {
                        writeln!(f, "   > {}", line)?;
                    }
                }
                None => writeln!(f, "   (no answer)")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state_defaults() {
        let state = AppState::initial(&QuizSetup::default());

        assert_eq!(state.student_id(), DEFAULT_STUDENT_ID);
        assert_eq!(state.question_count(), 5);
        assert!(state.answers().is_empty());
        assert_eq!(state.answered_count(), 0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_question().id, state.question_order()[0]);
        assert!(!state.submitted());
    }

    #[test]
    fn test_initial_order_is_permutation_of_catalog() {
        let setup = QuizSetup::default();
        let state = AppState::initial_with_rng(&setup, &mut StdRng::seed_from_u64(5));

        let mut order = state.question_order().to_vec();
        order.sort();
        let mut ids: Vec<String> = setup.catalog.ids().map(str::to_string).collect();
        ids.sort();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_with_order_sets_current_question() {
        let state =
            AppState::with_order(&QuizSetup::default(), ["42", "13", "33", "11", "99"]).unwrap();
        assert_eq!(state.current_question().id, "42");
        assert_eq!(state.current_question().text, "Question Text 5 (42)");
    }

    #[test]
    fn test_with_order_rejects_non_permutation() {
        let setup = QuizSetup::default();
        assert_eq!(
            AppState::with_order(&setup, ["99", "11", "33", "13"]),
            Err(CatalogError::NotAPermutation)
        );
        assert_eq!(
            AppState::with_order(&setup, ["99", "11", "33", "13", "13"]),
            Err(CatalogError::NotAPermutation)
        );
        assert_eq!(
            AppState::with_order(&setup, ["99", "11", "33", "13", "7"]),
            Err(CatalogError::NotAPermutation)
        );
    }

    #[test]
    fn test_report_lists_answers_in_presentation_order() {
        let mut state =
            AppState::with_order(&QuizSetup::default(), ["11", "99", "33", "13", "42"]).unwrap();
        state.answers.insert("99".to_string(), "blue".to_string());
        state.answered_count = 1;

        let report = state.report();
        assert_eq!(report.answered, 1);
        assert_eq!(report.total, 5);
        assert_eq!(report.answers[0].question_id, "11");
        assert_eq!(report.answers[0].answer, None);
        assert_eq!(report.answers[1].position, 2);
        assert_eq!(report.answers[1].answer.as_deref(), Some("blue"));
    }

    #[test]
    fn test_report_text_rendering() {
        let mut state =
            AppState::with_order(&QuizSetup::default(), ["99", "11", "33", "13", "42"]).unwrap();
        state.answers.insert("99".to_string(), "line one\nline two".to_string());
        state.answered_count = 1;

        let text = state.report().to_string();
        assert!(text.starts_with("Student: 1234567890\nAnswered: 1 of 5\n"));
        assert!(text.contains("1. [99] Question Text 1 (99)\n   > line one\n   > line two\n"));
        assert!(text.contains("2. [11] Question Text 2 (11)\n   (no answer)\n"));
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: AnswerCountPolicy,
        }

        let parsed: Wrapper = toml::from_str("policy = \"legacy\"").unwrap();
        assert_eq!(parsed.policy, AnswerCountPolicy::Legacy);
    }
}
