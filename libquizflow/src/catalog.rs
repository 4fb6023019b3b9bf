//! Question catalog
//!
//! The catalog is the immutable list of questions a quiz presents. It is
//! built once at startup and shared by every state snapshot through an `Arc`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single quiz question. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Ordered, non-empty list of questions with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty list or repeated ids
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    /// The five questions the quiz ships with
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a catalog built by `new` or `builtin`
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Question ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new("99", "Question Text 1 (99)"),
        Question::new("11", "Question Text 2 (11)"),
        Question::new("33", "Question Text 3 (33)"),
        Question::new("13", "Question Text 4 (13)"),
        Question::new("42", "Question Text 5 (42)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_five_questions() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.ids().collect::<Vec<_>>(),
            vec!["99", "11", "33", "13", "42"]
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("13").unwrap().text, "Question Text 4 (13)");
        assert!(catalog.get("7").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Question::new("1", "first"),
            Question::new("2", "second"),
            Question::new("1", "again"),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_single_question_catalog() {
        let catalog = Catalog::new(vec![Question::new("only", "Only question")]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
