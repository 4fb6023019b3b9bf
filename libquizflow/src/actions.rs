//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. The set is closed: the
//! reducer matches it exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User intents, plus the store's bootstrap action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Dispatched once by the store to build its initial state. Carries no
    /// intent, so an existing state passes through unchanged.
    Init,

    /// The answer text for a question changed. Empty text clears the answer.
    AnswerQuestion { id: String, text: String },

    /// Move to the next question in the shuffled order
    NextQuestion,

    /// Move to the previous question in the shuffled order
    PreviousQuestion,

    /// Hand in the quiz
    Submit,
}

impl Action {
    pub fn answer(id: impl Into<String>, text: impl Into<String>) -> Self {
        Action::AnswerQuestion {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Short snake_case name, used as a structured log field
    pub fn name(&self) -> &'static str {
        match self {
            Action::Init => "init",
            Action::AnswerQuestion { .. } => "answer_question",
            Action::NextQuestion => "next_question",
            Action::PreviousQuestion => "previous_question",
            Action::Submit => "submit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Init => write!(f, "Init"),
            Action::AnswerQuestion { id, text } if text.is_empty() => {
                write!(f, "AnswerQuestion(id: {}, cleared)", id)
            }
            Action::AnswerQuestion { id, text } => {
                write!(f, "AnswerQuestion(id: {}, text: {:?})", id, text)
            }
            Action::NextQuestion => write!(f, "NextQuestion"),
            Action::PreviousQuestion => write!(f, "PreviousQuestion"),
            Action::Submit => write!(f, "Submit"),
        }
    }
}
