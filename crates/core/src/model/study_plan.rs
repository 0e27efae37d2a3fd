use serde::{Deserialize, Serialize};

use crate::model::Days;

/// Body of a generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRequest {
    pub topic: String,
    pub days: Days,
}

impl StudyRequest {
    #[must_use]
    pub fn new(topic: impl Into<String>, days: Days) -> Self {
        Self {
            topic: topic.into(),
            days,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A generated study plan as returned by the generation service.
///
/// Sections the service leaves out decode as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyPlan {
    pub study_plan: String,
    pub flashcards: Vec<Flashcard>,
    pub practice: String,
    pub motivation: String,
}

impl StudyPlan {
    #[must_use]
    pub fn has_flashcards(&self) -> bool {
        !self.flashcards.is_empty()
    }

    #[must_use]
    pub fn has_practice(&self) -> bool {
        !self.practice.trim().is_empty()
    }

    #[must_use]
    pub fn has_motivation(&self) -> bool {
        !self.motivation.trim().is_empty()
    }
}
