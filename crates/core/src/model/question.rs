use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};
use crate::model::media::{MediaUri, MediaValidationError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option label cannot be empty")]
    EmptyOptionLabel,

    #[error("duplicate option id: {0}")]
    DuplicateOption(OptionId),

    #[error("correct answer {0} is not one of the options")]
    UnknownCorrectAnswer(OptionId),

    #[error(transparent)]
    Media(#[from] MediaValidationError),
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// How the options of a question are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Grid of short text tiles.
    MultipleChoice,
    /// Image tiles, each option backed by a picture.
    PictureMatch,
    /// Stacked reply lines.
    Dialogue,
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
    image: Option<MediaUri>,
}

impl AnswerOption {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptionLabel` for a blank label.
    pub fn new(
        id: OptionId,
        label: impl Into<String>,
        image: Option<MediaUri>,
    ) -> Result<Self, QuestionError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(QuestionError::EmptyOptionLabel);
        }
        Ok(Self { id, label, image })
    }

    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaUri> {
        self.image.as_ref()
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz item: prompt, ordered options and exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    prompt: String,
    media: Option<MediaUri>,
    options: Vec<AnswerOption>,
    correct: OptionId,
    explanation: Option<String>,
}

/// Unvalidated question input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    pub media: Option<MediaUri>,
    pub options: Vec<AnswerOption>,
    pub correct: OptionId,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, no options are given, option ids
    /// repeat, or the correct answer is not among the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.id()) {
                return Err(QuestionError::DuplicateOption(option.id().clone()));
            }
        }
        if !seen.contains(&self.correct) {
            return Err(QuestionError::UnknownCorrectAnswer(self.correct));
        }

        let explanation = self
            .explanation
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Question {
            id: self.id,
            kind: self.kind,
            prompt,
            media: self.media,
            options: self.options,
            correct: self.correct,
            explanation,
        })
    }
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn media(&self) -> Option<&MediaUri> {
        self.media.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &OptionId {
        &self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn has_option(&self, id: &OptionId) -> bool {
        self.options.iter().any(|option| option.id() == id)
    }

    #[must_use]
    pub fn is_correct(&self, id: &OptionId) -> bool {
        self.correct == *id
    }
}
