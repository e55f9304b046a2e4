use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("percentage must be between 0 and 100, got {0}")]
    PercentOutOfRange(u32),
}

//
// ─── PERCENT ───────────────────────────────────────────────────────────────────
//

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// # Errors
    ///
    /// Returns `LessonError::PercentOutOfRange` above 100.
    pub fn new(value: u32) -> Result<Self, LessonError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(LessonError::PercentOutOfRange(value))
    }

    /// Clamps into range instead of failing.
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        Self(u8::try_from(value.min(100)).unwrap_or(100))
    }

    /// `part / whole` rounded down; an empty whole counts as zero.
    #[must_use]
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let scaled = part.min(whole).saturating_mul(100) / whole;
        Self::saturating(u32::try_from(scaled).unwrap_or(100))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Percent {
    type Error = LessonError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u32 {
    fn from(value: Percent) -> Self {
        u32::from(value.0)
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// How a lesson card presents itself for the current premium state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Locked,
    NotStarted,
    InProgress(Percent),
    Completed,
}

/// A named unit of quiz content with a lock flag and display progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    progress: Percent,
    locked: bool,
}

impl Lesson {
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` when the title is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        progress: Percent,
        locked: bool,
    ) -> Result<Self, LessonError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into().trim().to_string(),
            progress,
            locked,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn progress(&self) -> Percent {
        self.progress
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Premium members can open every lesson.
    #[must_use]
    pub fn is_available(&self, premium: bool) -> bool {
        !self.locked || premium
    }

    #[must_use]
    pub fn status(&self, premium: bool) -> LessonStatus {
        if !self.is_available(premium) {
            return LessonStatus::Locked;
        }
        match self.progress {
            Percent::ZERO => LessonStatus::NotStarted,
            Percent::FULL => LessonStatus::Completed,
            p => LessonStatus::InProgress(p),
        }
    }
}
