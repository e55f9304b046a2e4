use thiserror::Error;

use crate::model::{
    AchievementError, LessonError, MediaValidationError, PackageError, ProfileError,
    QuestionError,
};

/// Any validation failure raised while building domain values.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Media(#[from] MediaValidationError),
    #[error(transparent)]
    Package(#[from] PackageError),
    #[error(transparent)]
    Achievement(#[from] AchievementError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}
