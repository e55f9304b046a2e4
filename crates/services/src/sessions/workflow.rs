use std::sync::Arc;

use signlearn_catalog::{CatalogError, LessonRepository, QuestionRepository};
use signlearn_core::model::{LessonId, OptionId};

use super::service::{AdvanceOutcome, AnswerCheck, QuizSession};
use crate::Clock;
use crate::error::{LessonServiceError, QuizError};

/// Starts quiz runs from the catalog and timestamps their transitions.
#[derive(Clone)]
pub struct LessonSessionService {
    clock: Clock,
    lessons: Arc<dyn LessonRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl LessonSessionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        lessons: Arc<dyn LessonRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            clock,
            lessons,
            questions,
        }
    }

    /// Start a quiz for the lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::UnknownLesson` for a missing lesson,
    /// `LessonServiceError::Locked` when the lesson needs premium, and
    /// `QuizError::Empty` when it has no questions.
    pub async fn start(
        &self,
        lesson_id: LessonId,
        premium: bool,
    ) -> Result<QuizSession, LessonServiceError> {
        let lesson = match self.lessons.get_lesson(lesson_id).await {
            Ok(lesson) => lesson,
            Err(CatalogError::NotFound) => return Err(LessonServiceError::UnknownLesson(lesson_id)),
            Err(err) => return Err(err.into()),
        };
        if !lesson.is_available(premium) {
            tracing::warn!(lesson = %lesson_id, "refused to start locked lesson");
            return Err(LessonServiceError::Locked(lesson_id));
        }

        let questions = self.questions.questions_for_lesson(lesson_id).await?;
        let session = QuizSession::new(lesson_id, questions, self.clock.now())?;
        tracing::info!(
            lesson = %lesson_id,
            questions = session.total_questions(),
            "lesson started"
        );
        Ok(session)
    }

    /// # Errors
    ///
    /// Propagates `QuizError` from the session.
    pub fn select(&self, session: &mut QuizSession, option: OptionId) -> Result<bool, QuizError> {
        session.select(option)
    }

    /// # Errors
    ///
    /// Propagates `QuizError` from the session.
    pub fn confirm(&self, session: &mut QuizSession) -> Result<AnswerCheck, QuizError> {
        let check = session.confirm()?;
        tracing::debug!(
            lesson = %session.lesson_id(),
            index = session.current_index(),
            correct = check.is_correct,
            "answer checked"
        );
        Ok(check)
    }

    /// # Errors
    ///
    /// Propagates `QuizError` from the session.
    pub fn advance(&self, session: &mut QuizSession) -> Result<AdvanceOutcome, QuizError> {
        let outcome = session.advance(self.clock.now())?;
        if let AdvanceOutcome::Completed(result) = &outcome {
            tracing::info!(
                lesson = %result.lesson_id,
                score = result.score,
                total = result.total,
                "lesson completed"
            );
        }
        Ok(outcome)
    }
}
