use services::{
    AdvanceOutcome, AnswerCheck, LessonResult, LessonServiceError, LessonSessionService,
    OptionState, QuizError, QuizSession,
};
use signlearn_core::model::{LessonId, OptionId, QuestionKind};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    Select(OptionId),
    /// The primary button: checks the answer, then moves on.
    Primary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonOutcome {
    Continue,
    Completed(LessonResult),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionTileVm {
    pub id: OptionId,
    pub label: String,
    pub image_src: Option<String>,
    pub state: OptionState,
    pub disabled: bool,
}

impl OptionTileVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            OptionState::Idle => "option",
            OptionState::Pending => "option option--pending",
            OptionState::Correct => "option option--correct",
            OptionState::Incorrect => "option option--incorrect",
            OptionState::RevealedCorrect => "option option--revealed",
        }
    }

    /// Overlay mark on a checked picture tile.
    #[must_use]
    pub fn mark(&self) -> Option<&'static str> {
        match self.state {
            OptionState::Correct => Some("✓"),
            OptionState::Incorrect => Some("✗"),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub title: &'static str,
    pub explanation: Option<String>,
}

impl From<&AnswerCheck> for FeedbackVm {
    fn from(check: &AnswerCheck) -> Self {
        Self {
            correct: check.is_correct,
            title: if check.is_correct {
                "Correct!"
            } else {
                "Not quite!"
            },
            explanation: check.explanation.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LessonVm {
    session: QuizSession,
    last_check: Option<AnswerCheck>,
}

impl LessonVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            last_check: None,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.session.lesson_id()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.session.current_question().kind()
    }

    #[must_use]
    pub fn media_src(&self) -> Option<String> {
        self.session.current_question().media().map(|m| m.to_src())
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.session.progress().percent.value()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        self.session.progress().label()
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        self.session.action().label()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.can_submit()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionTileVm> {
        let revealed = self.session.is_revealed();
        self.session
            .current_question()
            .options()
            .iter()
            .map(|option| OptionTileVm {
                id: option.id().clone(),
                label: option.label().to_string(),
                image_src: option.image().map(|m| m.to_src()),
                state: self.session.option_state(option.id()),
                disabled: revealed,
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        if !self.session.is_revealed() {
            return None;
        }
        self.last_check.as_ref().map(FeedbackVm::from)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the intent does not fit the current state.
    pub fn apply(
        &mut self,
        runner: &LessonSessionService,
        intent: LessonIntent,
    ) -> Result<LessonOutcome, ViewError> {
        match intent {
            LessonIntent::Select(option) => {
                runner
                    .select(&mut self.session, option)
                    .map_err(|_| ViewError::Unknown)?;
                Ok(LessonOutcome::Continue)
            }
            LessonIntent::Primary if !self.session.is_revealed() => {
                let check = match runner.confirm(&mut self.session) {
                    Ok(check) => check,
                    // The button is disabled without a selection; treat a stray click as a no-op.
                    Err(QuizError::NoSelection) => return Ok(LessonOutcome::Continue),
                    Err(_) => return Err(ViewError::Unknown),
                };
                self.last_check = Some(check);
                Ok(LessonOutcome::Continue)
            }
            LessonIntent::Primary => {
                let outcome = runner
                    .advance(&mut self.session)
                    .map_err(|_| ViewError::Unknown)?;
                self.last_check = None;
                Ok(match outcome {
                    AdvanceOutcome::Next(_) => LessonOutcome::Continue,
                    AdvanceOutcome::Completed(result) => LessonOutcome::Completed(result),
                })
            }
        }
    }
}

/// # Errors
///
/// Maps lesson start failures onto the `ViewError` the lesson screen renders.
pub async fn start_lesson(
    runner: &LessonSessionService,
    lesson_id: LessonId,
    premium: bool,
) -> Result<LessonVm, ViewError> {
    match runner.start(lesson_id, premium).await {
        Ok(session) => Ok(LessonVm::new(session)),
        Err(LessonServiceError::UnknownLesson(_)) => Err(ViewError::NotFound),
        Err(LessonServiceError::Locked(_)) => Err(ViewError::Locked),
        Err(LessonServiceError::Quiz(QuizError::Empty)) => Err(ViewError::EmptyLesson),
        Err(err) => {
            tracing::error!(lesson = %lesson_id, error = %err, "lesson failed to start");
            Err(ViewError::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use services::{AppServices, ServicesConfig};
    use signlearn_core::time::fixed_clock;

    fn runner() -> Arc<LessonSessionService> {
        AppServices::builtin(ServicesConfig {
            clock: fixed_clock(),
            ..ServicesConfig::default()
        })
        .unwrap()
        .lesson_sessions()
    }

    fn opt(id: &str) -> OptionId {
        OptionId::new(id).unwrap()
    }

    #[tokio::test]
    async fn primary_checks_then_advances() {
        let runner = runner();
        let mut vm = start_lesson(&runner, LessonId::new(1), false).await.unwrap();
        assert_eq!(vm.action_label(), "Check Answer");
        assert!(!vm.can_submit());

        vm.apply(&runner, LessonIntent::Select(opt("A"))).unwrap();
        assert_eq!(vm.options()[0].state, OptionState::Pending);

        vm.apply(&runner, LessonIntent::Primary).unwrap();
        let feedback = vm.feedback().unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.title, "Correct!");
        assert_eq!(vm.action_label(), "Next");
        assert!(vm.options().iter().all(|o| o.disabled));

        vm.apply(&runner, LessonIntent::Primary).unwrap();
        assert_eq!(vm.progress_label(), "2/3");
        assert_eq!(vm.feedback(), None);
    }

    #[tokio::test]
    async fn wrong_pick_reveals_correct_tile() {
        let runner = runner();
        let mut vm = start_lesson(&runner, LessonId::new(1), false).await.unwrap();
        vm.apply(&runner, LessonIntent::Select(opt("C"))).unwrap();
        vm.apply(&runner, LessonIntent::Primary).unwrap();

        let options = vm.options();
        assert_eq!(options[0].state, OptionState::RevealedCorrect);
        assert_eq!(options[2].state, OptionState::Incorrect);
        assert_eq!(options[2].mark(), Some("✗"));
        assert_eq!(vm.feedback().unwrap().title, "Not quite!");
    }

    #[tokio::test]
    async fn primary_without_selection_is_ignored() {
        let runner = runner();
        let mut vm = start_lesson(&runner, LessonId::new(1), false).await.unwrap();
        assert_eq!(
            vm.apply(&runner, LessonIntent::Primary).unwrap(),
            LessonOutcome::Continue
        );
        assert_eq!(vm.feedback(), None);
    }

    #[tokio::test]
    async fn locked_lesson_maps_to_locked_error() {
        let runner = runner();
        let err = start_lesson(&runner, LessonId::new(2), false)
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::Locked);
        let err = start_lesson(&runner, LessonId::new(77), false)
            .await
            .unwrap_err();
        assert_eq!(err, ViewError::NotFound);
    }
}
