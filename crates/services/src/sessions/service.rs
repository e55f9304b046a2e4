use chrono::{DateTime, Utc};
use std::fmt;

use signlearn_core::model::{LessonId, OptionId, Question};

use super::progress::{OptionState, QuizAction, QuizProgress};
use crate::error::QuizError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of checking the pending answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    pub selected: OptionId,
    pub correct_answer: OptionId,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// Final tally handed to the parent when the last question is advanced past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonResult {
    pub lesson_id: LessonId,
    pub score: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl LessonResult {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on; carries the new 0-based index.
    Next(usize),
    /// The lesson is over. Emitted once per run, after which the session starts over.
    Completed(LessonResult),
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// Linear quiz over a fixed, non-empty list of questions.
///
/// `current` is always a valid index into `questions`: advancing from the last question
/// completes the run and resets instead of stepping past the end.
#[derive(Clone)]
pub struct QuizSession {
    lesson_id: LessonId,
    questions: Vec<Question>,
    current: usize,
    selected: Option<OptionId>,
    revealed: bool,
    score: usize,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(
        lesson_id: LessonId,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            lesson_id,
            questions,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            started_at,
        })
    }

    #[must_use]
    pub fn lesson_id(&self) -> LessonId {
        self.lesson_id
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// The primary button is enabled only with a pending answer or after reveal.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.current, self.questions.len())
    }

    #[must_use]
    pub fn action(&self) -> QuizAction {
        match (self.revealed, self.is_last_question()) {
            (false, _) => QuizAction::CheckAnswer,
            (true, false) => QuizAction::Next,
            (true, true) => QuizAction::Finish,
        }
    }

    /// Whether the checked answer was right. `None` until revealed.
    #[must_use]
    pub fn answered_correctly(&self) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        let question = self.current_question();
        self.selected.as_ref().map(|id| question.is_correct(id))
    }

    #[must_use]
    pub fn option_state(&self, option: &OptionId) -> OptionState {
        let question = self.current_question();
        let is_selected = self.selected.as_ref() == Some(option);
        let is_correct = question.is_correct(option);
        match (self.revealed, is_selected, is_correct) {
            (false, true, _) => OptionState::Pending,
            (false, false, _) => OptionState::Idle,
            (true, true, true) => OptionState::Correct,
            (true, true, false) => OptionState::Incorrect,
            (true, false, true) => OptionState::RevealedCorrect,
            (true, false, false) => OptionState::Idle,
        }
    }

    /// Record a pending answer. Returns `Ok(false)` without change once revealed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownOption` if the id is not an option of the current question.
    pub fn select(&mut self, option: OptionId) -> Result<bool, QuizError> {
        if self.revealed {
            return Ok(false);
        }
        if !self.current_question().has_option(&option) {
            return Err(QuizError::UnknownOption(option));
        }
        self.selected = Some(option);
        Ok(true)
    }

    /// Check the pending answer and reveal the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyRevealed` on a second confirm and
    /// `QuizError::NoSelection` when nothing is pending.
    pub fn confirm(&mut self) -> Result<AnswerCheck, QuizError> {
        if self.revealed {
            return Err(QuizError::AlreadyRevealed);
        }
        let selected = self.selected.clone().ok_or(QuizError::NoSelection)?;
        let question = &self.questions[self.current];
        let is_correct = question.is_correct(&selected);
        let check = AnswerCheck {
            selected,
            correct_answer: question.correct_answer().clone(),
            is_correct,
            explanation: question.explanation().map(str::to_string),
        };

        if is_correct {
            self.score += 1;
        }
        self.revealed = true;
        Ok(check)
    }

    /// Move to the next question, or complete the run at the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotRevealed` before the current answer is checked.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, QuizError> {
        if !self.revealed {
            return Err(QuizError::NotRevealed);
        }

        if !self.is_last_question() {
            self.current += 1;
            self.selected = None;
            self.revealed = false;
            return Ok(AdvanceOutcome::Next(self.current));
        }

        let result = LessonResult {
            lesson_id: self.lesson_id,
            score: self.score,
            total: self.questions.len(),
            started_at: self.started_at,
            completed_at: now,
        };
        self.reset(now);
        Ok(AdvanceOutcome::Completed(result))
    }

    /// Start the same lesson over from the first question.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.selected = None;
        self.revealed = false;
        self.score = 0;
        self.started_at = now;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("lesson_id", &self.lesson_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("revealed", &self.revealed)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
