use signlearn_core::model::Percent;

/// Header progress for the lesson runner: 1-based position out of total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
    pub percent: Percent,
}

impl QuizProgress {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        let position = (index + 1).min(total);
        Self {
            position,
            total,
            percent: Percent::of(position, total),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }
}

/// What the primary lesson button does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    CheckAnswer,
    Next,
    Finish,
}

impl QuizAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuizAction::CheckAnswer => "Check Answer",
            QuizAction::Next => "Next",
            QuizAction::Finish => "Finish",
        }
    }
}

/// Render state of a single answer tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    /// Selected, not yet checked.
    Pending,
    /// Selected and right.
    Correct,
    /// Selected and wrong.
    Incorrect,
    /// Not selected, but the right answer after a miss.
    RevealedCorrect,
}
