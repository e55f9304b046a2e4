mod progress;
mod service;
mod workflow;

// Public API of the lesson quiz subsystem.
pub use crate::error::QuizError;
pub use progress::{OptionState, QuizAction, QuizProgress};
pub use service::{AdvanceOutcome, AnswerCheck, LessonResult, QuizSession};
pub use workflow::LessonSessionService;
