mod achievement;
mod ids;
mod lesson;
mod media;
mod package;
mod profile;
mod question;

pub use achievement::{Achievement, AchievementError, AchievementTally};
pub use ids::{AchievementId, KeyError, LessonId, OptionId, PackageId, ParseIdError, QuestionId};
pub use lesson::{Lesson, LessonError, LessonStatus, Percent};
pub use media::{MediaUri, MediaValidationError, PLACEHOLDER_IMAGE_BASE};
pub use package::{PackageError, SubscriptionPackage};
pub use profile::{DailyGoal, DayActivity, LearnerProfile, LearnerStats, ProfileError, WeeklyActivity};
pub use question::{AnswerOption, Question, QuestionDraft, QuestionError, QuestionKind};
