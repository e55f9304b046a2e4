#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod learner_service;
pub mod lesson_service;
pub mod paywall;
pub mod sessions;
pub mod subscription;

pub use signlearn_core::Clock;

pub use app_services::{AppServices, ServicesConfig};
pub use error::{
    AppServicesError, LearnerServiceError, LessonServiceError, PaywallError, QuizError,
    SubscriptionError,
};
pub use learner_service::{DashboardSummary, LearnerService, ProfileOverview};
pub use lesson_service::{LessonAccess, LessonListItem, LessonService};
pub use paywall::{PaymentDetails, PaymentField, PaywallFlow, PaywallStep};
pub use sessions::{
    AdvanceOutcome, AnswerCheck, LessonResult, LessonSessionService, OptionState, QuizAction,
    QuizProgress, QuizSession,
};
pub use subscription::{DEFAULT_PAYMENT_DELAY, PaymentReceipt, SubscriptionService};
