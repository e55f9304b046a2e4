//! Shared error types for the services crate.

use thiserror::Error;

use signlearn_catalog::CatalogError;
use signlearn_core::model::{LessonId, OptionId, PackageId};

use crate::paywall::PaywallStep;

/// Misuse of a running quiz. The UI disables the controls that would trigger these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("lesson has no questions")]
    Empty,
    #[error("no answer selected")]
    NoSelection,
    #[error("option {0} is not part of the current question")]
    UnknownOption(OptionId),
    #[error("answer already checked")]
    AlreadyRevealed,
    #[error("answer not checked yet")]
    NotRevealed,
}

/// Errors emitted by `LessonService` and `LessonSessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("lesson {0} not found")]
    UnknownLesson(LessonId),
    #[error("lesson {0} requires premium")]
    Locked(LessonId),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Invalid paywall transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaywallError {
    #[error("no subscription packages available")]
    NoPackages,
    #[error("unknown package {0}")]
    UnknownPackage(PackageId),
    #[error("cannot {action} during {step:?}")]
    InvalidStep {
        action: &'static str,
        step: PaywallStep,
    },
}

/// Errors emitted by `SubscriptionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubscriptionError {
    #[error(transparent)]
    Paywall(#[from] PaywallError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted by `LearnerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearnerServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
