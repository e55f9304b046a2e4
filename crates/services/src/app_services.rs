use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use signlearn_catalog::Catalog;

use crate::Clock;
use crate::error::AppServicesError;
use crate::learner_service::LearnerService;
use crate::lesson_service::LessonService;
use crate::sessions::LessonSessionService;
use crate::subscription::{DEFAULT_PAYMENT_DELAY, SubscriptionService};

/// Runtime knobs for the service layer.
#[derive(Debug, Clone, Copy)]
pub struct ServicesConfig {
    pub clock: Clock,
    pub payment_delay: Duration,
    pub premium: bool,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            clock: Clock::system(),
            payment_delay: DEFAULT_PAYMENT_DELAY,
            premium: false,
        }
    }
}

/// Assembles app-facing services over one catalog.
#[derive(Clone)]
pub struct AppServices {
    lessons: Arc<LessonService>,
    lesson_sessions: Arc<LessonSessionService>,
    subscription: Arc<SubscriptionService>,
    learner: Arc<LearnerService>,
}

impl AppServices {
    #[must_use]
    pub fn new(catalog: &Catalog, config: ServicesConfig) -> Self {
        let lessons = Arc::new(LessonService::new(Arc::clone(&catalog.lessons)));
        let lesson_sessions = Arc::new(LessonSessionService::new(
            config.clock,
            Arc::clone(&catalog.lessons),
            Arc::clone(&catalog.questions),
        ));
        let subscription = Arc::new(
            SubscriptionService::new(
                config.clock,
                Arc::clone(&catalog.packages),
                config.payment_delay,
            )
            .with_premium(config.premium),
        );
        let learner = Arc::new(LearnerService::new(
            Arc::clone(&catalog.profile),
            Arc::clone(&catalog.achievements),
        ));

        Self {
            lessons,
            lesson_sessions,
            subscription,
            learner,
        }
    }

    /// Build services over the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalog fails validation.
    pub fn builtin(config: ServicesConfig) -> Result<Self, AppServicesError> {
        let catalog = Catalog::builtin()?;
        Ok(Self::new(&catalog, config))
    }

    /// Build services over a catalog file, or the bundled one when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog cannot be read or fails validation.
    pub fn load(path: Option<&Path>, config: ServicesConfig) -> Result<Self, AppServicesError> {
        let catalog = match path {
            Some(path) => Catalog::from_path(path)?,
            None => {
                tracing::info!("using bundled catalog");
                Catalog::builtin()?
            }
        };
        Ok(Self::new(&catalog, config))
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn lesson_sessions(&self) -> Arc<LessonSessionService> {
        Arc::clone(&self.lesson_sessions)
    }

    #[must_use]
    pub fn subscription(&self) -> Arc<SubscriptionService> {
        Arc::clone(&self.subscription)
    }

    #[must_use]
    pub fn learner(&self) -> Arc<LearnerService> {
        Arc::clone(&self.learner)
    }
}
