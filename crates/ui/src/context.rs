use std::sync::Arc;

use dioxus::prelude::*;
use services::{LearnerService, LessonService, LessonSessionService, SubscriptionService};
use signlearn_core::model::LessonId;

use crate::vm::LessonVm;

pub trait UiApp: Send + Sync {
    fn lessons(&self) -> Arc<LessonService>;
    fn lesson_sessions(&self) -> Arc<LessonSessionService>;
    fn subscription(&self) -> Arc<SubscriptionService>;
    fn learner(&self) -> Arc<LearnerService>;
}

#[derive(Clone)]
pub struct AppContext {
    lessons: Arc<LessonService>,
    lesson_sessions: Arc<LessonSessionService>,
    subscription: Arc<SubscriptionService>,
    learner: Arc<LearnerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lessons: app.lessons(),
            lesson_sessions: app.lesson_sessions(),
            subscription: app.subscription(),
            learner: app.learner(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive per-window state shared by every screen.
///
/// `premium` mirrors the subscription service flag so views re-render when it flips.
/// `lesson_run` outlives any single screen so switching tabs resumes the lesson.
#[derive(Clone, Copy)]
pub struct AppState {
    premium: Signal<bool>,
    active_lesson: Signal<Option<LessonId>>,
    lesson_run: Signal<Option<LessonVm>>,
}

impl AppState {
    #[must_use]
    pub fn is_premium(&self) -> bool {
        (self.premium)()
    }

    pub fn mark_premium(&mut self) {
        self.premium.set(true);
    }

    #[must_use]
    pub fn active_lesson(&self) -> Option<LessonId> {
        (self.active_lesson)()
    }

    pub fn set_active_lesson(&mut self, lesson: Option<LessonId>) {
        self.active_lesson.set(lesson);
    }

    #[must_use]
    pub fn lesson_run(&self) -> Signal<Option<LessonVm>> {
        self.lesson_run
    }

    /// Forget the lesson in progress along with its answers.
    pub fn end_lesson(&mut self) {
        self.active_lesson.set(None);
        self.lesson_run.set(None);
    }
}

/// Create the shared `AppState` below the `AppContext` provider.
pub fn use_app_state_provider() -> AppState {
    let ctx = use_context::<AppContext>();
    let initial = ctx.subscription().is_premium();
    let premium = use_signal(move || initial);
    let active_lesson = use_signal(|| None::<LessonId>);
    let lesson_run = use_signal(|| None::<LessonVm>);
    use_context_provider(|| AppState {
        premium,
        active_lesson,
        lesson_run,
    })
}

#[must_use]
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
