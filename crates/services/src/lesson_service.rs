use std::sync::Arc;

use signlearn_catalog::{CatalogError, LessonRepository};
use signlearn_core::model::{Lesson, LessonId, LessonStatus};

use crate::error::LessonServiceError;

/// Where tapping a lesson card leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAccess {
    Start(LessonId),
    ShowPaywall,
}

impl LessonAccess {
    /// Locked lessons open the paywall until premium is active.
    #[must_use]
    pub fn for_lesson(lesson: &Lesson, premium: bool) -> Self {
        if lesson.is_available(premium) {
            Self::Start(lesson.id())
        } else {
            Self::ShowPaywall
        }
    }
}

/// A lesson paired with how it should render for the current premium state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonListItem {
    pub lesson: Lesson,
    pub status: LessonStatus,
}

impl LessonListItem {
    #[must_use]
    pub fn new(lesson: Lesson, premium: bool) -> Self {
        let status = lesson.status(premium);
        Self { lesson, status }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status != LessonStatus::Locked
    }

    /// Percentage badge and bar only appear once there is something to show.
    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.is_available() && self.lesson.progress().value() > 0
    }

    #[must_use]
    pub fn shows_premium_badge(&self) -> bool {
        !self.is_available()
    }
}

/// Lesson list and access rules for the home screen.
#[derive(Clone)]
pub struct LessonService {
    lessons: Arc<dyn LessonRepository>,
}

impl LessonService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonRepository>) -> Self {
        Self { lessons }
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Catalog` if the catalog cannot be read.
    pub async fn list_lessons(&self, premium: bool) -> Result<Vec<LessonListItem>, LessonServiceError> {
        let lessons = self.lessons.list_lessons().await?;
        Ok(lessons
            .into_iter()
            .map(|lesson| LessonListItem::new(lesson, premium))
            .collect())
    }

    /// Decide whether a tap starts the lesson or shows the paywall.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::UnknownLesson` for an id not in the catalog.
    pub async fn open_lesson(
        &self,
        id: LessonId,
        premium: bool,
    ) -> Result<LessonAccess, LessonServiceError> {
        let lesson = self.lessons.get_lesson(id).await.map_err(|err| match err {
            CatalogError::NotFound => LessonServiceError::UnknownLesson(id),
            other => other.into(),
        })?;
        let access = LessonAccess::for_lesson(&lesson, premium);
        tracing::info!(lesson = %id, premium, ?access, "lesson opened");
        Ok(access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signlearn_catalog::Catalog;

    fn service() -> LessonService {
        LessonService::new(Catalog::builtin().unwrap().lessons)
    }

    #[tokio::test]
    async fn locked_lesson_shows_paywall_until_premium() {
        let svc = service();
        let locked = LessonId::new(2);
        assert_eq!(
            svc.open_lesson(locked, false).await.unwrap(),
            LessonAccess::ShowPaywall
        );
        assert_eq!(
            svc.open_lesson(locked, true).await.unwrap(),
            LessonAccess::Start(locked)
        );
    }

    #[tokio::test]
    async fn unlocked_lesson_always_starts() {
        let svc = service();
        let open = LessonId::new(1);
        for premium in [false, true] {
            assert_eq!(
                svc.open_lesson(open, premium).await.unwrap(),
                LessonAccess::Start(open)
            );
        }
    }

    #[tokio::test]
    async fn unknown_lesson_is_an_error() {
        let err = service()
            .open_lesson(LessonId::new(42), false)
            .await
            .unwrap_err();
        assert!(matches!(err, LessonServiceError::UnknownLesson(id) if id == LessonId::new(42)));
    }

    #[tokio::test]
    async fn list_items_hide_progress_for_locked_lessons() {
        let items = service().list_lessons(false).await.unwrap();
        let first = &items[0];
        assert!(first.shows_progress());
        assert!(!first.shows_premium_badge());

        let second = &items[1];
        assert_eq!(second.status, LessonStatus::Locked);
        assert!(!second.shows_progress());
        assert!(second.shows_premium_badge());

        let unlocked = service().list_lessons(true).await.unwrap();
        assert!(unlocked.iter().all(LessonListItem::is_available));
        assert!(!unlocked[3].shows_progress());
    }
}
