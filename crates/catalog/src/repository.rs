use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use signlearn_core::model::{
    Achievement, DailyGoal, LearnerProfile, LearnerStats, Lesson, LessonId, PackageId, Question,
    SubscriptionPackage, WeeklyActivity,
};
use thiserror::Error;

use crate::seed::{BUILTIN_CATALOG_JSON, CatalogRecord};

/// Errors surfaced by catalog lookups and loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("not found")]
    NotFound,

    #[error("invalid catalog: {0}")]
    Invalid(String),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the profile screen shows, fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub profile: LearnerProfile,
    pub stats: LearnerStats,
    pub daily_goal: DailyGoal,
    pub weekly_activity: WeeklyActivity,
}

/// Validated catalog contents. Built once, shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogContent {
    pub lessons: Vec<Lesson>,
    pub questions: HashMap<LessonId, Vec<Question>>,
    pub packages: Vec<SubscriptionPackage>,
    pub achievements: Vec<Achievement>,
    pub profile: ProfileSnapshot,
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// All lessons in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing store cannot be read.
    async fn list_lessons(&self) -> Result<Vec<Lesson>, CatalogError>;

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown id.
    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, CatalogError>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Questions of a lesson, in play order. Empty when the lesson has none.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown lesson.
    async fn questions_for_lesson(&self, lesson_id: LessonId) -> Result<Vec<Question>, CatalogError>;
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing store cannot be read.
    async fn list_packages(&self) -> Result<Vec<SubscriptionPackage>, CatalogError>;

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown id.
    async fn get_package(&self, id: &PackageId) -> Result<SubscriptionPackage, CatalogError>;
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing store cannot be read.
    async fn list_achievements(&self) -> Result<Vec<Achievement>, CatalogError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing store cannot be read.
    async fn profile_snapshot(&self) -> Result<ProfileSnapshot, CatalogError>;
}

/// Read-only, in-process catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    content: Arc<CatalogContent>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(content: CatalogContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    #[must_use]
    pub fn content(&self) -> &CatalogContent {
        &self.content
    }
}

#[async_trait]
impl LessonRepository for InMemoryCatalog {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, CatalogError> {
        Ok(self.content.lessons.clone())
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, CatalogError> {
        self.content
            .lessons
            .iter()
            .find(|lesson| lesson.id() == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryCatalog {
    async fn questions_for_lesson(&self, lesson_id: LessonId) -> Result<Vec<Question>, CatalogError> {
        if !self.content.lessons.iter().any(|l| l.id() == lesson_id) {
            return Err(CatalogError::NotFound);
        }
        Ok(self
            .content
            .questions
            .get(&lesson_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl PackageRepository for InMemoryCatalog {
    async fn list_packages(&self) -> Result<Vec<SubscriptionPackage>, CatalogError> {
        Ok(self.content.packages.clone())
    }

    async fn get_package(&self, id: &PackageId) -> Result<SubscriptionPackage, CatalogError> {
        self.content
            .packages
            .iter()
            .find(|pkg| pkg.id() == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }
}

#[async_trait]
impl AchievementRepository for InMemoryCatalog {
    async fn list_achievements(&self) -> Result<Vec<Achievement>, CatalogError> {
        Ok(self.content.achievements.clone())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryCatalog {
    async fn profile_snapshot(&self) -> Result<ProfileSnapshot, CatalogError> {
        Ok(self.content.profile.clone())
    }
}

/// Aggregates the catalog repositories behind trait objects so tests can swap any of them.
#[derive(Clone)]
pub struct Catalog {
    pub lessons: Arc<dyn LessonRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub packages: Arc<dyn PackageRepository>,
    pub achievements: Arc<dyn AchievementRepository>,
    pub profile: Arc<dyn ProfileRepository>,
}

impl Catalog {
    #[must_use]
    pub fn in_memory(content: CatalogContent) -> Self {
        let repo = InMemoryCatalog::new(content);
        Self {
            lessons: Arc::new(repo.clone()),
            questions: Arc::new(repo.clone()),
            packages: Arc::new(repo.clone()),
            achievements: Arc::new(repo.clone()),
            profile: Arc::new(repo),
        }
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled seed fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and `CatalogError::Invalid`
    /// for content that fails domain validation.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let record: CatalogRecord = serde_json::from_str(raw)?;
        Ok(Self::in_memory(record.into_content()?))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as `from_json_str`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded catalog from file");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_lessons_resolve_questions() {
        let catalog = Catalog::builtin().unwrap();
        let lessons = catalog.lessons.list_lessons().await.unwrap();
        assert_eq!(lessons.len(), 5);

        let first = lessons[0].id();
        let questions = catalog.questions.questions_for_lesson(first).await.unwrap();
        assert_eq!(questions.len(), 3);
    }

    #[tokio::test]
    async fn unknown_lesson_is_not_found() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.lessons.get_lesson(LessonId::new(99)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
        let err = catalog
            .questions
            .questions_for_lesson(LessonId::new(99))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn packages_are_looked_up_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let yearly = PackageId::new("yearly").unwrap();
        let pkg = catalog.packages.get_package(&yearly).await.unwrap();
        assert!(pkg.is_popular());
        assert_eq!(pkg.price(), "$79.99");

        let missing = PackageId::new("weekly").unwrap();
        assert!(matches!(
            catalog.packages.get_package(&missing).await,
            Err(CatalogError::NotFound)
        ));
    }
}
