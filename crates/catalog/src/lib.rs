#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;

pub use repository::{
    AchievementRepository, Catalog, CatalogContent, CatalogError, InMemoryCatalog,
    LessonRepository, PackageRepository, ProfileRepository, ProfileSnapshot, QuestionRepository,
};
pub use seed::{BUILTIN_CATALOG_JSON, CatalogRecord};
