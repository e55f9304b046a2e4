use services::LessonListItem;
use signlearn_core::model::{LessonId, LessonStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub icon: &'static str,
    pub icon_class: &'static str,
    pub progress: u8,
    pub progress_label: Option<String>,
    pub show_premium_badge: bool,
    pub show_chevron: bool,
    pub dimmed: bool,
}

impl From<&LessonListItem> for LessonCardVm {
    fn from(item: &LessonListItem) -> Self {
        let (icon, icon_class) = match item.status {
            LessonStatus::Locked => ("🔒", "lesson-icon lesson-icon--locked"),
            LessonStatus::Completed => ("✓", "lesson-icon lesson-icon--done"),
            LessonStatus::NotStarted | LessonStatus::InProgress(_) => {
                ("📚", "lesson-icon lesson-icon--open")
            }
        };
        let progress = item.lesson.progress().value();
        let progress_label = item.shows_progress().then(|| format!("{progress}%"));

        Self {
            id: item.lesson.id(),
            title: item.lesson.title().to_string(),
            description: item.lesson.description().to_string(),
            icon,
            icon_class,
            progress,
            progress_label,
            show_premium_badge: item.shows_premium_badge(),
            show_chevron: item.is_available(),
            dimmed: !item.is_available(),
        }
    }
}

#[must_use]
pub fn map_lesson_cards(items: &[LessonListItem]) -> Vec<LessonCardVm> {
    items.iter().map(LessonCardVm::from).collect()
}
