use signlearn_core::model::{Achievement, LearnerStats, WeeklyActivity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub icon: &'static str,
    pub value: String,
    pub label: &'static str,
    pub tone: &'static str,
}

impl StatTileVm {
    fn new(icon: &'static str, value: impl ToString, label: &'static str, tone: &'static str) -> Self {
        Self {
            icon,
            value: value.to_string(),
            label,
            tone,
        }
    }
}

/// Streak, XP and league tiles at the top of the home screen.
#[must_use]
pub fn home_stat_tiles(stats: &LearnerStats) -> Vec<StatTileVm> {
    vec![
        StatTileVm::new("🔥", stats.streak_days, "Day Streak", "orange"),
        StatTileVm::new("🏆", stats.total_xp, "Total XP", "yellow"),
        StatTileVm::new("👑", stats.league_label(), "League", "blue"),
    ]
}

/// The three figures under the profile user card.
#[must_use]
pub fn user_card_stats(stats: &LearnerStats) -> Vec<StatTileVm> {
    vec![
        StatTileVm::new("", stats.streak_days, "Day Streak", "orange"),
        StatTileVm::new("", stats.total_xp, "Total XP", "orange"),
        StatTileVm::new("", stats.lessons_done, "Lessons Done", "orange"),
    ]
}

#[must_use]
pub fn learning_stat_tiles(stats: &LearnerStats) -> Vec<StatTileVm> {
    vec![
        StatTileVm::new("📈", format!("{}%", stats.accuracy.value()), "Accuracy", "blue"),
        StatTileVm::new("📅", stats.days_active, "Days Active", "green"),
        StatTileVm::new("🎥", stats.live_sessions, "Live Sessions", "purple"),
        StatTileVm::new("👥", stats.league_label(), "League Rank", "pink"),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekBarVm {
    pub key: String,
    pub short_label: String,
    pub height: u8,
}

#[must_use]
pub fn map_week_bars(week: &WeeklyActivity) -> Vec<WeekBarVm> {
    week.days()
        .iter()
        .map(|day| WeekBarVm {
            key: day.label.clone(),
            short_label: day.short_label(),
            height: day.level.value(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub key: String,
    pub title: String,
    pub description: String,
    pub earned: bool,
}

impl AchievementVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.earned {
            "achievement achievement--earned"
        } else {
            "achievement"
        }
    }
}

#[must_use]
pub fn map_achievements(items: &[Achievement]) -> Vec<AchievementVm> {
    items
        .iter()
        .map(|a| AchievementVm {
            key: a.id().to_string(),
            title: a.title().to_string(),
            description: a.description().to_string(),
            earned: a.is_earned(),
        })
        .collect()
}
