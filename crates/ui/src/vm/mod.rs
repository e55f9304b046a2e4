mod lesson_card_vm;
mod lesson_vm;
mod paywall_vm;
mod stats_vm;

pub use lesson_card_vm::{LessonCardVm, map_lesson_cards};
pub use lesson_vm::{
    FeedbackVm, LessonIntent, LessonOutcome, LessonVm, OptionTileVm, start_lesson,
};
pub use paywall_vm::{PackageCardVm, PaywallIntent, map_package_cards};
pub use stats_vm::{
    AchievementVm, StatTileVm, WeekBarVm, home_stat_tiles, learning_stat_tiles, map_achievements,
    map_week_bars, user_card_stats,
};
