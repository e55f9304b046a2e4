use dioxus::prelude::*;

use crate::components::{Avatar, Badge, Button, ButtonVariant, Card};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AchievementVm, StatTileVm, WeekBarVm, learning_stat_tiles, map_achievements, map_week_bars,
    user_card_stats,
};

#[derive(Clone, Debug, PartialEq)]
struct ProfileData {
    initials: String,
    name: String,
    role: String,
    user_stats: Vec<StatTileVm>,
    learning: Vec<StatTileVm>,
    week: Vec<WeekBarVm>,
    achievements: Vec<AchievementVm>,
    tally: String,
}

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let learner = ctx.learner();

    let resource = use_resource(move || {
        let learner = learner.clone();
        async move {
            let overview = learner
                .profile_overview()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let profile = &overview.snapshot.profile;
            Ok::<_, ViewError>(ProfileData {
                initials: profile.initials(),
                name: profile.display_name().to_string(),
                role: profile.role().to_string(),
                user_stats: user_card_stats(&overview.snapshot.stats),
                learning: learning_stat_tiles(&overview.snapshot.stats),
                week: map_week_bars(&overview.snapshot.weekly_activity),
                achievements: map_achievements(&overview.achievements),
                tally: overview.tally.label(),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page profile-page",
            header { class: "profile-header",
                div {
                    h1 { "Profile" }
                    p { class: "muted", "Track your progress" }
                }
                button {
                    class: "icon-button",
                    r#type: "button",
                    aria_label: "Settings",
                    "⚙"
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    Card { class: "user-card",
                        div { class: "user-card__row",
                            Avatar { initials: data.initials.clone(), class: "avatar--lg" }
                            div {
                                h2 { class: "user-card__name", "{data.name}" }
                                p { class: "user-card__role", "{data.role}" }
                            }
                        }
                        div { class: "user-card__stats",
                            for stat in data.user_stats {
                                div { key: "{stat.label}", class: "user-card__stat",
                                    div { class: "user-card__stat-value", "{stat.value}" }
                                    div { class: "user-card__stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }
                    section { class: "profile-section",
                        h3 { "Learning Stats" }
                        div { class: "stat-grid stat-grid--two",
                            for tile in data.learning {
                                Card { key: "{tile.label}", class: "stat-card stat-card--{tile.tone}",
                                    div { class: "stat-card__icon", "{tile.icon}" }
                                    div { class: "stat-card__value", "{tile.value}" }
                                    div { class: "stat-card__label", "{tile.label}" }
                                }
                            }
                        }
                    }
                    section { class: "profile-section",
                        h3 { "Weekly Activity" }
                        Card { class: "week-chart",
                            for bar in data.week {
                                div { key: "{bar.key}", class: "week-chart__column",
                                    div { class: "week-chart__track",
                                        div {
                                            class: "week-chart__bar",
                                            style: "height: {bar.height}%",
                                        }
                                    }
                                    span { class: "week-chart__label", "{bar.short_label}" }
                                }
                            }
                        }
                    }
                    section { class: "profile-section",
                        div { class: "profile-section__header",
                            h3 { "Achievements" }
                            Badge { "{data.tally}" }
                        }
                        div { class: "achievement-list",
                            for achievement in data.achievements {
                                Card { key: "{achievement.key}", class: achievement.class(),
                                    div { class: "achievement__icon", "🏅" }
                                    div { class: "achievement__body",
                                        h4 { class: "achievement__title", "{achievement.title}" }
                                        p { class: "achievement__description", "{achievement.description}" }
                                    }
                                    if achievement.earned {
                                        span { class: "achievement__check", "✓" }
                                    }
                                }
                            }
                        }
                    }
                    Card { class: "live-cta",
                        div { class: "live-cta__icon", "🎥" }
                        h3 { "Live Practice Sessions" }
                        p { "Connect with native ASL speakers" }
                        Button { variant: ButtonVariant::Secondary, class: "btn-block", "Join Waiting List" }
                    }
                },
            }
        }
    }
}
