use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::LessonAccess;
use signlearn_core::model::LessonId;

use crate::components::{Badge, BadgeVariant, Card, ProgressBar};
use crate::context::{AppContext, use_app_state};
use crate::routes::Route;
use crate::views::{PaywallView, ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonCardVm, StatTileVm, home_stat_tiles, map_lesson_cards};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    tiles: Vec<StatTileVm>,
    goal_label: String,
    goal_percent: u8,
    lessons: Vec<LessonCardVm>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut app_state = use_app_state();
    let mut show_paywall = use_signal(|| false);
    let mut open_error = use_signal(|| None::<ViewError>);
    let lessons = ctx.lessons();
    let learner = ctx.learner();

    let lessons_for_resource = lessons.clone();
    let resource = use_resource(move || {
        let lessons = lessons_for_resource.clone();
        let learner = learner.clone();
        let premium = app_state.is_premium();
        async move {
            let items = lessons
                .list_lessons(premium)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let dashboard = learner.dashboard().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(HomeData {
                tiles: home_stat_tiles(&dashboard.stats),
                goal_label: dashboard.daily_goal.label(),
                goal_percent: dashboard.daily_goal.percent().value(),
                lessons: map_lesson_cards(&items),
            })
        }
    });

    let on_open_lesson = use_callback(move |lesson_id: LessonId| {
        let lessons = lessons.clone();
        let premium = app_state.is_premium();
        spawn(async move {
            match lessons.open_lesson(lesson_id, premium).await {
                Ok(LessonAccess::Start(id)) => {
                    open_error.set(None);
                    app_state.set_active_lesson(Some(id));
                    let _ = navigator.push(Route::Lesson {
                        lesson_id: id.value(),
                    });
                }
                Ok(LessonAccess::ShowPaywall) => show_paywall.set(true),
                Err(err) => {
                    tracing::warn!(lesson = %lesson_id, error = %err, "lesson could not be opened");
                    open_error.set(Some(ViewError::NotFound));
                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        if open_error() == Some(ViewError::NotFound) {
                            open_error.set(None);
                        }
                    });
                }
            }
        });
    });

    if show_paywall() {
        return rsx! {
            PaywallView {
                on_close: move |()| show_paywall.set(false),
                on_complete: move |()| show_paywall.set(false),
            }
        };
    }

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                div { class: "brand",
                    div { class: "brand__logo", "🤟" }
                    span { class: "brand__name", "SignLearn" }
                }
                h1 { "Welcome back!" }
                p { class: "muted", "Continue your ASL journey" }
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
                    div { class: "stat-grid stat-grid--three",
                        for tile in data.tiles {
                            Card { key: "{tile.label}", class: "stat-card stat-card--{tile.tone}",
                                div { class: "stat-card__icon", "{tile.icon}" }
                                div { class: "stat-card__value", "{tile.value}" }
                                div { class: "stat-card__label", "{tile.label}" }
                            }
                        }
                    }
                    Card { class: "goal-card",
                        div { class: "goal-card__header",
                            span { class: "goal-card__title", "🎯 Daily Goal" }
                            span { class: "goal-card__value", "{data.goal_label}" }
                        }
                        ProgressBar { value: data.goal_percent }
                    }
                    section { class: "lessons",
                        h2 { "Your Lessons" }
                        if let Some(err) = open_error() {
                            p { class: "inline-error", "{err.message()}" }
                        }
                        div { class: "lesson-list",
                            for lesson in data.lessons {
                                LessonCard {
                                    key: "{lesson.id}",
                                    lesson: lesson.clone(),
                                    on_open: on_open_lesson,
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonCardVm, on_open: Callback<LessonId>) -> Element {
    let id = lesson.id;
    let class = if lesson.dimmed {
        "lesson-card lesson-card--locked"
    } else {
        "lesson-card"
    };
    rsx! {
        Card { class: "{class}", onclick: move |_| on_open.call(id),
            div { class: "lesson-card__row",
                div { class: "{lesson.icon_class}", "{lesson.icon}" }
                div { class: "lesson-card__body",
                    div { class: "lesson-card__title-row",
                        h3 { class: "lesson-card__title", "{lesson.title}" }
                        if let Some(label) = lesson.progress_label.as_deref() {
                            Badge { "{label}" }
                        }
                        if lesson.show_premium_badge {
                            Badge { variant: BadgeVariant::Outline, "Premium" }
                        }
                    }
                    p { class: "lesson-card__description", "{lesson.description}" }
                    if lesson.progress_label.is_some() {
                        ProgressBar { value: lesson.progress, class: "progress--thin" }
                    }
                }
                if lesson.show_chevron {
                    span { class: "lesson-card__chevron", "›" }
                }
            }
        }
    }
}
