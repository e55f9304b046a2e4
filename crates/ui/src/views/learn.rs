use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::use_app_state;
use crate::routes::Route;
use crate::views::LessonRunner;

/// The Learn tab resumes the lesson opened from Home, if any.
#[component]
pub fn LearnView() -> Element {
    let app_state = use_app_state();

    match app_state.active_lesson() {
        Some(id) => rsx! {
            LessonRunner { key: "{id}", lesson_id: id.value() }
        },
        None => rsx! {
            div { class: "page learn-page empty-state",
                div { class: "empty-state__icon", "📖" }
                h2 { "No lesson in progress" }
                p { class: "muted", "Pick a lesson on the home screen to start practicing." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Browse Lessons" }
            }
        },
    }
}
