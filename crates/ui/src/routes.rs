use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{HomeView, LearnView, LessonView, ProfileView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/learn", LearnView)] Learn {},
        #[route("/lesson/:lesson_id", LessonView)] Lesson { lesson_id: u64 },
        #[route("/profile", ProfileView)] Profile {},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Home,
    Learn,
    Profile,
}

impl Tab {
    fn of(route: &Route) -> Self {
        match route {
            Route::Home {} => Self::Home,
            Route::Learn {} | Route::Lesson { .. } => Self::Learn,
            Route::Profile {} => Self::Profile,
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            BottomNav {}
        }
    }
}

#[component]
fn BottomNav() -> Element {
    let route = use_route::<Route>();
    let active = Tab::of(&route);
    let tab_class = move |tab: Tab| {
        if tab == active {
            "bottom-nav__item bottom-nav__item--active".to_string()
        } else {
            "bottom-nav__item".to_string()
        }
    };

    rsx! {
        nav { class: "bottom-nav",
            Link { class: tab_class(Tab::Home), to: Route::Home {},
                span { class: "bottom-nav__icon", "🏠" }
                span { class: "bottom-nav__label", "Home" }
            }
            Link { class: tab_class(Tab::Learn), to: Route::Learn {},
                span { class: "bottom-nav__icon", "📖" }
                span { class: "bottom-nav__label", "Learn" }
            }
            Link { class: tab_class(Tab::Profile), to: Route::Profile {},
                span { class: "bottom-nav__icon", "👤" }
                span { class: "bottom-nav__label", "Profile" }
            }
        }
    }
}
