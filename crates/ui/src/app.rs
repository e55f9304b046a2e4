use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_app_state_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_app_state_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "SignLearn" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
