use dioxus::prelude::*;

#[component]
pub fn Avatar(initials: String, #[props(default, into)] class: String) -> Element {
    rsx! {
        div { class: "avatar {class}",
            span { class: "avatar__fallback", "{initials}" }
        }
    }
}
