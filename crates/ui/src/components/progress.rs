use dioxus::prelude::*;

/// Horizontal bar; `value` is clamped to 0..=100.
#[component]
pub fn ProgressBar(value: u8, #[props(default, into)] class: String) -> Element {
    let value = value.min(100);
    rsx! {
        div {
            class: "progress {class}",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{value}",
            div { class: "progress__fill", style: "width: {value}%;" }
        }
    }
}
