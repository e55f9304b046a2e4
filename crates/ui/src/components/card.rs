use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default, into)] class: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    let class = match (clickable, class.is_empty()) {
        (true, true) => "card card--clickable".to_string(),
        (true, false) => format!("card card--clickable {class}"),
        (false, true) => "card".to_string(),
        (false, false) => format!("card {class}"),
    };
    rsx! {
        div {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
