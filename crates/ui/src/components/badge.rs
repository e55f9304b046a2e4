use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    let class = match variant {
        BadgeVariant::Secondary => "badge badge-secondary",
        BadgeVariant::Outline => "badge badge-outline",
    };
    rsx! {
        span { class: "{class}", {children} }
    }
}
