use dioxus::prelude::*;

/// Labelled text field.
#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(into)] label: String,
    #[props(default, into)] placeholder: String,
    #[props(default = "text".to_string(), into)] input_type: String,
    value: String,
    #[props(default)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field__label", r#for: "{id}", "{label}" }
            input {
                class: "field__input",
                id: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
