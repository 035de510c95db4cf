use dioxus::prelude::*;

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

/// Labelled text input with a trailing icon.
#[component]
pub fn FormField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    icon: Element,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        document::Stylesheet { href: FORM_CSS }

        div {
            class: "input-tag",
            label { r#for: "{id}", "{label}" }
            div {
                class: "input-tag__control",
                input {
                    id: "{id}",
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    required: true,
                    oninput: move |evt| oninput.call(evt),
                }
                {icon}
            }
        }
    }
}
