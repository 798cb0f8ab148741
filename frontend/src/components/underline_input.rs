//! Centered underline text input; Enter submits the step.

use dioxus::prelude::*;

#[component]
pub fn UnderlineInput(
    value: ReadSignal<String>,
    placeholder: String,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> Element {
    rsx! {
        input {
            class: "x-underline-input",
            r#type: "text",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |event: Event<FormData>| on_input(event.value()),
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Enter {
                    on_submit(());
                }
            },
        }
    }
}
