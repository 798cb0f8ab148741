use dioxus::prelude::*;

use common::selection::SelectionState;

use crate::components::underline_input::UnderlineInput;

#[component]
pub fn ExcludesStep(selection: Signal<SelectionState>, on_submit: Callback<()>) -> Element {
    rsx! {
        UnderlineInput {
            value: selection.read().excludes_csv.clone(),
            placeholder: "remote only, meta...".to_string(),
            on_input: move |value: String| selection.write().excludes_csv = value,
            on_submit,
        }

        div {
            class: "x-step-hint",
            "These will be grouped and negated: -(\"recruiter\" OR \"hiring\")"
        }
    }
}
