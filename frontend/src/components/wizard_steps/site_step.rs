use dioxus::prelude::*;

use common::catalog::SITE_SUGGESTIONS;
use common::selection::SelectionState;

use crate::components::chip::Chip;
use crate::components::underline_input::UnderlineInput;

#[component]
pub fn SiteStep(selection: Signal<SelectionState>, on_submit: Callback<()>) -> Element {
    rsx! {
        UnderlineInput {
            value: selection.read().site.clone(),
            placeholder: "e.g. github.com".to_string(),
            on_input: move |value: String| selection.write().site = value,
            on_submit,
        }

        div {
            class: "x-chip-row",
            for site in SITE_SUGGESTIONS.iter() {
                Chip {
                    pressed: selection.read().site.trim().eq_ignore_ascii_case(site),
                    on_toggle: move |_: bool| selection.write().site = site.to_string(),
                    label: site.to_string(),
                }
            }
        }
    }
}
