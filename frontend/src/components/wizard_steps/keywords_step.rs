use dioxus::prelude::*;

use common::catalog::KEYWORD_PRESETS;
use common::search_query::JoinOperator;
use common::selection::SelectionState;

use crate::components::chip::Chip;
use crate::components::underline_input::UnderlineInput;

#[component]
pub fn KeywordsStep(selection: Signal<SelectionState>, on_submit: Callback<()>) -> Element {
    rsx! {
        for preset in KEYWORD_PRESETS.iter() {
            div {
                class: "x-chip-group",
                div { class: "x-chip-group-title", "{preset.group}" }
                div {
                    class: "x-chip-row",
                    for term in preset.terms.iter() {
                        Chip {
                            pressed: selection
                                .read()
                                .preset_keywords
                                .get(preset.group)
                                .is_some_and(|terms| terms.contains(*term)),
                            on_toggle: move |on: bool| {
                                selection.write().toggle_preset_keyword(preset.group, term, on);
                            },
                            label: term.to_string(),
                        }
                    }
                }
            }
        }

        UnderlineInput {
            value: selection.read().extra_keywords_csv.clone(),
            placeholder: "Add custom keywords (comma-separated), e.g. \"design systems\", accessibility".to_string(),
            on_input: move |value: String| selection.write().extra_keywords_csv = value,
            on_submit,
        }

        JoinSelect { selection }
    }
}

/// Floating AND/OR control for the keyword group.
#[component]
fn JoinSelect(selection: Signal<SelectionState>) -> Element {
    rsx! {
        div {
            class: "x-join-select",
            span { "Join" }
            select {
                value: "{selection.read().keyword_join.as_str()}",
                onchange: move |event: Event<FormData>| {
                    selection.write().keyword_join = if event.value() == "AND" {
                        JoinOperator::And
                    } else {
                        JoinOperator::Or
                    };
                },
                option { value: "AND", "AND" }
                option { value: "OR", "OR" }
            }
        }
    }
}
