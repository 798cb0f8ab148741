use dioxus::prelude::*;

use common::catalog::TYPE_OPTIONS;
use common::selection::SelectionState;

use crate::components::chip::Chip;

#[component]
pub fn TypesStep(selection: Signal<SelectionState>) -> Element {
    rsx! {
        div {
            class: "x-chip-row",
            for label in TYPE_OPTIONS.iter() {
                Chip {
                    pressed: selection.read().types.contains(*label),
                    on_toggle: move |on: bool| selection.write().toggle_type(label, on),
                    label: label.to_string(),
                }
            }
        }
    }
}
