//! Wizard progress bar.

use dioxus::prelude::*;

use crate::data_definitions::wizard_step::WizardStep;

#[component]
pub fn WizardProgress(step: ReadSignal<WizardStep>) -> Element {
    let percent = use_memo(move || step().position() * 100 / WizardStep::STAGE_COUNT);

    rsx! {
        div {
            class: "x-progress-track",
            div {
                class: "x-progress-fill",
                style: "width: {percent()}%;",
            }
        }
    }
}
