use dioxus::prelude::*;

use common::selection::SelectionState;

use crate::components::step_arrows::StepArrows;
use crate::components::wizard_progress::WizardProgress;
use crate::components::wizard_steps::{
    ExcludesStep, KeywordsStep, LocationsStep, SiteStep, TypesStep,
};
use crate::data_definitions::selection_param::SelectionParam;
use crate::data_definitions::wizard_step::WizardStep;
use crate::routes::Route;


#[component]
pub fn WizardPage(step: WizardStep, selection: SelectionParam) -> Element {
    rsx! {
        Title { "Talent Search: {step.title()}" }
        WizardPageRoot {
            step,
            selection: selection.0.clone(),
        }
    }
}

#[component]
fn WizardPageRoot(step: ReadSignal<WizardStep>, selection: ReadSignal<SelectionState>) -> Element {
    let mut edited = use_signal(|| selection.read().clone());
    // when the url changes (the read signal given to us), we need to update
    // the local signal, as it is not reset by navigation.
    use_effect(move || {
        let incoming = selection.read().clone();
        edited.set(incoming);
    });

    let go_next = use_callback(move |_: ()| {
        let state = edited.peek().clone();
        match step.peek().next() {
            Some(next_step) => {
                navigator().push(Route::wizard_step(next_step, state));
            }
            None => {
                navigator().push(Route::preview(state));
            }
        }
    });
    let go_back = use_callback(move |_: ()| {
        let state = edited.peek().clone();
        match step.peek().back() {
            Some(previous_step) => {
                navigator().push(Route::wizard_step(previous_step, state));
            }
            None => {
                navigator().push(Route::IntroPage {});
            }
        }
    });

    rsx! {
        WizardProgress { step }

        div {
            class: "x-step animate-step-in",

            div {
                class: "x-step-prompt",
                "{step().prompt()}"
            }

            match step() {
                WizardStep::Site => rsx! {
                    SiteStep { selection: edited, on_submit: go_next }
                },
                WizardStep::Types => rsx! {
                    TypesStep { selection: edited }
                },
                WizardStep::Keywords => rsx! {
                    KeywordsStep { selection: edited, on_submit: go_next }
                },
                WizardStep::Locations => rsx! {
                    LocationsStep { selection: edited }
                },
                WizardStep::Excludes => rsx! {
                    ExcludesStep { selection: edited, on_submit: go_next }
                },
            }
        }

        StepArrows { on_back: go_back, on_next: go_next }
    }
}
