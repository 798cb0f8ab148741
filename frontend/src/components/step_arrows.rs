//! Fixed back/next arrow buttons at the sides of a wizard step.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdChevronLeft, MdChevronRight},
};

#[component]
pub fn StepArrows(on_back: Callback<()>, on_next: Callback<()>) -> Element {
    rsx! {
        button {
            class: "x-step-arrow x-step-arrow-left",
            aria_label: "Back",
            onclick: move |_| on_back(()),
            Icon { icon: MdChevronLeft, style: "width: 32px; height: 32px; color: #111827;" }
        }
        button {
            class: "x-step-arrow x-step-arrow-right",
            aria_label: "Next",
            onclick: move |_| on_next(()),
            Icon { icon: MdChevronRight, style: "width: 32px; height: 32px; color: #111827;" }
        }
    }
}
