//! Toggle chip used by every selection step.

use dioxus::prelude::*;

#[component]
pub fn Chip(pressed: ReadSignal<bool>, on_toggle: Callback<bool>, label: ReadSignal<String>) -> Element {
    let background = use_memo(move || if pressed() { "#ec4899" } else { "#f4f4f5" });
    let color = use_memo(move || if pressed() { "#ffffff" } else { "#18181b" });
    let border = use_memo(move || {
        if pressed() {
            "1px solid transparent"
        } else {
            "1px solid #d4d4d8"
        }
    });

    rsx! {
        button {
            class: "x-chip",
            style: "background: {background()}; color: {color()}; border: {border()};",
            onclick: move |_| on_toggle(!pressed()),
            "{label}"
        }
    }
}
