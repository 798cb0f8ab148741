//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |error: ErrorContext| {
                rsx! {
                    div {
                        class: "x-error-panel",
                        h1 { "Something went wrong" }
                        p { "Boundary: {boundary_name}" }
                        a { href: "/", "Return to the start" }
                        pre { "{error:#?}" }
                    }
                }
            },
            children
        }
    }
}
