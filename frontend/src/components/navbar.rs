//! Top navigation bar layout: brand link plus the "open on Google" shortcut
//! for the query built from the current route's selections.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

use common::query_string::{build_query_string, google_search_url};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let query_string = match &route {
        Route::IntroPage {} => String::new(),
        Route::WizardPage { selection, .. } | Route::PreviewPage { selection } => {
            build_query_string(&selection.0.to_search_query())
        }
    };
    let google_href = google_search_url(&query_string);

    rsx! {
        div {
            id: "x-app-container",

            header {
                id: "x-top-bar",

                Link {
                    to: Route::IntroPage {},
                    id: "x-top-bar-brand",
                    "Talent Search"
                }

                div { style: "flex-grow:1;" }

                GoogleOpenButton { href: google_href }
            }

            main {
                id: "x-page-container",
                GlobalErrorBoundary {
                    boundary_name: "Pages".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn GoogleOpenButton(href: ReadSignal<Option<String>>) -> Element {
    match href() {
        Some(url) => rsx! {
            a {
                class: "x-google-button",
                href: "{url}",
                target: "_blank",
                rel: "noreferrer",
                aria_label: "Open in Google",
                onclick: move |_| {
                    dioxus::logger::tracing::info!("Opening the built query on Google");
                },
                Icon { icon: MdOpenInNew, style: "width: 18px; height: 18px;" }
            }
        },
        None => rsx! {
            span {
                class: "x-google-button x-google-button-inert",
                aria_label: "Open in Google",
                Icon { icon: MdOpenInNew, style: "width: 18px; height: 18px;" }
            }
        },
    }
}
