use anyhow::anyhow;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_content_icons::MdContentCopy, md_navigation_icons::MdChevronLeft},
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use common::query_string::{build_query_string, google_search_url};
use common::selection::SelectionState;

use crate::data_definitions::selection_param::SelectionParam;
use crate::data_definitions::wizard_step::WizardStep;
use crate::routes::Route;


#[component]
pub fn PreviewPage(selection: SelectionParam) -> Element {
    rsx! {
        Title { "Talent Search: Preview" }
        PreviewPageRoot {
            selection: selection.0.clone(),
        }
    }
}

#[component]
fn PreviewPageRoot(selection: ReadSignal<SelectionState>) -> Element {
    let query = use_memo(move || build_query_string(&selection.read().to_search_query()));
    let google_href = use_memo(move || google_search_url(&query.read()));
    let has_query = use_memo(move || !query.read().trim().is_empty());
    let mut copied = use_signal(|| false);

    let copy_query = use_callback(move |_: ()| {
        let text = query.peek().clone();
        if text.is_empty() {
            return;
        }
        spawn(async move {
            match write_to_clipboard(&text).await {
                Ok(()) => {
                    dioxus::logger::tracing::info!("Search term copied to clipboard");
                    copied.set(true);
                    TimeoutFuture::new(1_200).await;
                    copied.set(false);
                }
                Err(err) => {
                    dioxus::logger::tracing::warn!("Clipboard write failed: {err:#}");
                }
            }
        });
    });

    rsx! {
        div {
            class: "x-preview animate-step-in",

            if has_query() {
                h1 { class: "x-preview-heading", "\u{1F389} Success!" }
                p {
                    class: "x-preview-subtext",
                    "Open in Google or copy the boolean search term"
                }
                code { class: "x-preview-query", "{query}" }

                div {
                    class: "x-preview-actions",
                    match google_href() {
                        Some(url) => rsx! {
                            a {
                                class: "x-action-button x-action-button-primary",
                                href: "{url}",
                                target: "_blank",
                                rel: "noreferrer",
                                onclick: move |_| {
                                    dioxus::logger::tracing::info!("Opening the built query on Google");
                                },
                                "Open in Google"
                            }
                        },
                        None => rsx! {},
                    }
                    button {
                        class: "x-action-button",
                        onclick: move |_| copy_query(()),
                        Icon { icon: MdContentCopy, style: "width: 16px; height: 16px;" }
                        if copied() { "Copied!" } else { "Copy search term" }
                    }
                }

                p { class: "x-step-hint", "Tip: the search opens in a new tab." }
            } else {
                h1 { class: "x-preview-heading", "\u{1F62B} Oh noooo!" }
                p {
                    class: "x-preview-subtext",
                    "Looks like you didn't select any filters!"
                }
                button {
                    class: "x-action-button",
                    onclick: move |_| {
                        navigator().push(Route::wizard_start());
                    },
                    "Start over"
                }
            }
        }

        button {
            class: "x-step-arrow x-step-arrow-left",
            aria_label: "Back",
            onclick: move |_| {
                navigator().push(Route::wizard_step(
                    WizardStep::Excludes,
                    selection.read().clone(),
                ));
            },
            Icon { icon: MdChevronLeft, style: "width: 32px; height: 32px; color: #111827;" }
        }
    }
}

async fn write_to_clipboard(text: &str) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|err: JsValue| anyhow!("clipboard rejected the write: {err:?}"))?;
    Ok(())
}
