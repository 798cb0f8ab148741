use dioxus::prelude::*;
use web_sys::js_sys::Date;

use crate::components::clock::UtcClock;
use crate::routes::Route;


fn utc_greeting() -> (&'static str, &'static str) {
    let hour = Date::new_0().get_utc_hours();
    if (5..12).contains(&hour) {
        ("\u{1F305}", "Good morning!")
    } else if (12..18).contains(&hour) {
        ("\u{1F31E}", "Good afternoon!")
    } else {
        ("\u{1F319}", "Good evening!")
    }
}

/// Intro page
#[component]
pub fn IntroPage() -> Element {
    let (emoji, label) = utc_greeting();

    rsx! {
        Title { "Talent Search" }
        div {
            class: "x-intro animate-step-in",

            h1 {
                class: "x-intro-heading",
                "{emoji} {label}"
            }

            UtcClock {}

            p {
                class: "x-intro-subtext",
                "Ready to build a powerful boolean search? Press "
                strong { "Start" }
                " to begin."
            }

            button {
                class: "x-start-button",
                onclick: move |_| {
                    navigator().push(Route::wizard_start());
                },
                "Start"
            }
        }
    }
}
