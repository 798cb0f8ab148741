//! Live UTC clock shown on the intro page.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use web_sys::js_sys::Date;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone, PartialEq)]
struct ClockText {
    date_line: String,
    time_line: String,
    meridiem: &'static str,
}

fn read_utc_clock() -> ClockText {
    let now = Date::new_0();
    let weekday = WEEKDAYS[now.get_utc_day() as usize % 7];
    let month = MONTHS[now.get_utc_month() as usize % 12];
    let date_line = format!(
        "{weekday}, {month} {}, {}",
        now.get_utc_date(),
        now.get_utc_full_year()
    );

    let hours = now.get_utc_hours();
    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let mut display_hours = hours % 12;
    if display_hours == 0 {
        display_hours = 12;
    }
    let time_line = format!(
        "{display_hours:02}:{:02}:{:02}",
        now.get_utc_minutes(),
        now.get_utc_seconds()
    );

    ClockText {
        date_line,
        time_line,
        meridiem,
    }
}

#[component]
pub fn UtcClock() -> Element {
    let mut clock = use_signal(read_utc_clock);
    use_future(move || async move {
        loop {
            TimeoutFuture::new(1_000).await;
            clock.set(read_utc_clock());
        }
    });

    rsx! {
        div {
            class: "x-clock",
            aria_label: "Current UTC time",
            div {
                class: "x-clock-date",
                "{clock().date_line} (UTC)"
            }
            div {
                class: "x-clock-time",
                span { "{clock().time_line}" }
                span { class: "x-clock-meridiem", "{clock().meridiem}" }
            }
        }
    }
}
