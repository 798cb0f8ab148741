use dioxus::prelude::*;

use common::countries::COUNTRIES;
use common::selection::SelectionState;

use crate::components::chip::Chip;

#[component]
pub fn LocationsStep(selection: Signal<SelectionState>) -> Element {
    let selected_countries = use_memo(move || selection.read().countries.clone());

    rsx! {
        div {
            class: "x-chip-row",
            for country in COUNTRIES.iter() {
                Chip {
                    pressed: selected_countries.read().contains(country.code),
                    on_toggle: move |on: bool| selection.write().toggle_country(country.code, on),
                    label: format!("{} {}", country.flag, country.name),
                }
            }
        }

        for country in COUNTRIES.iter().filter(|country| selected_countries.read().contains(country.code)) {
            div {
                class: "x-chip-group",
                div {
                    class: "x-chip-group-title",
                    "{country.flag} {country.name}: top cities"
                }
                div {
                    class: "x-chip-row",
                    for city in country.cities.iter() {
                        Chip {
                            pressed: selection.read().cities.contains(*city),
                            on_toggle: move |on: bool| selection.write().toggle_city(city, on),
                            label: city.to_string(),
                        }
                    }
                }
            }
        }
    }
}
