//! Wizard selection state and the merge rules that turn it into one query
//! snapshot.
//!
//! Every update is a plain value transition on owned sets; the query builder
//! never sees this type, only the [`SearchQuery`] assembled from it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::countries::country_by_code;
use crate::search_query::{JoinOperator, SearchQuery};


/// Splits a comma-separated field into trimmed, non-empty terms.
pub fn split_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}


/// The user's current wizard selections.
///
/// Preset keywords are kept per group so the keyword step can render each
/// group's chips independently; countries are stored by code, cities as
/// free-standing names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionState {
    pub site: String,
    pub types: BTreeSet<String>,
    pub preset_keywords: BTreeMap<String, BTreeSet<String>>,
    pub extra_keywords_csv: String,
    pub keyword_join: JoinOperator,
    pub countries: BTreeSet<String>,
    pub cities: BTreeSet<String>,
    pub excludes_csv: String,
}

impl SelectionState {
    /// The selections a fresh wizard run starts from.
    pub fn initial() -> Self {
        Self {
            site: "github.com".to_string(),
            types: BTreeSet::from(["frontend".to_string()]),
            preset_keywords: BTreeMap::from([(
                "Frontend".to_string(),
                BTreeSet::from(["react".to_string(), "typescript".to_string()]),
            )]),
            ..Self::default()
        }
    }

    pub fn toggle_type(&mut self, label: &str, on: bool) {
        if on {
            self.types.insert(label.to_string());
        } else {
            self.types.remove(label);
        }
    }

    pub fn toggle_preset_keyword(&mut self, group: &str, term: &str, on: bool) {
        let entry = self.preset_keywords.entry(group.to_string()).or_default();
        if on {
            entry.insert(term.to_string());
        } else {
            entry.remove(term);
        }
        if entry.is_empty() {
            self.preset_keywords.remove(group);
        }
    }

    /// Deselecting a country also deselects all of that country's cities.
    pub fn toggle_country(&mut self, code: &str, on: bool) {
        if on {
            self.countries.insert(code.to_string());
            return;
        }
        self.countries.remove(code);
        if let Some(country) = country_by_code(code) {
            for city in country.cities {
                self.cities.remove(*city);
            }
        }
    }

    pub fn toggle_city(&mut self, name: &str, on: bool) {
        if on {
            self.cities.insert(name.to_string());
        } else {
            self.cities.remove(name);
        }
    }

    /// Deduplicated union of preset-selected keywords and the free-text
    /// field, regardless of origin.
    pub fn keywords(&self) -> BTreeSet<String> {
        let mut keywords: BTreeSet<String> = self
            .preset_keywords
            .values()
            .flatten()
            .cloned()
            .collect();
        keywords.extend(split_csv(&self.extra_keywords_csv));
        keywords
    }

    /// Deduplicated union of lower-cased country names and free-standing
    /// city names. Cities keep their casing.
    pub fn locations(&self) -> BTreeSet<String> {
        let mut locations: BTreeSet<String> = self
            .countries
            .iter()
            .filter_map(|code| country_by_code(code))
            .map(|country| country.name.to_lowercase())
            .collect();
        locations.extend(self.cities.iter().cloned());
        locations
    }

    pub fn excludes(&self) -> BTreeSet<String> {
        split_csv(&self.excludes_csv).into_iter().collect()
    }

    /// Assembles the query snapshot fed into the builder.
    pub fn to_search_query(&self) -> SearchQuery {
        SearchQuery {
            site: self.site.clone(),
            types: self.types.clone(),
            keywords: self.keywords(),
            keyword_join: self.keyword_join,
            locations: self.locations(),
            excludes: self.excludes(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn split_csv_trims_and_drops_empty_entries() {
        assert_eq!(
            split_csv(" design systems ,accessibility,, , react "),
            vec!["design systems", "accessibility", "react"]
        );
        assert!(split_csv("").is_empty());
        assert!(split_csv(" , ,").is_empty());
    }

    #[test]
    fn keywords_union_presets_and_free_text_without_duplicates() {
        let mut state = SelectionState::default();
        state.toggle_preset_keyword("Frontend", "react", true);
        state.extra_keywords_csv = "react, vue".to_string();
        assert_eq!(state.keywords(), set(&["react", "vue"]));
    }

    #[test]
    fn deselecting_a_preset_keyword_drops_its_group_entry() {
        let mut state = SelectionState::default();
        state.toggle_preset_keyword("Backend", "python", true);
        state.toggle_preset_keyword("Backend", "python", false);
        assert!(state.preset_keywords.is_empty());
        assert!(state.keywords().is_empty());
    }

    #[test]
    fn locations_lowercase_country_names_but_not_cities() {
        let mut state = SelectionState::default();
        state.toggle_country("GB", true);
        state.toggle_city("London", true);
        assert_eq!(state.locations(), set(&["united kingdom", "London"]));
    }

    #[test]
    fn deselecting_a_country_cascades_to_its_cities() {
        let mut state = SelectionState::default();
        state.toggle_country("GB", true);
        state.toggle_city("London", true);
        state.toggle_city("Manchester", true);
        state.toggle_country("DE", true);
        state.toggle_city("Berlin", true);

        state.toggle_country("GB", false);

        assert_eq!(state.countries, set(&["DE"]));
        assert_eq!(state.cities, set(&["Berlin"]));
        assert_eq!(state.locations(), set(&["germany", "Berlin"]));
    }

    #[test]
    fn unknown_country_codes_are_tolerated() {
        let mut state = SelectionState::default();
        state.toggle_country("XX", true);
        assert!(state.locations().is_empty());
        state.toggle_country("XX", false);
        assert!(state.countries.is_empty());
    }

    #[test]
    fn assembled_query_reflects_every_facet() {
        let mut state = SelectionState::initial();
        state.keyword_join = JoinOperator::Or;
        state.excludes_csv = "recruiter, hiring".to_string();
        let query = state.to_search_query();

        assert_eq!(query.site, "github.com");
        assert_eq!(query.types, set(&["frontend"]));
        assert_eq!(query.keywords, set(&["react", "typescript"]));
        assert_eq!(query.keyword_join, JoinOperator::Or);
        assert!(query.locations.is_empty());
        assert_eq!(query.excludes, set(&["hiring", "recruiter"]));
    }
}
