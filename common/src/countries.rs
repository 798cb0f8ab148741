//! Country and city catalog for the locations step.


/// One selectable country with its top cities.
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub cities: &'static [&'static str],
}

pub const COUNTRIES: &[Country] = &[
    Country {
        code: "GB",
        name: "United Kingdom",
        flag: "\u{1F1EC}\u{1F1E7}",
        cities: &["London", "Manchester", "Edinburgh", "Birmingham", "Bristol", "Leeds"],
    },
    Country {
        code: "US",
        name: "United States",
        flag: "\u{1F1FA}\u{1F1F8}",
        cities: &[
            "New York",
            "San Francisco",
            "Seattle",
            "Austin",
            "Boston",
            "Los Angeles",
        ],
    },
    Country {
        code: "DE",
        name: "Germany",
        flag: "\u{1F1E9}\u{1F1EA}",
        cities: &["Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne"],
    },
    Country {
        code: "FR",
        name: "France",
        flag: "\u{1F1EB}\u{1F1F7}",
        cities: &["Paris", "Lyon", "Toulouse", "Nantes", "Bordeaux"],
    },
    Country {
        code: "NL",
        name: "Netherlands",
        flag: "\u{1F1F3}\u{1F1F1}",
        cities: &["Amsterdam", "Rotterdam", "Utrecht", "Eindhoven", "The Hague"],
    },
    Country {
        code: "IE",
        name: "Ireland",
        flag: "\u{1F1EE}\u{1F1EA}",
        cities: &["Dublin", "Cork", "Galway", "Limerick"],
    },
    Country {
        code: "CH",
        name: "Switzerland",
        flag: "\u{1F1E8}\u{1F1ED}",
        cities: &["Zurich", "Geneva", "Basel", "Lausanne", "Bern"],
    },
    Country {
        code: "ES",
        name: "Spain",
        flag: "\u{1F1EA}\u{1F1F8}",
        cities: &["Madrid", "Barcelona", "Valencia", "Seville", "Malaga"],
    },
    Country {
        code: "SE",
        name: "Sweden",
        flag: "\u{1F1F8}\u{1F1EA}",
        cities: &["Stockholm", "Gothenburg", "Malmo", "Uppsala"],
    },
    Country {
        code: "PL",
        name: "Poland",
        flag: "\u{1F1F5}\u{1F1F1}",
        cities: &["Warsaw", "Krakow", "Wroclaw", "Gdansk", "Poznan"],
    },
    Country {
        code: "PT",
        name: "Portugal",
        flag: "\u{1F1F5}\u{1F1F9}",
        cities: &["Lisbon", "Porto", "Braga", "Coimbra"],
    },
    Country {
        code: "CA",
        name: "Canada",
        flag: "\u{1F1E8}\u{1F1E6}",
        cities: &["Toronto", "Vancouver", "Montreal", "Ottawa", "Calgary"],
    },
];

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}
