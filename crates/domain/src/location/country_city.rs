//! Country → city lookup table backing the dependent city select

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::form::SelectOption;

/// Key of the catch-all entry
pub const FALLBACK_COUNTRY_KEY: &str = "other";

/// Placeholder city of the catch-all entry
pub const FALLBACK_CITY: &str = "Please specify in comments";

/// One country and its cities, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Lowercase country key, also the country select's option value
    pub key: String,
    pub label: String,
    pub cities: Vec<String>,
}

impl CountryEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>, cities: &[&str]) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Immutable country → cities mapping.
///
/// Always contains the fallback key, whose sequence is a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CountryCityTableRaw", into = "CountryCityTableRaw")]
pub struct CountryCityTable {
    entries: Vec<CountryEntry>,
}

#[derive(Serialize, Deserialize)]
struct CountryCityTableRaw {
    countries: Vec<CountryEntry>,
}

impl TryFrom<CountryCityTableRaw> for CountryCityTable {
    type Error = DomainError;

    fn try_from(raw: CountryCityTableRaw) -> Result<Self, Self::Error> {
        Self::new(raw.countries)
    }
}

impl From<CountryCityTable> for CountryCityTableRaw {
    fn from(table: CountryCityTable) -> Self {
        Self {
            countries: table.entries,
        }
    }
}

impl CountryCityTable {
    /// Build a table from entries.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Config` if:
    /// - a key is empty or not lowercase
    /// - a key appears twice
    /// - a country other than the fallback has no cities
    /// - the fallback entry is missing or does not hold exactly one city
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self, DomainError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(DomainError::config("Country key cannot be empty"));
            }
            if entry.key != entry.key.to_lowercase() {
                return Err(DomainError::config(format!(
                    "Country key '{}' must be lowercase",
                    entry.key
                )));
            }
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(DomainError::config(format!(
                    "Duplicate country key '{}'",
                    entry.key
                )));
            }
            if entry.cities.is_empty() {
                return Err(DomainError::config(format!(
                    "Country '{}' has no cities",
                    entry.key
                )));
            }
        }

        match entries.iter().find(|e| e.key == FALLBACK_COUNTRY_KEY) {
            Some(fallback) if fallback.cities.len() == 1 => Ok(Self { entries }),
            Some(_) => Err(DomainError::config(format!(
                "Fallback country '{}' must have exactly one placeholder city",
                FALLBACK_COUNTRY_KEY
            ))),
            None => Err(DomainError::config(format!(
                "Missing fallback country '{}'",
                FALLBACK_COUNTRY_KEY
            ))),
        }
    }

    /// Cities for a country key, `None` for unknown keys
    pub fn cities(&self, country_key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.key == country_key)
            .map(|e| e.cities.as_slice())
    }

    /// Options for the country select, in table order
    pub fn country_options(&self) -> Vec<SelectOption> {
        self.entries
            .iter()
            .map(|e| SelectOption::new(e.key.clone(), e.label.clone()))
            .collect()
    }

    /// Recompute the city select for a newly chosen country
    pub fn city_selection(&self, country_key: &str) -> CitySelection {
        match self.cities(country_key) {
            Some(cities) => CitySelection::Enabled(
                cities
                    .iter()
                    .map(|city| SelectOption::new(slugify(city), city.clone()))
                    .collect(),
            ),
            None => CitySelection::Disabled,
        }
    }
}

impl Default for CountryCityTable {
    fn default() -> Self {
        Self {
            entries: vec![
                CountryEntry::new(
                    "guyana",
                    "Guyana",
                    &[
                        "Georgetown",
                        "Linden",
                        "New Amsterdam",
                        "Anna Regina",
                        "Bartica",
                        "Skeldon",
                        "Rosignol",
                        "Mahaica",
                        "Parika",
                    ],
                ),
                CountryEntry::new(
                    "zambia",
                    "Zambia",
                    &[
                        "Lusaka",
                        "Kitwe",
                        "Ndola",
                        "Kabwe",
                        "Chingola",
                        "Mufulira",
                        "Luanshya",
                        "Arusha",
                        "Kasama",
                        "Chipata",
                    ],
                ),
                CountryEntry::new(FALLBACK_COUNTRY_KEY, "Other", &[FALLBACK_CITY]),
            ],
        }
    }
}

/// State of the dependent city select
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CitySelection {
    /// Known country: selectable cities (without the default empty choice)
    Enabled(Vec<SelectOption>),
    /// Unknown or no country: no options, select disabled
    #[default]
    Disabled,
}

impl CitySelection {
    pub fn is_enabled(&self) -> bool {
        matches!(self, CitySelection::Enabled(_))
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            CitySelection::Enabled(options) => options,
            CitySelection::Disabled => &[],
        }
    }

    /// Options as rendered: the default empty choice followed by the cities
    pub fn with_placeholder(&self, placeholder: &str) -> Vec<SelectOption> {
        std::iter::once(SelectOption::placeholder(placeholder))
            .chain(self.options().iter().cloned())
            .collect()
    }
}

/// Lowercase and turn each whitespace run into a single hyphen
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guyana_has_nine_cities_with_slugs() {
        let table = CountryCityTable::default();
        let selection = table.city_selection("guyana");
        assert!(selection.is_enabled());
        assert_eq!(selection.options().len(), 9);
        assert_eq!(selection.with_placeholder("Select City").len(), 10);

        let georgetown = &selection.options()[0];
        assert_eq!(georgetown.label, "Georgetown");
        assert_eq!(georgetown.value, "georgetown");
    }

    #[test]
    fn multi_word_city_gets_hyphenated_slug() {
        let table = CountryCityTable::default();
        let selection = table.city_selection("guyana");
        assert!(selection
            .options()
            .iter()
            .any(|o| o.value == "new-amsterdam" && o.label == "New Amsterdam"));
    }

    #[test]
    fn unknown_country_disables_city_select() {
        let table = CountryCityTable::default();
        let selection = table.city_selection("atlantis");
        assert!(!selection.is_enabled());
        assert!(selection.options().is_empty());
        assert_eq!(
            selection.with_placeholder("Select City"),
            vec![SelectOption::placeholder("Select City")]
        );
    }

    #[test]
    fn empty_country_disables_city_select() {
        assert_eq!(
            CountryCityTable::default().city_selection(""),
            CitySelection::Disabled
        );
    }

    #[test]
    fn fallback_country_has_single_placeholder() {
        let table = CountryCityTable::default();
        let selection = table.city_selection(FALLBACK_COUNTRY_KEY);
        assert_eq!(selection.options().len(), 1);
        assert_eq!(selection.options()[0].value, "please-specify-in-comments");
    }

    #[test]
    fn table_requires_fallback_entry() {
        let err = CountryCityTable::new(vec![CountryEntry::new("guyana", "Guyana", &["Linden"])])
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn table_rejects_uppercase_and_duplicate_keys() {
        let fallback = CountryEntry::new(FALLBACK_COUNTRY_KEY, "Other", &[FALLBACK_CITY]);
        assert!(CountryCityTable::new(vec![
            CountryEntry::new("Guyana", "Guyana", &["Linden"]),
            fallback.clone(),
        ])
        .is_err());
        assert!(CountryCityTable::new(vec![
            CountryEntry::new("guyana", "Guyana", &["Linden"]),
            CountryEntry::new("guyana", "Guyana", &["Bartica"]),
            fallback,
        ])
        .is_err());
    }

    #[test]
    fn table_deserializes_and_validates() {
        let json = r#"{"countries":[
            {"key":"kenya","label":"Kenya","cities":["Nairobi","Mombasa"]},
            {"key":"other","label":"Other","cities":["Please specify in comments"]}
        ]}"#;
        let table: CountryCityTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.cities("kenya").map(|c| c.len()), Some(2));

        let missing_fallback = r#"{"countries":[{"key":"kenya","label":"Kenya","cities":["Nairobi"]}]}"#;
        assert!(serde_json::from_str::<CountryCityTable>(missing_fallback).is_err());
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Anna Regina"), "anna-regina");
        assert_eq!(slugify("  New   Amsterdam "), "new-amsterdam");
        assert_eq!(slugify("Lusaka"), "lusaka");
    }
}
