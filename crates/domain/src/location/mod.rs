//! Location data for the dependent country/city selects

mod country_city;

pub use country_city::{
    slugify, CitySelection, CountryCityTable, CountryEntry, FALLBACK_CITY, FALLBACK_COUNTRY_KEY,
};
