//! Page configuration
//!
//! Everything the page previously looked up from globals (the country/city
//! table, timer delays, effect tuning) is held by one explicitly constructed
//! [`LandingConfig`] handed to the components at startup.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::form::ValidationRules;
use crate::location::CountryCityTable;

/// Timer delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Simulated submission round trip
    pub submission_delay_ms: u64,
    /// Confirmation overlay auto-dismiss
    pub overlay_dismiss_ms: u64,
    /// Delay before the root receives the `loaded` class
    pub loaded_class_ms: u64,
    /// Delay before the hero title starts typing
    pub typing_start_ms: u64,
    /// Delay between typed characters
    pub typing_char_ms: u64,
    /// Delay before the typing cursor is hidden after the last character
    pub typing_cursor_hide_ms: u64,
    /// Delay before the particle field starts
    pub particles_start_ms: u64,
    /// Resize debounce for the particle field
    pub resize_debounce_ms: u64,
    /// Per-card delay of the staggered course card entrance
    pub card_stagger_ms: u64,
    /// Animation frame interval for counters, particles and the follower
    pub frame_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 2000,
            overlay_dismiss_ms: 5000,
            loaded_class_ms: 100,
            typing_start_ms: 1500,
            typing_char_ms: 100,
            typing_cursor_hide_ms: 500,
            particles_start_ms: 2000,
            resize_debounce_ms: 250,
            card_stagger_ms: 100,
            frame_ms: 16,
        }
    }
}

/// Explicit configuration of the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub country_cities: CountryCityTable,
    pub rules: ValidationRules,
    pub timings: Timings,
    /// Scroll offset (px) past which the header switches to its scrolled style
    pub header_scroll_threshold: f64,
    /// Bottom margin (px) subtracted from the viewport when revealing elements
    pub reveal_bottom_margin: f64,
    /// Number of ticks a stat counter takes to reach its target
    pub counter_speed: u32,
    pub particle_count: usize,
    /// Viewports at or below this width get no mouse follower
    pub follower_min_viewport_width: f64,
    /// Fraction of the remaining distance the follower covers per frame
    pub follower_easing: f64,
    /// Hero background translation per scrolled pixel
    pub parallax_rate: f64,
    /// Stylesheets emitted as preload links
    pub preload_resources: Vec<String>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            country_cities: CountryCityTable::default(),
            rules: ValidationRules::default(),
            timings: Timings::default(),
            header_scroll_threshold: 100.0,
            reveal_bottom_margin: 50.0,
            counter_speed: 200,
            particle_count: 50,
            follower_min_viewport_width: 768.0,
            follower_easing: 0.1,
            parallax_rate: -0.5,
            preload_resources: vec![
                "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap".to_string(),
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css".to_string(),
            ],
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.follower_easing > 0.0 && self.follower_easing <= 1.0) {
            return Err(DomainError::config(format!(
                "follower_easing must be in (0, 1], got {}",
                self.follower_easing
            )));
        }
        if self.counter_speed == 0 {
            return Err(DomainError::config("counter_speed must be positive"));
        }
        if self.timings.frame_ms == 0 {
            return Err(DomainError::config("timings.frame_ms must be positive"));
        }
        if self.timings.typing_char_ms == 0 {
            return Err(DomainError::config("timings.typing_char_ms must be positive"));
        }
        if self.header_scroll_threshold < 0.0 {
            return Err(DomainError::config(
                "header_scroll_threshold cannot be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = LandingConfig::default();
        assert_eq!(config.timings.submission_delay_ms, 2000);
        assert_eq!(config.timings.overlay_dismiss_ms, 5000);
        assert_eq!(config.particle_count, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(r#"{"timings":{"submission_delay_ms":10}}"#).unwrap();
        assert_eq!(config.timings.submission_delay_ms, 10);
        assert_eq!(config.timings.overlay_dismiss_ms, 5000);
        assert!(config.country_cities.cities("guyana").is_some());
    }

    #[test]
    fn json_can_replace_country_table() {
        let json = r#"{"country_cities":{"countries":[
            {"key":"ghana","label":"Ghana","cities":["Accra","Kumasi"]},
            {"key":"other","label":"Other","cities":["Please specify in comments"]}
        ]}}"#;
        let config = LandingConfig::from_json(json).unwrap();
        assert!(config.country_cities.cities("guyana").is_none());
        assert_eq!(config.country_cities.cities("ghana").map(|c| c.len()), Some(2));
    }

    #[test]
    fn out_of_range_easing_is_rejected() {
        let err = LandingConfig::from_json(r#"{"follower_easing":1.5}"#).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = LandingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
