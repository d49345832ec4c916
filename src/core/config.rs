//! Configuration for the places client, the carousel, the detail sheet and
//! location handling.
//!
//! Every section has a `Default` built from [`crate::constants`];
//! [`ExplorerConfig::from_env`] layers the process environment on top.

use crate::animation::spring::SpringConfig;
use crate::core::constants::*;
use crate::core::geo::LatLng;
use crate::{Error, Result};
use std::time::Duration;

/// Environment variable holding the OpenTripMap API key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Optional override of the API base URL.
pub const BASE_URL_ENV: &str = "NEARMAP_API_BASE_URL";
/// Optional override of the API language segment.
pub const LANGUAGE_ENV: &str = "NEARMAP_LANG";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerConfig {
    pub places: PlacesConfig,
    pub carousel: CarouselConfig,
    pub sheet: SheetConfig,
    pub location: LocationConfig,
}

impl ExplorerConfig {
    /// Reads the API key (required) and the optional endpoint overrides from
    /// the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ExplorerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config(format!("{API_KEY_ENV} is not set")))?;

        let mut config = Self::default();
        config.places.api_key = api_key;
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            config.places.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(language) = lookup(LANGUAGE_ENV).filter(|lang| !lang.is_empty()) {
            config.places.language = language;
        }
        Ok(config)
    }

    /// Sizes the carousel and the sheet for a viewport.
    pub fn for_viewport(mut self, width: f64, height: f64) -> Self {
        self.carousel = self.carousel.for_viewport_width(width);
        self.sheet.viewport_height = height;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub nearby_radius_m: u32,
    pub nearby_limit: usize,
    pub search_limit: usize,
    pub min_rate: u8,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            nearby_radius_m: NEARBY_RADIUS_M,
            nearby_limit: NEARBY_LIMIT,
            search_limit: SEARCH_LIMIT,
            min_rate: MIN_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Width of one card in the same units as the scroll offset.
    pub card_width: f64,
    pub snap_bias: f64,
    pub debounce: Duration,
    pub camera_duration: Duration,
    /// `(lat_delta, lng_delta)` of the region the camera moves to.
    pub focus_span: (f64, f64),
}

impl CarouselConfig {
    pub fn for_viewport_width(mut self, width: f64) -> Self {
        self.card_width = width * CARD_WIDTH_RATIO;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            // 0.8 of a 375pt wide phone
            card_width: 300.0,
            snap_bias: SNAP_BIAS,
            debounce: Duration::from_millis(RECENTER_DEBOUNCE_MS),
            camera_duration: Duration::from_millis(CAMERA_DURATION_MS),
            focus_span: FOCUS_SPAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub viewport_height: f64,
    pub dismiss_margin: f64,
    pub spring: SpringConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            viewport_height: 812.0,
            dismiss_margin: SHEET_DISMISS_MARGIN,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationConfig {
    pub initial_span: (f64, f64),
    pub search_span: (f64, f64),
    /// Where the map sits when location permission is refused.
    pub fallback_center: LatLng,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            initial_span: INITIAL_SPAN,
            search_span: SEARCH_SPAN,
            fallback_center: LatLng::new(0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let err = ExplorerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ExplorerConfig::from_lookup(lookup(&[(API_KEY_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = ExplorerConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (BASE_URL_ENV, "http://localhost:8080/0.1/"),
            (LANGUAGE_ENV, "ru"),
        ]))
        .unwrap();

        assert_eq!(config.places.api_key, "secret");
        assert_eq!(config.places.base_url, "http://localhost:8080/0.1");
        assert_eq!(config.places.language, "ru");
        assert_eq!(config.places.nearby_radius_m, 1000);
        assert_eq!(config.places.search_limit, 6);
    }

    #[test]
    fn test_viewport_sizing() {
        let config = ExplorerConfig::default().for_viewport(400.0, 900.0);
        assert_eq!(config.carousel.card_width, 320.0);
        assert_eq!(config.sheet.viewport_height, 900.0);
    }
}
