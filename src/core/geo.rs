use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A map viewport: a center plus the span of degrees visible on each axis.
///
/// Both deltas are strictly positive; [`Region::new`] is the only way to build
/// one from untrusted numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    center: LatLng,
    lat_delta: f64,
    lng_delta: f64,
}

impl Region {
    pub fn new(center: LatLng, lat_delta: f64, lng_delta: f64) -> Result<Self> {
        if !center.is_valid() {
            return Err(Error::InvalidRegion(format!(
                "center ({}, {}) out of range",
                center.lat, center.lng
            )));
        }
        if !(lat_delta.is_finite() && lat_delta > 0.0) || !(lng_delta.is_finite() && lng_delta > 0.0)
        {
            return Err(Error::InvalidRegion(format!(
                "deltas must be positive, got ({lat_delta}, {lng_delta})"
            )));
        }
        Ok(Self {
            center,
            lat_delta,
            lng_delta,
        })
    }

    /// Builds a region from a `(lat_delta, lng_delta)` span pair.
    pub fn with_span(center: LatLng, span: (f64, f64)) -> Result<Self> {
        Self::new(center, span.0, span.1)
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn lat_delta(&self) -> f64 {
        self.lat_delta
    }

    pub fn lng_delta(&self) -> f64 {
        self.lng_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(48.8584, 2.2945);
        assert_eq!(coord.lat, 48.8584);
        assert_eq!(coord.lng, 2.2945);
        assert!(coord.is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
    }

    #[test]
    fn test_region_rejects_non_positive_deltas() {
        let center = LatLng::new(10.0, 10.0);
        assert!(Region::new(center, 0.0, 0.1).is_err());
        assert!(Region::new(center, 0.1, -0.1).is_err());
        assert!(Region::new(center, f64::NAN, 0.1).is_err());
        assert!(Region::new(LatLng::new(100.0, 0.0), 0.1, 0.1).is_err());
        assert!(Region::new(center, 0.1, 0.1).is_ok());
    }

    #[test]
    fn test_region_with_span_orders_deltas() {
        let region = Region::with_span(LatLng::new(40.0, -74.0), (0.2, 0.1)).unwrap();
        assert_eq!(region.center(), LatLng::new(40.0, -74.0));
        assert_eq!(region.lat_delta(), 0.2);
        assert_eq!(region.lng_delta(), 0.1);
    }
}
