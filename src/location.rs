//! One-shot acquisition of the device position.

use crate::core::config::LocationConfig;
use crate::core::geo::{LatLng, Region};
use crate::{Error, Result};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device geolocation: a permission prompt followed by a position read.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus>;

    async fn current_position(&self) -> Result<LatLng>;
}

/// Requests permission, reads the position and frames it with the initial
/// span.
pub async fn initial_region<L>(provider: &L, config: &LocationConfig) -> Result<Region>
where
    L: LocationProvider + ?Sized,
{
    if provider.request_permission().await? == PermissionStatus::Denied {
        return Err(Error::PermissionDenied);
    }
    let position = provider.current_position().await?;
    log::debug!("device position ({}, {})", position.lat, position.lng);
    Region::with_span(position, config.initial_span)
}

/// A provider reporting a fixed coordinate, for desktop hosts and tests.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    position: LatLng,
    permission: PermissionStatus,
}

impl FixedLocation {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            permission: PermissionStatus::Granted,
        }
    }

    /// A provider whose permission prompt is always refused.
    pub fn denied() -> Self {
        Self {
            position: LatLng::default(),
            permission: PermissionStatus::Denied,
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn current_position(&self) -> Result<LatLng> {
        match self.permission {
            PermissionStatus::Granted => Ok(self.position),
            PermissionStatus::Denied => Err(Error::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::INITIAL_SPAN;

    #[tokio::test]
    async fn test_initial_region_uses_initial_span() {
        let provider = FixedLocation::new(LatLng::new(41.9028, 12.4964));
        let region = initial_region(&provider, &LocationConfig::default())
            .await
            .unwrap();

        assert_eq!(region.center(), LatLng::new(41.9028, 12.4964));
        assert_eq!(region.lat_delta(), INITIAL_SPAN.0);
        assert_eq!(region.lng_delta(), INITIAL_SPAN.1);
    }

    #[tokio::test]
    async fn test_denied_permission() {
        let err = initial_region(&FixedLocation::denied(), &LocationConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied));
    }
}
