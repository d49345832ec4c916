//! Keeps the map camera and marker emphasis in step with the card carousel.

pub mod carousel;
pub mod debounce;
#[cfg(feature = "tokio-runtime")]
pub mod driver;
pub mod synchronizer;

use crate::core::geo::Region;
use crate::places::model::PlaceId;
use std::time::Duration;

pub use carousel::{index_for_offset, marker_scale};
pub use debounce::Debouncer;
#[cfg(feature = "tokio-runtime")]
pub use driver::{SyncDriver, SyncEvent};
pub use synchronizer::ScrollMapSynchronizer;

/// An animated camera move toward one place.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraMove {
    pub place_id: PlaceId,
    pub index: usize,
    pub region: Region,
    pub duration: Duration,
}

/// The map widget as seen from the screen core.
pub trait MapSurface {
    /// Shows `region` immediately.
    fn set_region(&mut self, region: Region);

    /// Moves the camera to `region` over `duration`.
    fn animate_to_region(&mut self, region: Region, duration: Duration);
}
