//! # nearmap
//!
//! The state core of a "what's around me" map screen.
//!
//! The crate locates the user, asks the OpenTripMap places API for nearby
//! points of interest, and keeps three views of the same place list in step:
//! the map markers, a horizontally scrolling card carousel and a draggable
//! detail sheet. Rendering is left to the host; the map widget and the
//! location sensor are reached through [`MapSurface`] and
//! [`LocationProvider`].

pub mod animation;
pub mod core;
pub mod explorer;
pub mod location;
pub mod places;
pub mod prelude;
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
pub mod sheet;
pub mod sync;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::ExplorerConfig,
    geo::{LatLng, Region},
};

pub use explorer::{Explorer, LocationState, MapSurface, SearchOutcome};

pub use location::{FixedLocation, LocationProvider, PermissionStatus};

pub use places::{
    client::{OpenTripMapClient, PlacesApi},
    model::{Place, PlaceId},
};

pub use sheet::{DetailSheet, SheetPhase};

pub use sync::{carousel::index_for_offset, synchronizer::ScrollMapSynchronizer, CameraMove};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No place found for {0:?}")]
    NotFound(String),

    #[error("Places API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
