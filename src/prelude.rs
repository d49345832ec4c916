//! Prelude module for common nearmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use nearmap::prelude::*;`

pub use crate::core::{
    config::{CarouselConfig, ExplorerConfig, LocationConfig, PlacesConfig, SheetConfig},
    geo::{LatLng, Region},
};

pub use crate::places::{
    client::{OpenTripMapClient, PlacesApi},
    fanout::fetch_places,
    model::{Address, Place, PlaceDetail, PlaceId, PlaceSummary},
};

pub use crate::location::{initial_region, FixedLocation, LocationProvider, PermissionStatus};

pub use crate::sync::{
    carousel::{index_for_offset, marker_scale},
    debounce::Debouncer,
    synchronizer::ScrollMapSynchronizer,
    CameraMove, MapSurface,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::sync::driver::{SyncDriver, SyncEvent};

pub use crate::sheet::{DetailSheet, SheetPhase, SheetRest};

pub use crate::animation::{spring::SpringConfig, Interpolation};

pub use crate::explorer::{
    run_search, CardView, Explorer, LocationState, MarkerKind, MarkerView, SearchOutcome, SearchResult,
    SearchTicket, SheetView,
};

pub use crate::{Error, Result};

pub use std::time::{Duration, Instant};
