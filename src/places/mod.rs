//! Places lookup: API records, the HTTP client and the detail fan-out.

pub mod client;
pub mod fanout;
pub mod model;

pub use client::{OpenTripMapClient, PlacesApi};
pub use fanout::fetch_places;
pub use model::{Address, Place, PlaceDetail, PlaceId, PlaceSummary};
