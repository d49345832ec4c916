//! Records returned by the places API and the merged [`Place`] the screen
//! works with.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// OpenTripMap object identifier (`xid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// `{lat, lon}` as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<ApiPoint> for LatLng {
    fn from(point: ApiPoint) -> Self {
        LatLng::new(point.lat, point.lon)
    }
}

/// One entry of a radius search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub xid: PlaceId,
    #[serde(default)]
    pub name: String,
    pub point: ApiPoint,
    #[serde(default)]
    pub dist: Option<f64>,
    #[serde(default)]
    pub rate: Option<u8>,
    #[serde(default)]
    pub kinds: Option<String>,
}

impl PlaceSummary {
    pub fn coordinate(&self) -> LatLng {
        self.point.into()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preview {
    pub source: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WikipediaExtract {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// Postal address fields; OpenTripMap fills whichever the source data has.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub road: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub city_district: Option<String>,
    pub suburb: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub state_district: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl Address {
    /// Three display lines: street and district, locality and region,
    /// country and postcode. Missing parts are skipped and empty lines dropped.
    pub fn lines(&self) -> Vec<String> {
        let join = |parts: [&Option<String>; 2]| {
            parts
                .iter()
                .filter_map(|part| part.as_deref())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let locality = if self.village.is_some() {
            &self.village
        } else {
            &self.city
        };
        [
            join([&self.road, &self.city_district]),
            join([locality, &self.state_district]),
            join([&self.country, &self.postcode]),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect()
    }
}

/// Full record for one object (`/places/xid/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub xid: PlaceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub point: Option<ApiPoint>,
    #[serde(default)]
    pub preview: Option<Preview>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub wikipedia_extracts: Option<WikipediaExtract>,
}

/// Response of the geoname endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeonameRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GeonameRecord {
    /// The matched coordinate, if the lookup succeeded.
    pub fn coordinate(&self) -> Option<LatLng> {
        if self.error.is_some() {
            return None;
        }
        if let Some(status) = &self.status {
            if status != "OK" {
                return None;
            }
        }
        Some(LatLng::new(self.lat?, self.lon?))
    }
}

/// A place shown on the map and in the carousel: a radius-search summary
/// enriched with its detail record.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub coordinate: LatLng,
    pub preview_image_url: Option<String>,
    pub short_description: String,
    pub long_description: String,
    pub address: Address,
}

impl Place {
    /// Merges a summary with its detail record. Identity and coordinate come
    /// from the summary.
    pub fn merge(summary: PlaceSummary, detail: PlaceDetail) -> Self {
        let name = if summary.name.is_empty() {
            detail.name
        } else {
            summary.name
        };
        let long_description = detail
            .wikipedia_extracts
            .map(|extract| extract.text)
            .unwrap_or_default();

        Self {
            id: summary.xid,
            name,
            coordinate: summary.point.into(),
            preview_image_url: detail.preview.map(|preview| preview.source),
            short_description: first_sentence(&long_description).to_string(),
            long_description,
            address: detail.address.unwrap_or_default(),
        }
    }
}

fn first_sentence(text: &str) -> &str {
    let text = text.trim();
    match text.find(". ") {
        Some(end) => &text[..=end],
        None => text,
    }
}
