//! In-memory doubles for the places API and the map widget.

#![allow(dead_code)]

use async_trait::async_trait;
use nearmap::places::model::{ApiPoint, PlaceDetail, PlaceSummary, Preview, WikipediaExtract};
use nearmap::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub fn summary(xid: &str, name: &str, lat: f64, lon: f64) -> PlaceSummary {
    PlaceSummary {
        xid: PlaceId::new(xid),
        name: name.to_string(),
        point: ApiPoint { lat, lon },
        dist: None,
        rate: Some(3),
        kinds: None,
    }
}

pub fn detail(xid: &str) -> PlaceDetail {
    PlaceDetail {
        xid: PlaceId::new(xid),
        name: String::new(),
        point: None,
        preview: Some(Preview {
            source: format!("https://img.example/{xid}.jpg"),
            width: None,
            height: None,
        }),
        address: None,
        wikipedia_extracts: Some(WikipediaExtract {
            title: None,
            text: format!("About {xid}. More text."),
        }),
    }
}

/// Scripted places API: nearby results keyed by center, geonames by name.
#[derive(Default)]
pub struct MockApi {
    pub nearby: Vec<(LatLng, Vec<PlaceSummary>)>,
    pub geonames: HashMap<String, LatLng>,
    pub failing_details: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_nearby(mut self, center: LatLng, summaries: Vec<PlaceSummary>) -> Self {
        self.nearby.push((center, summaries));
        self
    }

    pub fn with_geoname(mut self, name: &str, center: LatLng) -> Self {
        self.geonames.insert(name.to_string(), center);
        self
    }

    pub fn failing_detail(mut self, xid: &str) -> Self {
        self.failing_details.insert(xid.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for MockApi {
    async fn search_nearby(
        &self,
        center: LatLng,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceSummary>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("radius {} {} r={radius_m} l={limit}", center.lat, center.lng));
        Ok(self
            .nearby
            .iter()
            .find(|(at, _)| *at == center)
            .map(|(_, summaries)| summaries.clone())
            .unwrap_or_default())
    }

    async fn fetch_detail(&self, id: &PlaceId) -> Result<PlaceDetail> {
        self.calls.lock().unwrap().push(format!("xid {id}"));
        if self.failing_details.contains(id.as_str()) {
            return Err(Error::Api {
                status: 500,
                message: "detail unavailable".to_string(),
            });
        }
        Ok(detail(id.as_str()))
    }

    async fn geocode(&self, name: &str) -> Result<LatLng> {
        self.calls.lock().unwrap().push(format!("geoname {name}"));
        self.geonames
            .get(name.trim())
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetRegion(Region),
    Animate(Region, Duration),
}

/// Map widget double recording every command it receives.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl MapSurface for RecordingSurface {
    fn set_region(&mut self, region: Region) {
        self.calls.lock().unwrap().push(SurfaceCall::SetRegion(region));
    }

    fn animate_to_region(&mut self, region: Region, duration: Duration) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::Animate(region, duration));
    }
}

pub const HOME: LatLng = LatLng {
    lat: 52.52,
    lng: 13.405,
};

pub const ROME: LatLng = LatLng {
    lat: 41.9028,
    lng: 12.4964,
};

/// Five named places around `HOME` plus one without a name.
pub fn home_summaries() -> Vec<PlaceSummary> {
    vec![
        summary("H0", "Gate", 52.5163, 13.3777),
        summary("H1", "", 52.5170, 13.3800),
        summary("H2", "Cathedral", 52.5191, 13.4010),
        summary("H3", "Tower", 52.5208, 13.4094),
        summary("H4", "Museum", 52.5169, 13.4019),
        summary("H5", "Square", 52.5219, 13.4132),
    ]
}

/// Eight places around `ROME`; searches keep the first six.
pub fn rome_summaries() -> Vec<PlaceSummary> {
    (0..8)
        .map(|i| summary(&format!("R{i}"), &format!("Rome {i}"), 41.89 + i as f64 * 0.001, 12.49))
        .collect()
}

pub fn config() -> ExplorerConfig {
    ExplorerConfig::default().for_viewport(375.0, 900.0)
}
