use crate::core::config::PlacesConfig;
use crate::core::geo::LatLng;
use crate::places::model::{GeonameRecord, PlaceDetail, PlaceId, PlaceSummary};
use crate::{Error, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

/// Shared async HTTP client; building it once avoids TLS and connection pool
/// setup per request.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("nearmap/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(8)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// The three lookups the screen needs from a places service.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Places within `radius_m` meters of `center`, in API order.
    async fn search_nearby(
        &self,
        center: LatLng,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceSummary>>;

    /// Full record for one place.
    async fn fetch_detail(&self, id: &PlaceId) -> Result<PlaceDetail>;

    /// Resolves a free-text place name to a coordinate.
    async fn geocode(&self, name: &str) -> Result<LatLng>;
}

/// [`PlacesApi`] backed by the OpenTripMap REST API.
pub struct OpenTripMapClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: String,
    min_rate: u8,
}

impl fmt::Debug for OpenTripMapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTripMapClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

impl OpenTripMapClient {
    pub fn new(config: &PlacesConfig) -> Self {
        Self::with_http(HTTP_CLIENT.clone(), config)
    }

    /// Uses a caller-provided reqwest client (timeouts, proxies, ...).
    pub fn with_http(http: reqwest::Client, config: &PlacesConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            min_rate: config.min_rate,
        }
    }

    /// `{base}/{lang}/places/{method}`
    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/{}/places/{}", self.base_url, self.language, method)
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        Err(api_error(status, response).await)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

async fn api_error(status: StatusCode, response: reqwest::Response) -> Error {
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl PlacesApi for OpenTripMapClient {
    async fn search_nearby(
        &self,
        center: LatLng,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceSummary>> {
        let url = self.endpoint("radius");
        let query = [
            ("radius", radius_m.to_string()),
            ("limit", limit.to_string()),
            ("offset", "0".to_string()),
            ("lon", center.lng.to_string()),
            ("lat", center.lat.to_string()),
            ("rate", self.min_rate.to_string()),
            ("format", "json".to_string()),
        ];
        let places: Vec<PlaceSummary> = self.get_json(&url, &query).await?;
        log::debug!(
            "radius search at ({}, {}) returned {} places",
            center.lat,
            center.lng,
            places.len()
        );
        Ok(places)
    }

    async fn fetch_detail(&self, id: &PlaceId) -> Result<PlaceDetail> {
        let url = self.endpoint(&format!("xid/{id}"));
        self.get_json(&url, &[]).await
    }

    async fn geocode(&self, name: &str) -> Result<LatLng> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::NotFound(String::new()));
        }

        let url = self.endpoint("geoname");
        let query = [("name", name.to_string())];
        let record = match self.get_json::<GeonameRecord>(&url, &query).await {
            Ok(record) => record,
            Err(Error::Api { status: 404, .. }) => return Err(Error::NotFound(name.to_string())),
            Err(e) => return Err(e),
        };
        record
            .coordinate()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}
