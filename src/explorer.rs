//! The screen session: location, place list, selection, carousel sync and
//! detail sheet, plus the load and search flows that fill them.
//!
//! Load errors are returned to the caller. Search errors are logged and
//! swallowed: a failed search leaves every piece of state as it was.

use crate::core::config::ExplorerConfig;
use crate::core::geo::{LatLng, Region};
use crate::location::{initial_region, LocationProvider};
use crate::places::client::PlacesApi;
use crate::places::fanout::{fetch_places, named_only};
use crate::places::model::{Place, PlaceId};
use crate::sheet::{DetailSheet, SheetPhase, SheetRest};
use crate::sync::carousel::offset_for_index;
use crate::sync::synchronizer::ScrollMapSynchronizer;
use crate::sync::CameraMove;
use crate::{Error, Result};
use std::time::{Duration, Instant};

pub use crate::sync::MapSurface;

/// Where the map is centered and why.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    /// Nothing loaded yet.
    Pending,
    /// Centered on the device position or on a searched place.
    Located(Region),
    /// Location permission was refused; nearby search is disabled until a
    /// free-text search succeeds.
    Fallback(Region),
}

impl LocationState {
    pub fn region(&self) -> Option<Region> {
        match self {
            LocationState::Pending => None,
            LocationState::Located(region) | LocationState::Fallback(region) => Some(*region),
        }
    }
}

/// Issued by [`Explorer::begin_search`]; results carrying an older ticket are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything a successful search replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub generation: u64,
    pub region: Region,
    pub places: Vec<Place>,
}

#[derive(Debug)]
pub enum SearchOutcome {
    Applied,
    /// The search failed and was only logged; state is unchanged.
    Failed(Error),
    /// A newer search or load superseded this one.
    Stale,
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SearchOutcome::Applied)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    User,
    Place(PlaceId),
}

/// One pin to draw on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub kind: MarkerKind,
    pub coordinate: LatLng,
    pub scale: f64,
}

/// One carousel card, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub place_id: &'a PlaceId,
    pub name: &'a str,
    pub preview_image_url: Option<&'a str>,
    pub short_description: &'a str,
    /// Scroll offset that centers this card.
    pub offset: f64,
}

/// What the detail sheet shows and where.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetView<'a> {
    pub place: &'a Place,
    pub offset: f64,
    pub phase: SheetPhase,
    pub address_lines: Vec<String>,
}

/// Runs the free-text search flow without touching any session state.
///
/// Geocodes `name`, searches around the match, keeps the first
/// `search_limit` results and fetches their details. Any failure fails the
/// whole search.
pub async fn run_search<A>(
    api: &A,
    config: &ExplorerConfig,
    name: &str,
    ticket: SearchTicket,
) -> Result<SearchResult>
where
    A: PlacesApi + ?Sized,
{
    let center = api.geocode(name).await?;
    let region = Region::with_span(center, config.location.search_span)?;

    let limit = config.places.search_limit;
    let mut summaries = api
        .search_nearby(center, config.places.nearby_radius_m, limit)
        .await?;
    summaries.truncate(limit);
    let places = fetch_places(api, summaries).await?;

    Ok(SearchResult {
        generation: ticket.generation,
        region,
        places,
    })
}

pub struct Explorer<A, L, S> {
    config: ExplorerConfig,
    api: A,
    location: L,
    surface: S,
    location_state: LocationState,
    places: Vec<Place>,
    selected: Option<PlaceId>,
    sync: ScrollMapSynchronizer,
    sheet: DetailSheet,
    generation: u64,
}

impl<A, L, S> Explorer<A, L, S>
where
    A: PlacesApi,
    L: LocationProvider,
    S: MapSurface,
{
    pub fn new(config: ExplorerConfig, api: A, location: L, surface: S) -> Self {
        let sync = ScrollMapSynchronizer::new(config.carousel.clone());
        let sheet = DetailSheet::new(config.sheet.clone());
        Self {
            config,
            api,
            location,
            surface,
            location_state: LocationState::Pending,
            places: Vec::new(),
            selected: None,
            sync,
            sheet,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn location_state(&self) -> LocationState {
        self.location_state
    }

    pub fn region(&self) -> Option<Region> {
        self.location_state.region()
    }

    /// The place list; also the card list, in carousel order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place(&self, id: &PlaceId) -> Option<&Place> {
        self.places.iter().find(|place| &place.id == id)
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.place(self.selected.as_ref()?)
    }

    pub fn synchronizer(&self) -> &ScrollMapSynchronizer {
        &self.sync
    }

    pub fn sheet(&self) -> &DetailSheet {
        &self.sheet
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Locates the device and loads the places around it.
    ///
    /// On refused permission the session falls back to the configured default
    /// region with an empty list, and `PermissionDenied` is still returned.
    pub async fn load(&mut self) -> Result<()> {
        self.generation += 1;

        let region = match initial_region(&self.location, &self.config.location).await {
            Ok(region) => region,
            Err(Error::PermissionDenied) => {
                let fallback = Region::with_span(
                    self.config.location.fallback_center,
                    self.config.location.initial_span,
                )?;
                log::warn!("location permission denied, showing fallback region");
                self.location_state = LocationState::Fallback(fallback);
                self.surface.set_region(fallback);
                self.install_places(Vec::new());
                return Err(Error::PermissionDenied);
            }
            Err(e) => return Err(e),
        };

        self.location_state = LocationState::Located(region);
        self.surface.set_region(region);

        let summaries = self
            .api
            .search_nearby(
                region.center(),
                self.config.places.nearby_radius_m,
                self.config.places.nearby_limit,
            )
            .await?;
        let places = fetch_places(&self.api, named_only(summaries)).await?;
        log::info!("loaded {} nearby places", places.len());
        self.install_places(places);
        Ok(())
    }

    /// Starts a search generation; every earlier ticket becomes stale.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket {
            generation: self.generation,
        }
    }

    /// Commits a search result unless a newer search or load superseded it.
    pub fn apply_search(&mut self, result: SearchResult) -> SearchOutcome {
        if result.generation != self.generation {
            log::debug!(
                "dropping stale search result (generation {} < {})",
                result.generation,
                self.generation
            );
            return SearchOutcome::Stale;
        }

        self.surface
            .animate_to_region(result.region, self.config.carousel.camera_duration);
        self.location_state = LocationState::Located(result.region);
        log::info!("search found {} places", result.places.len());
        self.install_places(result.places);
        SearchOutcome::Applied
    }

    /// Free-text search: geocode, nearby search, detail fan-out, then replace
    /// the location and list. Failures are logged and leave state untouched.
    pub async fn search(&mut self, name: &str) -> SearchOutcome {
        let ticket = self.begin_search();
        let result = run_search(&self.api, &self.config, name, ticket).await;
        match result {
            Ok(result) => self.apply_search(result),
            Err(e) => {
                log::warn!("search for {name:?} failed: {e}");
                SearchOutcome::Failed(e)
            }
        }
    }

    fn install_places(&mut self, places: Vec<Place>) {
        self.sync.set_places(&places);
        self.places = places;

        let still_listed = self
            .selected
            .as_ref()
            .is_some_and(|id| self.places.iter().any(|place| &place.id == id));
        if !still_listed && self.selected.take().is_some() {
            self.sheet = DetailSheet::new(self.config.sheet.clone());
        }
    }

    /// Carousel scroll offset changed.
    pub fn on_scroll(&mut self, x: f64, now: Instant) {
        self.sync.on_scroll(x, now);
    }

    /// Advances timers: fires a due recenter on the map and steps the sheet
    /// spring by `dt`.
    pub fn tick(&mut self, now: Instant, dt: Duration) -> Option<CameraMove> {
        let camera = self.sync.poll(now);
        if let Some(camera) = &camera {
            self.surface
                .animate_to_region(camera.region, camera.duration);
        }
        self.sheet.tick(dt);
        camera
    }

    /// A card or marker was tapped. Opens the sheet on that place and returns
    /// the carousel offset that centers its card.
    pub fn select(&mut self, id: &PlaceId) -> Option<f64> {
        if self.place(id).is_none() {
            log::debug!("ignoring tap on unknown place {id}");
            return None;
        }
        self.selected = Some(id.clone());
        self.sheet.open();
        self.sync.offset_for(id)
    }

    pub fn drag_start(&mut self) {
        self.sheet.drag_start();
    }

    pub fn drag_move(&mut self, translation_y: f64) {
        self.sheet.drag_move(translation_y);
    }

    pub fn drag_end(&mut self) -> SheetRest {
        self.sheet.drag_end()
    }

    /// Viewport size changed.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.config.carousel = self.config.carousel.clone().for_viewport_width(width);
        self.config.sheet.viewport_height = height;
        self.sync.set_card_width(self.config.carousel.card_width);
        self.sheet.resize(height);
    }

    /// The user's own marker followed by one marker per place, scaled by the
    /// current scroll offset.
    pub fn markers(&self) -> Vec<MarkerView> {
        let user = match self.location_state {
            LocationState::Located(region) => Some(MarkerView {
                kind: MarkerKind::User,
                coordinate: region.center(),
                scale: 1.0,
            }),
            _ => None,
        };

        user.into_iter()
            .chain(
                self.places
                    .iter()
                    .zip(self.sync.marker_scales())
                    .map(|(place, (_, scale))| MarkerView {
                        kind: MarkerKind::Place(place.id.clone()),
                        coordinate: place.coordinate,
                        scale,
                    }),
            )
            .collect()
    }

    /// The carousel cards, one per place.
    pub fn cards(&self) -> Vec<CardView<'_>> {
        let card_width = self.sync.card_width();
        self.places
            .iter()
            .enumerate()
            .map(|(index, place)| CardView {
                place_id: &place.id,
                name: &place.name,
                preview_image_url: place.preview_image_url.as_deref(),
                short_description: &place.short_description,
                offset: offset_for_index(index, card_width),
            })
            .collect()
    }

    /// The sheet is only mounted while a place is selected.
    pub fn sheet_view(&self) -> Option<SheetView<'_>> {
        let place = self.selected_place()?;
        Some(SheetView {
            place,
            offset: self.sheet.offset(),
            phase: self.sheet.phase(),
            address_lines: place.address.lines(),
        })
    }
}
