use crate::core::config::CarouselConfig;
use crate::core::geo::{LatLng, Region};
use crate::places::model::{Place, PlaceId};
use crate::sync::carousel::{index_for_offset_biased, marker_scale, offset_for_index};
use crate::sync::debounce::Debouncer;
use crate::sync::CameraMove;
use fxhash::FxHashMap;
use std::time::Instant;

/// Maps the carousel scroll offset to the active place, recenters the camera
/// once scrolling settles, and scales markers around the centered card.
///
/// Markers and cards are addressed by [`PlaceId`]; positions are only used
/// internally against the list installed by [`set_places`](Self::set_places).
#[derive(Debug, Clone)]
pub struct ScrollMapSynchronizer {
    config: CarouselConfig,
    entries: Vec<(PlaceId, LatLng)>,
    positions: FxHashMap<PlaceId, usize>,
    offset: f64,
    applied_index: usize,
    recenter: Debouncer<f64>,
}

impl ScrollMapSynchronizer {
    pub fn new(config: CarouselConfig) -> Self {
        let recenter = Debouncer::new(config.debounce);
        Self {
            config,
            entries: Vec::new(),
            positions: FxHashMap::default(),
            offset: 0.0,
            applied_index: 0,
            recenter,
        }
    }

    /// Installs a new place list. Any pending recenter is cancelled and the
    /// carousel is assumed to be back on its first card.
    pub fn set_places(&mut self, places: &[Place]) {
        self.entries = places
            .iter()
            .map(|place| (place.id.clone(), place.coordinate))
            .collect();
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, (id, _))| (id.clone(), index))
            .collect();
        self.recenter.cancel();
        self.offset = 0.0;
        self.applied_index = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn card_width(&self) -> f64 {
        self.config.card_width
    }

    /// Card width changes with the viewport; the scroll offset and any pending
    /// recenter are rescaled so the same card stays centered.
    ///
    /// A collapsed carousel (width 0) drops the pending recenter. Growing back
    /// from it puts the offset on the card the camera last moved to.
    pub fn set_card_width(&mut self, card_width: f64) {
        let previous = self.config.card_width;
        self.config.card_width = card_width;

        if card_width.is_nan() || card_width <= 0.0 {
            self.recenter.cancel();
        } else if previous > 0.0 {
            let ratio = card_width / previous;
            self.offset *= ratio;
            self.recenter.update_pending(|x| *x *= ratio);
        } else {
            self.offset = offset_for_index(self.applied_index, card_width);
            self.recenter.cancel();
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Index the camera was last moved to.
    pub fn applied_index(&self) -> usize {
        self.applied_index
    }

    /// Index of the card centered at the current offset.
    pub fn current_index(&self) -> usize {
        self.index_at(self.offset)
    }

    /// Place whose card is centered at the current offset.
    pub fn current_place(&self) -> Option<&PlaceId> {
        self.entries.get(self.current_index()).map(|(id, _)| id)
    }

    fn index_at(&self, x: f64) -> usize {
        index_for_offset_biased(x, self.config.card_width, self.entries.len(), self.config.snap_bias)
    }

    /// Records a scroll offset and re-arms the recenter debounce.
    pub fn on_scroll(&mut self, x: f64, now: Instant) {
        self.offset = x;
        self.recenter.push(x, now);
    }

    /// When the pending recenter fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.recenter.deadline()
    }

    /// Fires the debounced recenter once its quiet period has passed.
    ///
    /// Returns a camera move only when the resolved index differs from the
    /// last applied one. An empty list never moves the camera.
    pub fn poll(&mut self, now: Instant) -> Option<CameraMove> {
        let x = self.recenter.poll(now)?;
        if self.entries.is_empty() {
            return None;
        }

        let index = self.index_at(x);
        if index == self.applied_index {
            return None;
        }

        let (place_id, coordinate) = &self.entries[index];
        let region = match Region::with_span(*coordinate, self.config.focus_span) {
            Ok(region) => region,
            Err(e) => {
                log::warn!("not recentering on {place_id}: {e}");
                return None;
            }
        };
        self.applied_index = index;
        log::debug!("recentering on card {index} ({place_id})");

        Some(CameraMove {
            place_id: place_id.clone(),
            index,
            region,
            duration: self.config.camera_duration,
        })
    }

    /// Scale of the marker for `id` at the current offset.
    pub fn marker_scale_for(&self, id: &PlaceId) -> Option<f64> {
        let index = *self.positions.get(id)?;
        Some(marker_scale(index, self.offset, self.config.card_width))
    }

    /// Scale of every marker at the current offset, in list order.
    pub fn marker_scales(&self) -> Vec<(PlaceId, f64)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (id, _))| {
                (
                    id.clone(),
                    marker_scale(index, self.offset, self.config.card_width),
                )
            })
            .collect()
    }

    /// Scroll offset that centers the card for `id`.
    pub fn offset_for(&self, id: &PlaceId) -> Option<f64> {
        let index = *self.positions.get(id)?;
        Some(offset_for_index(index, self.config.card_width))
    }
}
