//! Screen-wide defaults: API endpoint, search sizes, map spans and gesture tuning.

/// Base URL of the OpenTripMap REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.opentripmap.com/0.1";

/// Language segment used in every places request.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Radius of the proximity search, in meters.
pub const NEARBY_RADIUS_M: u32 = 1000;

/// Number of summaries requested when the screen first loads.
pub const NEARBY_LIMIT: usize = 5;

/// Number of summaries kept (and detailed) after a free-text search.
pub const SEARCH_LIMIT: usize = 6;

/// Minimum OpenTripMap popularity rate requested from the radius endpoint.
pub const MIN_RATE: u8 = 3;

/// Span of the region shown right after the device location is acquired.
pub const INITIAL_SPAN: (f64, f64) = (0.04864195044303443, 0.040142817690068);

/// Tighter span used when the camera follows the carousel.
pub const FOCUS_SPAN: (f64, f64) = (0.004864195044303443, 0.004864195044303443);

/// Span used when the camera jumps to a searched place name.
pub const SEARCH_SPAN: (f64, f64) = (0.004864195044303443, 0.0040142817690068);

/// Carousel cards take this share of the viewport width.
pub const CARD_WIDTH_RATIO: f64 = 0.8;

/// Bias added to `offset / card_width` before flooring; the paging snap point
/// lands slightly past a card's leading edge.
pub const SNAP_BIAS: f64 = 0.3;

/// Quiet period before a scroll burst recenters the map.
pub const RECENTER_DEBOUNCE_MS: u64 = 10;

/// Duration of every animated camera move.
pub const CAMERA_DURATION_MS: u64 = 350;

/// Marker scale at rest and when its card is centered.
pub const MARKER_SCALE_REST: f64 = 1.0;
pub const MARKER_SCALE_ACTIVE: f64 = 1.5;

/// Dragging the sheet further than this below its open rest point dismisses it.
pub const SHEET_DISMISS_MARGIN: f64 = 200.0;
