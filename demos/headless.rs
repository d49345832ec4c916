use nearmap::prelude::*;
use std::env;

/// Map widget stand-in that prints every camera command
struct LoggingSurface;

impl MapSurface for LoggingSurface {
    fn set_region(&mut self, region: Region) {
        let center = region.center();
        println!(
            "   🗺️  set_region {:.5}, {:.5} (span {:.4} x {:.4})",
            center.lat,
            center.lng,
            region.lat_delta(),
            region.lng_delta()
        );
    }

    fn animate_to_region(&mut self, region: Region, duration: Duration) {
        let center = region.center();
        println!(
            "   🎥 animate_to_region {:.5}, {:.5} over {}ms",
            center.lat,
            center.lng,
            duration.as_millis()
        );
    }
}

fn print_places(places: &[Place]) {
    for (i, place) in places.iter().enumerate() {
        println!("   {i}. {} [{}] {}", place.name, place.id, place.short_description);
    }
}

/// Drives the screen core without any UI: `API_KEY` must be set, an optional
/// first argument is searched after the nearby load.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🧭 Nearmap Headless Example");
    println!("===========================");

    let config = ExplorerConfig::from_env()?.for_viewport(375.0, 812.0);
    let api = OpenTripMapClient::new(&config.places);

    // Berlin unless overridden
    let lat = env::var("NEARMAP_LAT").ok().and_then(|v| v.parse().ok()).unwrap_or(52.52);
    let lng = env::var("NEARMAP_LNG").ok().and_then(|v| v.parse().ok()).unwrap_or(13.405);
    let location = FixedLocation::new(LatLng::new(lat, lng));

    let mut explorer = Explorer::new(config, api, location, LoggingSurface);

    println!("\n📍 Loading nearby places:");
    explorer.load().await?;
    print_places(explorer.places());

    if let Some(name) = env::args().nth(1) {
        println!("\n🔎 Searching for {name:?}:");
        match explorer.search(&name).await {
            SearchOutcome::Applied => print_places(explorer.places()),
            SearchOutcome::Failed(err) => println!("   ❌ search failed: {err}"),
            SearchOutcome::Stale => println!("   ⏭️  superseded"),
        }
    }

    if explorer.places().is_empty() {
        println!("\nNo places to browse.");
        return Ok(());
    }

    println!("\n👉 Swiping the carousel to the second card:");
    let card_width = explorer.synchronizer().card_width();
    let start = Instant::now();
    explorer.on_scroll(card_width, start);
    for marker in explorer.markers() {
        println!(
            "   {:?} at {:.5}, {:.5} scale {:.2}",
            marker.kind, marker.coordinate.lat, marker.coordinate.lng, marker.scale
        );
    }
    if let Some(camera) = explorer.tick(start + Duration::from_millis(20), Duration::ZERO) {
        println!("   centered on {} (card {})", camera.place_id, camera.index);
    }

    let id = explorer.places()[0].id.clone();
    println!("\n📄 Opening the detail sheet for {id}:");
    explorer.select(&id);
    let frame = Duration::from_millis(16);
    for _ in 0..120 {
        explorer.tick(Instant::now(), frame);
    }
    if let Some(view) = explorer.sheet_view() {
        println!("   {} ({:?}, offset {:.1})", view.place.name, view.phase, view.offset);
        for line in view.address_lines {
            println!("   {line}");
        }
        if !view.place.long_description.is_empty() {
            println!("   {}", view.place.long_description);
        }
    }

    Ok(())
}
