use anyhow::Context;
use mapify::{
    dom::{Dom, ElementRef, MapRegistry, MemoryDom, MemoryElement},
    EventHooks, LatLng, MapOptions, MarkerId, MarkerObject, PointerEvent, PointerEventKind,
    RecordingSdk,
};

/// Builds the demo page: one map driven by legend elements, one driven by
/// an object list in the caller options.
fn build_page() -> MemoryDom {
    let mut dom = MemoryDom::new();

    // Legend elements describing the venues of the first map.
    dom.insert(
        MemoryElement::new("li")
            .with_class("venue")
            .with_attr("data-lat", "51.5033")
            .with_attr("data-lng", "-0.1196")
            .with_attr("data-title", "London Eye")
            .with_attr("data-icon", "wheel.png"),
    );
    dom.insert(
        MemoryElement::new("li")
            .with_class("venue")
            .with_attr("data-lat", "51.5007")
            .with_attr("data-lng", "-0.1246")
            .with_attr("data-title", "Big Ben")
            .with_attr("data-center", "true"),
    );
    dom.insert(
        MemoryElement::new("li")
            .with_class("venue")
            .with_attr("data-lat", "51.5194")
            .with_attr("data-lng", "-0.1270")
            .with_attr("data-title", "British Museum"),
    );
    dom.insert(
        MemoryElement::new("div")
            .with_class("map")
            .with_dom_id("venue-map")
            .with_attr("data-markers", ".venue")
            .with_attr("data-zoom", "14"),
    );

    // The second map has no data-markers attribute, so its markers come
    // from the caller options instead.
    dom.insert(
        MemoryElement::new("div")
            .with_class("map")
            .with_dom_id("city-map")
            .with_attr("data-scrollwheel", "true"),
    );

    dom
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dom = build_page();
    let mut sdk = RecordingSdk::new();
    let mut registry = MapRegistry::new();

    let options = MapOptions::new()
        .with_icon("pin.png")
        .with_marker_objects(vec![
            MarkerObject::new(52.2297, 21.0122).with_title("Warsaw"),
            MarkerObject::new(50.0647, 19.945)
                .with_title("Krakow")
                .with_center(true),
        ]);

    let hooks: EventHooks<RecordingSdk> = EventHooks::new()
        .on_map_click(|map, event| {
            println!("  -> map {:?} clicked at {:?}", map, event.lat_lng);
        })
        .on_marker_click(|marker, map, _| {
            println!(
                "  -> marker {:?} ({}) on map {:?} clicked",
                marker.id(),
                marker.title().unwrap_or("untitled"),
                map
            );
        })
        .on_marker_legend_mouse_enter(|marker, _, _| {
            println!(
                "  -> legend hover highlights marker {:?} ({})",
                marker.id(),
                marker.title().unwrap_or("untitled")
            );
        });

    let created = registry.init_all(&dom, ".map", &options, &hooks, &mut sdk)?;
    println!("initialized {} maps", created);

    // A second pass is a no-op thanks to the registry guard.
    let repeat = registry.init_all(&dom, ".map", &options, &hooks, &mut sdk)?;
    println!("second pass created {} maps", repeat);

    for container in dom.select(".map") {
        let map = registry
            .get(container.id())
            .context("matched container was initialized")?;
        println!(
            "\nmap on {:?}: {} markers, centered at ({}, {})",
            container.attr("id").unwrap_or_default(),
            map.markers().len(),
            map.center().lat,
            map.center().lng
        );
        for recorded in sdk.markers_on(*map.map()) {
            println!("  {}", serde_json::to_string(&recorded.options)?);
        }
    }

    // Replay some native events through the venue map.
    println!("\nreplaying events:");
    let venue_container = dom
        .select("#venue-map")
        .into_iter()
        .next()
        .context("venue map container exists")?;
    let venue_map = registry
        .get(venue_container.id())
        .context("venue map was initialized")?;

    venue_map.handle_map_click(&PointerEvent::at_position(LatLng::new(51.5, -0.12)));
    venue_map.handle_marker_event(MarkerId(0), PointerEventKind::Click, &PointerEvent::new());

    let legend = dom.select(".venue");
    let big_ben = legend.get(1).context("legend has three venues")?;
    venue_map.handle_legend_event(big_ben.id(), PointerEventKind::MouseEnter, &PointerEvent::new());

    Ok(())
}
