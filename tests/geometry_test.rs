// Geometry engine checks against a full fixture data file.

mod common;

use common::*;
use hotspot_map::geometry::{
    compute_marker_layout, resolve_breakpoint, resolve_responsive_coords, Size, MIN_MARKER_SIZE,
};
use hotspot_map::models::{Breakpoint, Coords, ResponsiveCoords};
use hotspot_map::schema::parse_data_file;

fn fixture() -> hotspot_map::models::HotspotDataFile {
    parse_data_file(data_file_body("en").as_bytes()).unwrap()
}

#[test]
fn test_every_fixture_hotspot_has_layout_when_measured() {
    let data = fixture();
    for width in [320.0, 768.0, 1440.0] {
        let container = Size::new(width, width * 0.66);
        for hotspot in &data.hotspots {
            let layout = compute_marker_layout(hotspot, container).unwrap();
            assert!(layout.width >= MIN_MARKER_SIZE);
            assert!(layout.height >= MIN_MARKER_SIZE);
        }
    }
}

#[test]
fn test_layout_is_null_iff_a_dimension_is_zero() {
    let data = fixture();
    let hotspot = &data.hotspots[0];
    assert!(compute_marker_layout(hotspot, Size::new(0.0, 0.0)).is_none());
    assert!(compute_marker_layout(hotspot, Size::new(0.0, 500.0)).is_none());
    assert!(compute_marker_layout(hotspot, Size::new(500.0, 0.0)).is_none());
    assert!(compute_marker_layout(hotspot, Size::new(1.0, 1.0)).is_some());
}

#[test]
fn test_polygon_clip_path_coordinates_in_range() {
    let data = fixture();
    let polygon = &data.hotspots[2];
    let layout = compute_marker_layout(polygon, Size::new(1024.0, 768.0)).unwrap();
    let clip = layout.clip_path.unwrap();
    let inner = clip
        .strip_prefix("polygon(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap();

    let values: Vec<f64> = inner
        .split(", ")
        .flat_map(|pair| pair.split(' '))
        .map(|v| v.trim_end_matches('%').parse::<f64>().unwrap())
        .collect();
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn test_md_override_applies_from_768() {
    let data = fixture();
    let coords = &data.hotspots[0].coords;
    assert_eq!(resolve_responsive_coords(coords, 767.0).y, 50.0);
    assert_eq!(resolve_responsive_coords(coords, 768.0).y, 45.0);
    assert_eq!(resolve_breakpoint(coords, 2000.0), Some(Breakpoint::Md));
}

#[test]
fn test_wide_container_falls_back_through_breakpoints() {
    let coords = ResponsiveCoords::new(Coords::center(1.0, 1.0))
        .with_override(Breakpoint::Sm, Coords::center(2.0, 2.0));
    assert_eq!(resolve_responsive_coords(&coords, 1280.0), Coords::center(2.0, 2.0));

    let default_only = ResponsiveCoords::new(Coords::center(1.0, 1.0));
    assert_eq!(
        resolve_responsive_coords(&default_only, 1920.0),
        Coords::center(1.0, 1.0)
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let data = fixture();
    for hotspot in &data.hotspots {
        for width in [0.0, 480.0, 900.0, 1300.0] {
            let first = resolve_responsive_coords(&hotspot.coords, width);
            let again = resolve_responsive_coords(&ResponsiveCoords::new(first), width);
            assert_eq!(first, again);
        }
    }
}
