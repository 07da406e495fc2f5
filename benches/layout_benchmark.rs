//! Performance benchmarks for marker layout
//!
//! Measures layout of a full hotspot set across container widths.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hotspot_map::geometry::{compute_marker_layout, resolve_responsive_coords, Size};
use hotspot_map::models::{Anchor, Breakpoint, Category, Coords, Hotspot, Point, ResponsiveCoords, Shape};

/// Generate hotspots cycling through every shape kind
fn generate_hotspots(count: usize) -> Vec<Hotspot> {
    (0..count)
        .map(|i| {
            let shape = match i % 3 {
                0 => Shape::Circle { radius: 3.0 },
                1 => Shape::Rectangle {
                    width: 8.0,
                    height: 6.0,
                    border_radius: Some(4.0),
                },
                _ => Shape::Polygon {
                    points: (0..8)
                        .map(|k| {
                            let angle = k as f64 * std::f64::consts::TAU / 8.0;
                            Point::new(angle.cos() * 4.0, angle.sin() * 4.0)
                        })
                        .collect(),
                },
            };
            let x = (i % 10) as f64 * 9.0 + 5.0;
            Hotspot {
                id: format!("zone-{}", i),
                title: format!("Zone {}", i),
                short_title: None,
                description: "Benchmark hotspot".to_string(),
                aria_label: format!("Open zone {}", i),
                coords: ResponsiveCoords::new(Coords::center(x, 50.0))
                    .with_override(Breakpoint::Md, Coords::new(Anchor::TopLeft, x, 40.0))
                    .with_override(Breakpoint::Xl, Coords::center(x, 45.0)),
                shape,
                media: None,
                categories: vec![Category::Physical],
                severity: None,
                links: None,
                updated_at: None,
            }
        })
        .collect()
}

/// Benchmark laying out a full set of markers
fn bench_marker_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_layout");
    let hotspots = generate_hotspots(12);

    for width in [375.0, 1024.0, 1920.0] {
        let container = Size::new(width, width * 0.66);
        group.throughput(Throughput::Elements(hotspots.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}px", width)),
            &container,
            |b, container| {
                b.iter(|| {
                    let layouts: Vec<_> = hotspots
                        .iter()
                        .filter_map(|h| compute_marker_layout(black_box(h), *container))
                        .collect();
                    black_box(layouts)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark breakpoint resolution alone
fn bench_resolve_coords(c: &mut Criterion) {
    let hotspots = generate_hotspots(120);

    c.bench_function("resolve_responsive_coords_120", |b| {
        b.iter(|| {
            for h in &hotspots {
                black_box(resolve_responsive_coords(&h.coords, black_box(1300.0)));
            }
        });
    });
}

criterion_group!(benches, bench_marker_layout, bench_resolve_coords);
criterion_main!(benches);
