#![no_main]

use glam::Vec3;
use libfuzzer_sys::fuzz_target;
use road_ribbon_editor::{HandleKind, Road, RoadPoint};

// Beliebige Punktfolgen dürfen NaN erzeugen, aber nie paniken und die
// Buffer-Größen müssen immer stimmen.
fuzz_target!(|data: &[u8]| {
    let floats: Vec<f32> = data
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let points: Vec<RoadPoint> = floats
        .chunks_exact(4)
        .map(|c| {
            let mut point = RoadPoint::new(Vec3::new(c[0], c[1], c[2]), Vec3::X);
            point.set_width(c[3]);
            point
        })
        .collect();

    let Ok(mut road) = Road::from_points(points) else {
        return;
    };
    road.recalculate_all_tangents();
    if let Some(&selector) = data.first() {
        if let Ok(kind) = HandleKind::try_from(selector % 5) {
            road.move_handle(0, kind, Vec3::ONE, selector & 1 == 1);
        }
        road.insert_point_after(selector as usize % road.point_count());
    }

    let steps = data.len() % 8 + 1;
    let n = road.point_count();
    let mesh = road.generate_geometry(steps).expect("Schrittzahl ≥ 1");
    assert_eq!(mesh.vertex_count(), 2 * (steps * (n - 1) + 1));
    assert_eq!(mesh.indices().len(), 6 * steps * (n - 1));
});
