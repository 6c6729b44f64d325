//! Integrationstests für das Spline-Modell über die öffentliche API:
//! - Tangenten-Kopplung (Mirrored/Aligned/Free)
//! - Einfügen/Anhängen und automatische Tangenten
//! - Mesh-Generierung (Buffer-Größen, Determinismus)

use approx::assert_relative_eq;
use glam::Vec3;
use road_ribbon_editor::{ContinuityMode, HandleKind, Road, RoadCommand, RoadOptions, RoadSession};
use road_ribbon_editor::{RoadError, RoadPoint};

/// Erstellt eine S-förmige Straße mit wechselnden Breiten und geneigter Normale.
fn s_curve() -> Road {
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 0.5, 2.0),
        Vec3::new(10.0, 1.0, -2.0),
        Vec3::new(15.0, 0.5, 0.0),
    ];
    let mut points: Vec<RoadPoint> = positions
        .iter()
        .map(|&p| RoadPoint::new(p, Vec3::X))
        .collect();
    points[1].set_width(2.0);
    points[2].set_width(3.5);
    points[2].set_normal(Vec3::new(0.2, 1.0, 0.0));

    let mut road = Road::from_points(points).expect("vier Punkte");
    road.recalculate_all_tangents();
    road
}

// ─── Tangenten-Kopplung ──────────────────────────────────────────────────────

#[test]
fn test_mirrored_invariant_survives_editing_sequence() {
    let mut road = s_curve();
    for (i, v) in [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-0.5, 0.0, 0.25),
        Vec3::new(0.0, -4.0, 1.0),
    ]
    .into_iter()
    .enumerate()
    {
        let point = road.point_mut(i % road.point_count());
        point.set_tangent_out(v);
        assert_eq!(point.tangent_in(), -point.tangent_out());
    }
}

#[test]
fn test_aligned_mode_preserves_incoming_length() {
    let mut road = s_curve();
    let point = road.point_mut(1);
    point.set_mode(ContinuityMode::Free);
    point.set_tangent_in(Vec3::new(0.0, 0.0, -2.5));
    point.set_mode(ContinuityMode::Aligned);
    let len_before = point.tangent_in().length();

    let v = Vec3::new(1.0, 1.0, 0.0);
    point.set_tangent_out(v);

    let t_in = point.tangent_in();
    assert_relative_eq!(t_in.length(), len_before, epsilon = 1e-5);
    assert_relative_eq!(t_in.normalize().cross(v.normalize()).length(), 0.0, epsilon = 1e-5);
}

#[test]
fn test_normals_stay_unit_after_recalculation() {
    let road = s_curve();
    for point in &road {
        assert_relative_eq!(point.normal().length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_invalid_handle_discriminant() {
    let err = HandleKind::try_from(9u8).unwrap_err();
    assert!(matches!(err, RoadError::InvalidArgument(_)));
    assert!(err.to_string().contains('9'));
}

// ─── Punktverwaltung ─────────────────────────────────────────────────────────

#[test]
fn test_two_point_endpoint_recalculation() {
    let mut road = Road::from_points(vec![
        RoadPoint::new(Vec3::ZERO, Vec3::Z),
        RoadPoint::new(Vec3::new(3.0, 0.0, 0.0), Vec3::Z),
    ])
    .expect("zwei Punkte");

    road.recalculate_tangents(0);
    road.recalculate_tangents(1);

    assert_eq!(road[0].tangent_out(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(road[1].tangent_in(), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_insert_midpoint_on_straight_road() {
    let mut road = Road::new();
    road.insert_point_after(0);

    assert_eq!(road.point_count(), 3);
    let x = road[1].position().x;
    assert!(x > road[0].position().x && x < road[2].position().x);
}

// ─── Geometrie ───────────────────────────────────────────────────────────────

#[test]
fn test_geometry_buffer_sizes_for_s_curve() {
    let mut road = s_curve();
    let steps = 4;
    let n = road.point_count();

    let mesh = road.generate_geometry(steps).expect("gültige Schrittzahl");

    assert_eq!(mesh.vertex_count(), 2 * (steps * (n - 1) + 1));
    assert_eq!(mesh.indices().len(), 6 * steps * (n - 1));
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}

#[test]
fn test_regeneration_is_bit_identical() {
    let mut road = s_curve();
    let first = road.generate_geometry(8).expect("gültig").clone();
    let second = road.generate_geometry(8).expect("gültig").clone();

    let bits = |mesh: &road_ribbon_editor::RoadMesh| -> Vec<u32> {
        mesh.vertices()
            .iter()
            .flat_map(|v| v.to_array().map(f32::to_bits))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first.indices(), second.indices());
}

#[test]
fn test_rail_width_matches_point_width_at_anchors() {
    let mut road = s_curve();
    let steps = 3;
    let mesh = road.generate_geometry(steps).expect("gültig").clone();

    for (i, point) in road.iter().enumerate() {
        let right = mesh.vertices()[2 * steps * i];
        let left = mesh.vertices()[2 * steps * i + 1];
        assert_relative_eq!(right.distance(left), point.width(), epsilon = 1e-4);
    }
}

// ─── Sitzung ─────────────────────────────────────────────────────────────────

#[test]
fn test_session_editing_flow() {
    let mut session = RoadSession::new(RoadOptions::default());

    session.apply(RoadCommand::AddPoint).expect("add");
    session
        .apply(RoadCommand::InsertPointAfter { index: 1 })
        .expect("insert");
    session
        .apply(RoadCommand::MoveHandle {
            index: 2,
            kind: HandleKind::TangentOut,
            location: Vec3::new(3.0, 0.0, 1.0),
        })
        .expect("move");
    session.apply(RoadCommand::GenerateGeometry).expect("generate");

    assert_eq!(session.road().point_count(), 4);
    assert_eq!(session.mesh().vertex_count(), 2 * (4 * 3 + 1));

    // Alle vier Schritte lassen sich rückgängig machen
    for _ in 0..4 {
        assert!(session.undo());
    }
    assert_eq!(session.road().point_count(), 2);
    assert!(session.mesh().is_empty());
}
