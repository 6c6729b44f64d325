//! Road-Ribbon-Engine.
//!
//! Spline-Modell (Kontrollpunkte mit zwei Tangenten, Breite und Normale) und
//! Triangulierung der daraus abgeleiteten Straßenfläche. Frei von UI- und
//! Render-Abhängigkeiten, damit Editor, Exporter und Tests dieselbe Logik nutzen.

pub mod core;

pub use crate::core::{
    build_mesh, cubic_bezier, quadratic_bezier, ContinuityMode, CubicBezier, HandleKind,
    MeshVertex, Road, RoadError, RoadMesh, RoadPoint, SegmentRails, DEFAULT_STEPS_PER_SEGMENT,
};
