//! Core-Domänentypen: Bézier-Auswertung, Kontrollpunkte, Straße, Mesh.

pub mod bezier;
pub mod error;
pub mod mesh;
pub mod road;
/// Einzelner Spline-Kontrollpunkt
///
/// Hält die Tangenten-Invarianten (Mirrored/Aligned) selbst, damit kein
/// Aufrufer sie umgehen kann.
pub mod road_point;

pub use bezier::{cubic_bezier, quadratic_bezier, CubicBezier};
pub use error::RoadError;
pub use mesh::{MeshVertex, RoadMesh};
pub use road::{build_mesh, Road, SegmentRails, DEFAULT_STEPS_PER_SEGMENT};
pub use road_point::{ContinuityMode, HandleKind, RoadPoint};
