//! Road-Ribbon-Editor Library.
//! Editor-Kern (Commands, Undo/Redo, Optionen) und Mesh-Export über der Engine.

pub mod app;
pub mod export;
pub mod shared;

pub use app::{build_session, EditHistory, RoadCommand, RoadSession};
pub use export::{export_to_file, write_json, write_obj, MeshExport};
pub use road_ribbon_engine::{
    build_mesh, ContinuityMode, CubicBezier, HandleKind, MeshVertex, Road, RoadError, RoadMesh,
    RoadPoint, SegmentRails,
};
pub use shared::RoadOptions;
