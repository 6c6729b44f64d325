//! Application-Layer: Commands, Sitzung mit Undo/Redo und Headless-Pipeline.

pub mod commands;
pub mod history;
pub mod pipeline;
/// Bearbeitungssitzung
///
/// Verbindet Straße, Optionen und Historie; Einstiegspunkt für Editor-Frontends.
pub mod session;

pub use commands::RoadCommand;
pub use history::{EditHistory, Snapshot};
pub use pipeline::build_session;
pub use session::RoadSession;
