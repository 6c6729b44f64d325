//! Mesh-Export (Wavefront-OBJ und JSON).

pub mod json;
pub mod obj;

pub use json::{write_json, MeshExport};
pub use obj::write_obj;

use anyhow::{bail, Context, Result};
use road_ribbon_engine::RoadMesh;
use std::path::Path;

/// Exportiert ein Mesh; das Format folgt der Dateiendung (`.obj` oder `.json`).
pub fn export_to_file(mesh: &RoadMesh, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content = match extension.as_deref() {
        Some("obj") => write_obj(mesh)?,
        Some("json") => write_json(mesh)?,
        _ => bail!("Unbekanntes Exportformat: {}", path.display()),
    };
    std::fs::write(path, content)
        .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;
    log::info!(
        "Mesh exportiert nach: {} ({} Vertices)",
        path.display(),
        mesh.vertex_count()
    );
    Ok(())
}
