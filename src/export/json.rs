//! JSON-Export der Mesh-Buffer für Host-Renderer.

use anyhow::Result;
use road_ribbon_engine::RoadMesh;
use serde::{Deserialize, Serialize};

/// Serialisierbare Sicht auf ein Mesh (flache Buffer, Triangle-List).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshExport {
    /// Mesh-Name
    pub name: String,
    /// Vertex-Positionen
    pub vertices: Vec<[f32; 3]>,
    /// Vertex-Normalen
    pub normals: Vec<[f32; 3]>,
    /// Dreiecks-Indizes
    pub indices: Vec<u32>,
}

impl From<&RoadMesh> for MeshExport {
    fn from(mesh: &RoadMesh) -> Self {
        Self {
            name: mesh.name().to_string(),
            vertices: mesh.vertices().iter().map(|v| v.to_array()).collect(),
            normals: mesh.normals().iter().map(|n| n.to_array()).collect(),
            indices: mesh.indices().to_vec(),
        }
    }
}

/// Schreibt ein Mesh als JSON-Dokument.
pub fn write_json(mesh: &RoadMesh) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MeshExport::from(mesh))?)
}
