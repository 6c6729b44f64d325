//! Dreiecks-Mesh der Straßenfläche (Vertex-/Index-Buffer).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-Vertex für den Host-Renderer (Position + Normale).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position im lokalen Raum der Straße
    pub position: [f32; 3],
    /// Vertex-Normale
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Erstellt einen neuen MeshVertex.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Generiertes Straßen-Mesh (Triangle-List).
///
/// Wird bei jeder Generierung komplett neu aufgebaut, es gibt kein inkrementelles Update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadMesh {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl RoadMesh {
    /// Name, unter dem das Mesh an den Host übergeben wird.
    pub const NAME: &'static str = "procedural road";

    /// Erstellt ein Mesh aus Vertex- und Index-Buffer und berechnet die Normalen.
    ///
    /// Alle Indizes müssen auf existierende Vertices zeigen.
    pub fn from_buffers(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            vertices,
            normals: Vec::new(),
            indices,
        };
        mesh.recalculate_normals();
        mesh
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Berechnet Vertex-Normalen aus der Dreiecks-Topologie neu.
    ///
    /// Flächennormalen (`(b-a) × (c-a)`) werden flächengewichtet pro Vertex
    /// aufsummiert und normalisiert. Vertices ohne Dreieck erhalten den Nullvektor.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// Interleaved Vertex-Buffer für den Upload.
    pub fn to_vertex_buffer(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| MeshVertex::new(position, normal))
            .collect()
    }

    /// Index-Buffer als Rohbytes (u32, native Byte-Reihenfolge).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
