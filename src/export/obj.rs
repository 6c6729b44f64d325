//! Writer für Wavefront-OBJ.

use anyhow::Result;
use road_ribbon_engine::RoadMesh;
use std::fmt::Write;

/// Schreibt ein Mesh als Wavefront-OBJ (Positionen, Normalen, Dreiecke).
///
/// OBJ-Indizes sind 1-basiert; jede Fläche referenziert Position und Normale
/// mit demselben Index (`f a//a b//b c//c`).
pub fn write_obj(mesh: &RoadMesh) -> Result<String> {
    let mut output = String::new();
    writeln!(output, "# road-ribbon-editor v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(output, "o {}", mesh.name().replace(' ', "_"))?;

    for v in mesh.vertices() {
        writeln!(output, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in mesh.normals() {
        writeln!(output, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.indices().chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(output, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(output)
}
