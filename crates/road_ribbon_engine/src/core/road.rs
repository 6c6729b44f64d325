//! Die zentrale Road-Datenstruktur: geordnete Kontrollpunkte und Mesh-Generierung.

use super::{CubicBezier, HandleKind, RoadError, RoadMesh, RoadPoint};
use glam::Vec3;
use std::ops::Index;

/// Standard-Anzahl Abtastschritte pro Segment.
pub const DEFAULT_STEPS_PER_SEGMENT: usize = 4;
/// Abstand (in Vielfachen der ausgehenden Tangente) für `add_point`.
pub const APPEND_SPACING: f32 = 3.0;
/// Minimale Punktanzahl einer gültigen Straße.
pub const MIN_POINTS: usize = 2;

/// Rechte und linke Schiene eines Segments als kubische Bézier-Kurven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRails {
    /// Schiene entlang der rechten Ecken
    pub right: CubicBezier,
    /// Schiene entlang der linken Ecken
    pub left: CubicBezier,
}

impl SegmentRails {
    /// Baut beide Schienen zwischen zwei aufeinanderfolgenden Punkten.
    ///
    /// Die Griffe jeder Schiene sind die Tangenten der Mittellinie, skaliert mit
    /// Sehnenlänge der Schiene / Sehnenlänge der Mittellinie. Außenschienen
    /// einer Kurve bekommen dadurch längere Griffe. Bei Sehne 0 entsteht NaN/∞.
    pub fn between(prev: &RoadPoint, next: &RoadPoint) -> Self {
        let center_chord = next.position().distance(prev.position());
        Self {
            right: rail(prev, next, prev.right_corner(), next.right_corner(), center_chord),
            left: rail(prev, next, prev.left_corner(), next.left_corner(), center_chord),
        }
    }
}

fn rail(
    prev: &RoadPoint,
    next: &RoadPoint,
    start: Vec3,
    end: Vec3,
    center_chord: f32,
) -> CubicBezier {
    let multiplier = end.distance(start) / center_chord;
    CubicBezier::new(
        start,
        start + prev.tangent_out() * multiplier,
        end + next.tangent_in() * multiplier,
        end,
    )
}

/// Bandförmige Straße aus mindestens zwei Kontrollpunkten.
///
/// Besitzt ihre Punkte exklusiv; Nachbarn werden ausschließlich über Indizes
/// gelesen, damit Einfügungen keine Referenzen ungültig machen.
#[derive(Debug, Clone)]
pub struct Road {
    points: Vec<RoadPoint>,
    mesh: RoadMesh,
}

impl Road {
    /// Erstellt die Standard-Straße mit zwei Punkten auf der X-Achse.
    pub fn new() -> Self {
        Self {
            points: default_points(),
            mesh: RoadMesh::default(),
        }
    }

    /// Erstellt eine Straße aus vorhandenen Punkten (mindestens zwei).
    pub fn from_points(points: Vec<RoadPoint>) -> Result<Self, RoadError> {
        if points.len() < MIN_POINTS {
            return Err(RoadError::TooFewPoints {
                count: points.len(),
            });
        }
        Ok(Self {
            points,
            mesh: RoadMesh::default(),
        })
    }

    /// Setzt die Straße auf die zwei Standard-Punkte zurück und verwirft das Mesh.
    pub fn reset(&mut self) {
        self.points = default_points();
        self.mesh = RoadMesh::default();
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt die Anzahl der Segmente zurück (Punkte − 1)
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Kontrollpunkt am Index. Panikt bei ungültigem Index (Vertragsverletzung).
    pub fn point(&self, index: usize) -> &RoadPoint {
        &self.points[index]
    }

    /// Veränderbarer Kontrollpunkt. Invarianten schützt der Punkt selbst.
    pub fn point_mut(&mut self, index: usize) -> &mut RoadPoint {
        &mut self.points[index]
    }

    /// Geprüfter Zugriff auf einen Kontrollpunkt.
    pub fn get(&self, index: usize) -> Option<&RoadPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[RoadPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoadPoint> {
        self.points.iter()
    }

    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.points.len()
    }

    pub fn has_previous(&self, index: usize) -> bool {
        index > 0
    }

    /// Hängt einen Punkt in Fahrtrichtung des letzten Punkts an.
    pub fn add_point(&mut self) {
        self.add_point_with_spacing(APPEND_SPACING);
    }

    /// Hängt einen Punkt bei `last.position + last.tangent_out · spacing` an.
    ///
    /// Der neue Punkt übernimmt Tangente und Breite des letzten Punkts.
    pub fn add_point_with_spacing(&mut self, spacing: f32) {
        let last = &self.points[self.points.len() - 1];
        let direction = last.tangent_out();
        let mut point = RoadPoint::new(last.position() + direction * spacing, direction);
        point.set_width(last.width());
        self.points.push(point);
        log::debug!("Punkt angehängt, jetzt {} Punkte", self.points.len());
    }

    /// Fügt einen Punkt zwischen `index` und `index + 1` ein.
    ///
    /// Am letzten Index identisch zu [`Road::add_point`]. Sonst wird der neue Punkt
    /// eingefügt und danach die Tangenten von `index`, `index + 1` und `index + 2`
    /// neu berechnet (Reihenfolge zwingend: erst einfügen, dann ableiten).
    pub fn insert_point_after(&mut self, index: usize) {
        debug_assert!(index < self.points.len(), "Index {index} außerhalb");
        if !self.has_next(index) {
            self.add_point();
            return;
        }

        let prev = &self.points[index];
        let next = &self.points[index + 1];

        let position = 0.5 * (next.position() + prev.position())
            + 0.375 * (prev.tangent_out() + next.tangent_in());
        let mut point = RoadPoint::new(position, (next.position() - prev.position()) / 3.0);
        point.set_width(0.5 * (prev.width() + next.width()));

        self.points.insert(index + 1, point);
        for i in index..=index + 2 {
            self.recalculate_tangents(i);
        }
        log::debug!("Punkt nach Index {} eingefügt", index);
    }

    /// Entfernt einen Punkt. Eine Straße behält immer mindestens zwei Punkte.
    pub fn remove_point(&mut self, index: usize) -> Result<RoadPoint, RoadError> {
        if self.points.len() <= MIN_POINTS {
            return Err(RoadError::TooFewPoints {
                count: self.points.len() - 1,
            });
        }
        Ok(self.points.remove(index))
    }

    /// Verschiebt einen Griff eines Punkts auf eine absolute Position.
    ///
    /// Mit `auto_tangents` werden nach dem Verschieben der Ankerposition die
    /// Tangenten dieses Punkts neu abgeleitet.
    pub fn move_handle(
        &mut self,
        index: usize,
        kind: HandleKind,
        location: Vec3,
        auto_tangents: bool,
    ) {
        self.points[index].set_handle(kind, location);
        if auto_tangents && kind == HandleKind::Position {
            self.recalculate_tangents(index);
        }
    }

    /// Leitet Tangenten und Normale eines Punkts aus seinen direkten Nachbarn ab.
    ///
    /// Rein lokal (O(1)):
    /// - Endpunkte: Tangente zur Nachbarseite = Abstand/3, Normale vom Nachbarn
    /// - Innere Punkte: Richtung `normalize(dN/|dN|² − dP/|dP|²)`, Länge
    ///   `sqrt(|dN|·|dP|)/3`; Normale invers zur Distanz gewichtet
    ///
    /// Alle Werte laufen über die Setter des Punkts; die Normale wird dabei
    /// normalisiert, die Gewichte der Mischung bleiben unverändert.
    pub fn recalculate_tangents(&mut self, index: usize) {
        let has_next = self.has_next(index);
        let has_previous = self.has_previous(index);

        match (has_previous, has_next) {
            (false, false) => {}
            (true, false) => {
                let (prev_position, prev_normal) = position_and_normal(&self.points[index - 1]);
                let point = &mut self.points[index];
                point.set_tangent_in((prev_position - point.position()) / 3.0);
                point.set_normal(prev_normal);
            }
            (false, true) => {
                let (next_position, next_normal) = position_and_normal(&self.points[index + 1]);
                let point = &mut self.points[index];
                point.set_tangent_out((next_position - point.position()) / 3.0);
                point.set_normal(next_normal);
            }
            (true, true) => {
                let (prev_position, prev_normal) = position_and_normal(&self.points[index - 1]);
                let (next_position, next_normal) = position_and_normal(&self.points[index + 1]);
                let point = &mut self.points[index];

                let d_next = next_position - point.position();
                let d_prev = prev_position - point.position();
                let len_next = d_next.length();
                let len_prev = d_prev.length();

                let direction =
                    (d_next / d_next.length_squared() - d_prev / d_prev.length_squared())
                        .normalize();
                let tangent = direction * ((len_next * len_prev).sqrt() / 3.0);

                point.set_tangent_out(tangent);
                point.set_tangent_in(-tangent);

                let sum = len_next + len_prev;
                point.set_normal(next_normal * len_prev / sum + prev_normal * len_next / sum);
            }
        }
    }

    /// Berechnet die Tangenten aller Punkte der Reihe nach neu.
    pub fn recalculate_all_tangents(&mut self) {
        for i in 0..self.points.len() {
            self.recalculate_tangents(i);
        }
        log::debug!("Tangenten aller {} Punkte neu berechnet", self.points.len());
    }

    /// Schienen des Segments `segment` (zwischen Punkt `segment` und `segment + 1`).
    pub fn segment_rails(&self, segment: usize) -> SegmentRails {
        SegmentRails::between(&self.points[segment], &self.points[segment + 1])
    }

    /// Trianguliert die Straße neu und ersetzt das bisherige Mesh komplett.
    ///
    /// Bei `steps_per_segment == 0` bleibt das alte Mesh erhalten.
    pub fn generate_geometry(&mut self, steps_per_segment: usize) -> Result<&RoadMesh, RoadError> {
        self.mesh = build_mesh(&self.points, steps_per_segment)?;
        log::debug!(
            "Mesh generiert: {} Vertices, {} Dreiecke",
            self.mesh.vertex_count(),
            self.mesh.triangle_count()
        );
        Ok(&self.mesh)
    }

    /// Zuletzt generiertes Mesh (leer vor dem ersten `generate_geometry`).
    pub fn mesh(&self) -> &RoadMesh {
        &self.mesh
    }
}

impl Default for Road {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Road {
    type Output = RoadPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Road {
    type Item = &'a RoadPoint;
    type IntoIter = std::slice::Iter<'a, RoadPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Baut Vertex- und Index-Buffer für eine Punktfolge.
///
/// Vertex-Reihenfolge: pro Segment `(rechts, links)` am Segmentanfang plus
/// `steps_per_segment − 1` innere Abtastpaare, am Ende einmal das Eckenpaar des
/// letzten Punkts. Segmentgrenzen teilen sich ihre Vertices, der Streifen ist
/// damit lückenlos: `2·(steps·(N−1)+1)` Vertices, `6·steps·(N−1)` Indizes.
pub fn build_mesh(points: &[RoadPoint], steps_per_segment: usize) -> Result<RoadMesh, RoadError> {
    if steps_per_segment == 0 {
        return Err(RoadError::InvalidStepCount(steps_per_segment));
    }
    if points.len() < MIN_POINTS {
        return Err(RoadError::TooFewPoints {
            count: points.len(),
        });
    }

    let segments = points.len() - 1;
    let quad_count = steps_per_segment * segments;
    let mut vertices = Vec::with_capacity(2 * (quad_count + 1));

    for pair in points.windows(2) {
        let rails = SegmentRails::between(&pair[0], &pair[1]);
        let right = rails.right.sample(steps_per_segment);
        let left = rails.left.sample(steps_per_segment);

        // Endpaar gehört zum nächsten Segment
        for (r, l) in right.into_iter().zip(left).take(steps_per_segment) {
            vertices.push(r);
            vertices.push(l);
        }
    }
    let last = &points[segments];
    vertices.push(last.right_corner());
    vertices.push(last.left_corner());

    let mut indices = Vec::with_capacity(6 * quad_count);
    for quad in 0..quad_count {
        let off = (2 * quad) as u32;
        indices.extend_from_slice(&[off, off + 1, off + 2, off + 1, off + 3, off + 2]);
    }

    Ok(RoadMesh::from_buffers(vertices, indices))
}

fn position_and_normal(point: &RoadPoint) -> (Vec3, Vec3) {
    (point.position(), point.normal())
}

fn default_points() -> Vec<RoadPoint> {
    let direction = Vec3::new(0.33, 0.0, 0.0);
    vec![
        RoadPoint::new(Vec3::new(1.0, 0.0, 0.0), direction),
        RoadPoint::new(Vec3::new(2.0, 0.0, 0.0), direction),
    ]
}
