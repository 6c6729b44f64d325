//! Reine Bézier-Auswertung (Bernstein-Basis) über `Vec3`.
//!
//! Keine Fehlerfälle: `t` außerhalb von [0, 1] extrapoliert entlang des Polynoms.

use glam::Vec3;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Kubische Bézier-Kurve mit absoluten Kontrollpunkten.
///
/// Wird für die beiden Schienen (rechts/links) eines Segments verwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Startpunkt
    pub p0: Vec3,
    /// Erster Steuerpunkt
    pub p1: Vec3,
    /// Zweiter Steuerpunkt
    pub p2: Vec3,
    /// Endpunkt
    pub p3: Vec3,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Punkt auf der Kurve bei Parameter `t`.
    pub fn eval(&self, t: f32) -> Vec3 {
        cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// `steps + 1` gleichmäßig im Parameter verteilte Punkte inklusive beider Enden.
    ///
    /// Die Enden sind exakt `p0` und `p3`; `steps == 0` liefert nur den Startpunkt.
    pub fn sample(&self, steps: usize) -> Vec<Vec3> {
        if steps == 0 {
            return vec![self.p0];
        }
        let mut points = Vec::with_capacity(steps + 1);
        points.push(self.p0);
        points.extend((1..steps).map(|i| self.eval(i as f32 / steps as f32)));
        points.push(self.p3);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_bezier_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(5.0, 10.0, -2.0);
        let p2 = Vec3::new(10.0, 0.0, 4.0);

        assert!((quadratic_bezier(p0, p1, p2, 0.0) - p0).length() < 1e-6);
        assert!((quadratic_bezier(p0, p1, p2, 1.0) - p2).length() < 1e-6);
    }

    #[test]
    fn test_quadratic_bezier_collinear_midpoint() {
        let mid = quadratic_bezier(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0), 0.5);
        assert_relative_eq!(mid.x, 1.0);
        assert_relative_eq!(mid.y, 0.0);
        assert_relative_eq!(mid.z, 0.0);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(3.0, 10.0, 1.0);
        let p2 = Vec3::new(7.0, 10.0, 1.0);
        let p3 = Vec3::new(10.0, 0.0, 0.0);

        assert!((cubic_bezier(p0, p1, p2, p3, 0.0) - p0).length() < 1e-6);
        assert!((cubic_bezier(p0, p1, p2, p3, 1.0) - p3).length() < 1e-6);
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let curve = CubicBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        );
        let mid = curve.eval(0.5);
        assert!((mid - Vec3::new(5.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_extrapolation_beyond_unit_interval() {
        // Kollineare, gleichabständige Punkte → lineare Parametrisierung
        let p = quadratic_bezier(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0), 1.5);
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sample_includes_both_ends() {
        let curve = CubicBezier::new(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        );
        let samples = curve.sample(4);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], curve.p0);
        assert_eq!(samples[4], curve.p3);
        assert_eq!(samples[2], curve.eval(0.5));
        assert_eq!(curve.sample(0), vec![curve.p0]);
    }
}
