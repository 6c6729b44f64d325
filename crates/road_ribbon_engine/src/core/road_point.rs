//! Kontrollpunkt der Straßen-Spline mit zwei Tangenten, Breite und Normale.

use super::RoadError;
use glam::Vec3;

/// Kopplung der beiden Tangenten eines Kontrollpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuityMode {
    /// Tangenten sind unabhängig
    Free,
    /// Gleiche Richtung (kollinear), Längen bleiben unabhängig
    Aligned,
    /// Gegenüberliegende Tangente ist exakt gespiegelt
    #[default]
    Mirrored,
}

/// Bearbeitbarer Griff eines Kontrollpunkts (Editor-Selektor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Ankerposition
    Position,
    /// Spitze der eingehenden Tangente
    TangentIn,
    /// Spitze der ausgehenden Tangente
    TangentOut,
    /// Spitze der Normale
    Normal,
}

impl HandleKind {
    /// Alle Griffe in Diskriminanten-Reihenfolge.
    pub const ALL: [HandleKind; 4] = [
        HandleKind::Position,
        HandleKind::TangentIn,
        HandleKind::TangentOut,
        HandleKind::Normal,
    ];
}

impl TryFrom<u8> for HandleKind {
    type Error = RoadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RoadError::InvalidArgument(format!("Handle-Typ {value}")))
    }
}

impl From<HandleKind> for u8 {
    fn from(kind: HandleKind) -> Self {
        kind as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TangentSide {
    In,
    Out,
}

impl TangentSide {
    fn opposite(self) -> Self {
        match self {
            TangentSide::In => TangentSide::Out,
            TangentSide::Out => TangentSide::In,
        }
    }
}

/// Ein Spline-Kontrollpunkt.
///
/// Tangenten sind Offsets relativ zu `position` (Griff absolut = `position + tangent`).
/// Alle Felder sind privat: Änderungen laufen über die Setter, die die
/// Kopplung gemäß [`ContinuityMode`] sofort wiederherstellen.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadPoint {
    position: Vec3,
    tangent_in: Vec3,
    tangent_out: Vec3,
    mode: ContinuityMode,
    width: f32,
    normal: Vec3,
}

impl RoadPoint {
    /// Erstellt einen Punkt mit ausgehender Tangente `direction`.
    ///
    /// Die eingehende Tangente wird gespiegelt, Modus `Mirrored`, Breite 1,
    /// Normale = globale Hochachse (Y).
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            tangent_in: -direction,
            tangent_out: direction,
            mode: ContinuityMode::Mirrored,
            width: 1.0,
            normal: Vec3::Y,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn tangent_in(&self) -> Vec3 {
        self.tangent_in
    }

    pub fn tangent_out(&self) -> Vec3 {
        self.tangent_out
    }

    pub fn mode(&self) -> ContinuityMode {
        self.mode
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Setzt die Breite. Keine Obergrenze im Modell (der Editor begrenzt selbst).
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Einheitsnormale (Hochachse des Querschnitts).
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Setzt die Normale normalisiert.
    ///
    /// Ein Nullvektor ergibt NaN-Komponenten; das wird bewusst nicht abgefangen.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal.normalize();
    }

    /// Setzt die ausgehende Tangente und gleicht die eingehende gemäß Modus an.
    pub fn set_tangent_out(&mut self, tangent: Vec3) {
        self.tangent_out = tangent;
        self.sync_tangent(TangentSide::In);
    }

    /// Setzt die eingehende Tangente und gleicht die ausgehende gemäß Modus an.
    pub fn set_tangent_in(&mut self, tangent: Vec3) {
        self.tangent_in = tangent;
        self.sync_tangent(TangentSide::Out);
    }

    /// Setzt den Modus und zieht die eingehende Tangente an die ausgehende nach.
    ///
    /// Nur in diese Richtung: die ausgehende Tangente bleibt unverändert.
    pub fn set_mode(&mut self, mode: ContinuityMode) {
        self.mode = mode;
        self.sync_tangent(TangentSide::In);
    }

    /// Rechte Querschnittsecke: `position + offset`
    pub fn right_corner(&self) -> Vec3 {
        self.position + self.corner_offset()
    }

    /// Linke Querschnittsecke: `position - offset`
    pub fn left_corner(&self) -> Vec3 {
        self.position - self.corner_offset()
    }

    /// Absolute Position eines Griffs (für Editor-Gizmos).
    pub fn handle(&self, kind: HandleKind) -> Vec3 {
        match kind {
            HandleKind::Position => self.position,
            HandleKind::TangentIn => self.position + self.tangent_in,
            HandleKind::TangentOut => self.position + self.tangent_out,
            HandleKind::Normal => self.position + self.normal,
        }
    }

    /// Verschiebt einen Griff auf die absolute Position `location`.
    ///
    /// Tangenten und Normale laufen über ihre Setter, die Invarianten bleiben erhalten.
    pub fn set_handle(&mut self, kind: HandleKind, location: Vec3) {
        match kind {
            HandleKind::Position => self.set_position(location),
            HandleKind::TangentIn => self.set_tangent_in(location - self.position),
            HandleKind::TangentOut => self.set_tangent_out(location - self.position),
            HandleKind::Normal => self.set_normal(location - self.position),
        }
    }

    /// `normalize(normal × (tangent_out − tangent_in)) · width/2`
    fn corner_offset(&self) -> Vec3 {
        let right = self.normal.cross(self.tangent_out - self.tangent_in);
        right.normalize() * (self.width * 0.5)
    }

    fn tangent(&self, side: TangentSide) -> Vec3 {
        match side {
            TangentSide::In => self.tangent_in,
            TangentSide::Out => self.tangent_out,
        }
    }

    fn tangent_mut(&mut self, side: TangentSide) -> &mut Vec3 {
        match side {
            TangentSide::In => &mut self.tangent_in,
            TangentSide::Out => &mut self.tangent_out,
        }
    }

    /// Leitet die Tangente `side` aus der gegenüberliegenden ab.
    fn sync_tangent(&mut self, side: TangentSide) {
        let reference = self.tangent(side.opposite());
        let current = self.tangent(side);
        let synced = match self.mode {
            ContinuityMode::Free => return,
            ContinuityMode::Mirrored => -reference,
            ContinuityMode::Aligned => align_to(reference, current),
        };
        *self.tangent_mut(side) = synced;
    }
}

/// Richtet `tangent` kollinear zu `reference` aus und behält seine Länge.
///
/// Das Vorzeichen folgt der Projektion auf `reference`; steht `tangent` senkrecht,
/// zeigt das Ergebnis entgegengesetzt (wie ein gewöhnlicher Bézier-Griff).
/// Bei Referenz der Länge 0 bleibt `tangent` unverändert.
fn align_to(reference: Vec3, tangent: Vec3) -> Vec3 {
    let Some(direction) = reference.try_normalize() else {
        return tangent;
    };
    let sign = if direction.dot(tangent) > 0.0 { 1.0 } else { -1.0 };
    direction * (sign * tangent.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn aligned_point() -> RoadPoint {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        point.set_mode(ContinuityMode::Free);
        point.set_tangent_in(Vec3::new(-2.0, 0.0, 1.0));
        point.set_mode(ContinuityMode::Aligned);
        point
    }

    #[test]
    fn test_new_point_defaults() {
        let point = RoadPoint::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(point.tangent_out(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(point.tangent_in(), Vec3::new(-0.5, 0.0, 0.0));
        assert_eq!(point.mode(), ContinuityMode::Mirrored);
        assert_relative_eq!(point.width(), 1.0);
        assert_eq!(point.normal(), Vec3::Y);
    }

    #[test]
    fn test_mirrored_keeps_exact_negation() {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::X);
        for v in [
            Vec3::new(0.3, -1.2, 4.0),
            Vec3::new(-7.5, 0.1, 0.0),
            Vec3::new(1e-3, 2e4, -3.3),
        ] {
            point.set_tangent_out(v);
            assert_eq!(point.tangent_in(), -point.tangent_out());
        }
        point.set_tangent_in(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(point.tangent_out(), Vec3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn test_aligned_preserves_length_and_forces_colinearity() {
        let mut point = aligned_point();
        let len_before = point.tangent_in().length();

        let v = Vec3::new(0.0, 3.0, 4.0);
        point.set_tangent_out(v);

        let t_in = point.tangent_in();
        assert_relative_eq!(t_in.length(), len_before, epsilon = 1e-5);
        assert_relative_eq!(t_in.normalize().cross(v.normalize()).length(), 0.0, epsilon = 1e-5);
        assert_eq!(point.tangent_out(), v);
    }

    #[test]
    fn test_aligned_sets_in_updates_out() {
        let mut point = aligned_point();
        let len_out = point.tangent_out().length();

        point.set_tangent_in(Vec3::new(0.0, 0.0, -5.0));

        assert_relative_eq!(point.tangent_out().length(), len_out, epsilon = 1e-5);
        // tangent_out zeigte senkrecht zur neuen Richtung → entgegengesetzt ausgerichtet
        assert_relative_eq!(point.tangent_out().z, len_out, epsilon = 1e-5);
    }

    #[test]
    fn test_aligned_with_zero_reference_keeps_tangent() {
        let mut point = aligned_point();
        let before = point.tangent_in();
        point.set_tangent_out(Vec3::ZERO);
        assert_eq!(point.tangent_in(), before);
    }

    #[test]
    fn test_free_mode_has_no_side_effect() {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::X);
        point.set_mode(ContinuityMode::Free);
        point.set_tangent_out(Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(point.tangent_in(), -Vec3::X);
        point.set_tangent_in(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(point.tangent_out(), Vec3::new(0.0, 0.0, 9.0));
    }

    #[test]
    fn test_set_mode_resyncs_incoming_only() {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::X);
        point.set_mode(ContinuityMode::Free);
        point.set_tangent_in(Vec3::new(0.0, 0.0, 2.0));

        point.set_mode(ContinuityMode::Mirrored);

        assert_eq!(point.tangent_out(), Vec3::X);
        assert_eq!(point.tangent_in(), -Vec3::X);
    }

    #[test]
    fn test_normal_is_normalized() {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::X);
        point.set_normal(Vec3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(point.normal().length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(point.normal().y, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_normal_yields_nan() {
        let mut point = RoadPoint::new(Vec3::ZERO, Vec3::X);
        point.set_normal(Vec3::ZERO);
        assert!(point.normal().is_nan());
    }

    #[test]
    fn test_corners_are_offset_by_half_width() {
        let mut point = RoadPoint::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.33, 0.0, 0.0));
        point.set_width(2.0);

        // Y × X = -Z
        let right = point.right_corner();
        let left = point.left_corner();
        assert!((right - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-6);
        assert!((left - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-6);
        assert_relative_eq!(right.distance(left), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_handle_locations_roundtrip_through_setters() {
        let mut point = RoadPoint::new(Vec3::new(2.0, 0.0, 0.0), Vec3::X);
        point.set_handle(HandleKind::TangentOut, Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(point.tangent_out(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(point.tangent_in(), Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(point.handle(HandleKind::TangentIn), Vec3::new(2.0, 0.0, -3.0));

        point.set_handle(HandleKind::Normal, Vec3::new(2.0, 5.0, 0.0));
        assert_eq!(point.normal(), Vec3::Y);

        point.set_handle(HandleKind::Position, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(point.handle(HandleKind::Position), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(point.tangent_out(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_handle_kind_discriminants() {
        for kind in HandleKind::ALL {
            assert_eq!(HandleKind::try_from(u8::from(kind)), Ok(kind));
        }
        assert!(matches!(
            HandleKind::try_from(4),
            Err(RoadError::InvalidArgument(_))
        ));
    }
}
