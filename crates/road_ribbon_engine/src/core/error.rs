//! Fehlertypen der Engine.

use thiserror::Error;

/// Fehler beim Bearbeiten oder Triangulieren einer Straße.
///
/// Geometrie-Mathematik wirft nie; degenerierte Eingaben liefern NaN/∞.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadError {
    /// Ungültiger Selektor (z.B. Handle-Diskriminante außerhalb des Bereichs).
    /// Signalisiert einen Programmierfehler, keinen Benutzerfehler.
    #[error("ungültiges Argument: {0}")]
    InvalidArgument(String),
    /// Eine Straße braucht mindestens zwei Kontrollpunkte
    #[error("mindestens 2 Kontrollpunkte erforderlich, vorhanden: {count}")]
    TooFewPoints {
        /// Anzahl Punkte, die nach der Operation übrig wären
        count: usize,
    },
    /// `steps_per_segment` muss ≥ 1 sein
    #[error("ungültige Schrittzahl pro Segment: {0} (mindestens 1)")]
    InvalidStepCount(usize),
}
