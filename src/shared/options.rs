//! Zentrale Konfiguration für den Road-Ribbon-Editor.
//!
//! `RoadOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use road_ribbon_engine::DEFAULT_STEPS_PER_SEGMENT;
use serde::{Deserialize, Serialize};

pub use road_ribbon_engine::core::road::APPEND_SPACING;

// ── Spline ──────────────────────────────────────────────────────────

/// Maximale Breite, die der Editor pro Punkt zulässt.
pub const WIDTH_MAX: f32 = 5.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 100;

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Ausgabedatei des Headless-Tools.
pub const OUTPUT_PATH: &str = "road.obj";

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `road_ribbon_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Abtastschritte pro Segment bei der Mesh-Generierung (≥ 1)
    pub steps_per_segment: usize,
    /// Abstand beim Anhängen neuer Punkte
    pub append_spacing: f32,
    /// Obergrenze für Punktbreiten
    #[serde(default = "default_width_max")]
    pub width_max: f32,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Tangenten nach Verschieben eines Punkts automatisch neu ableiten
    #[serde(default)]
    pub auto_tangents: bool,
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Headless-Build ──────────────────────────────────────────
    /// Zusätzlich angehängte Punkte nach der Standard-Straße
    #[serde(default)]
    pub extra_points: usize,
    /// Vor der Generierung alle Tangenten neu berechnen
    #[serde(default = "default_true")]
    pub recalculate_on_build: bool,
    /// Zieldatei für den Mesh-Export (`.obj` oder `.json`)
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for RoadOptions {
    fn default() -> Self {
        Self {
            steps_per_segment: DEFAULT_STEPS_PER_SEGMENT,
            append_spacing: APPEND_SPACING,
            width_max: WIDTH_MAX,
            auto_tangents: false,
            history_depth: HISTORY_DEPTH,
            extra_points: 0,
            recalculate_on_build: true,
            output_path: OUTPUT_PATH.to_string(),
        }
    }
}

/// Serde-Default für `width_max` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_width_max() -> f32 {
    WIDTH_MAX
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> String {
    OUTPUT_PATH.to_string()
}

impl RoadOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Werte aus der Datei durch Standardwerte.
    fn sanitized(mut opts: Self) -> Self {
        if !opts.width_max.is_finite() || opts.width_max < 0.0 {
            log::warn!(
                "width_max = {} ungültig, verwende Standardwert {}",
                opts.width_max,
                WIDTH_MAX
            );
            opts.width_max = WIDTH_MAX;
        }
        opts
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road_ribbon_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_ribbon_editor.toml")
    }

    /// Begrenzt eine Breite auf `[0, width_max]`.
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.max(0.0).min(self.width_max.max(0.0))
    }
}
