//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `app`, `export` und der
//! Binary gemeinsam genutzt wird.

pub mod options;

pub use options::RoadOptions;
pub use options::{APPEND_SPACING, WIDTH_MAX};
