//! Road-Ribbon (Headless).
//!
//! Baut eine Straße aus den Optionen neben der Binary, trianguliert sie und
//! exportiert das Mesh. Aufruf: `road-ribbon [AUSGABE.obj|AUSGABE.json]`.

use anyhow::Result;
use road_ribbon_editor::{build_session, export_to_file, RoadOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Road-Ribbon v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = RoadOptions::config_path();
    let options = RoadOptions::load_from_file(&config_path);

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&options.output_path));

    let session = build_session(options)?;
    export_to_file(session.mesh(), &output)?;
    Ok(())
}
