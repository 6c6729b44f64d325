//! Headless-Build: Optionen → Straße → Tangenten → Mesh.

use super::{RoadCommand, RoadSession};
use crate::shared::RoadOptions;
use anyhow::{Context, Result};

/// Baut eine Straße gemäß `options` und generiert ihr Mesh.
///
/// Startet mit der Standard-Straße, hängt `extra_points` Punkte an, leitet bei
/// `recalculate_on_build` alle Tangenten neu ab und trianguliert.
pub fn build_session(options: RoadOptions) -> Result<RoadSession> {
    let extra_points = options.extra_points;
    let recalculate = options.recalculate_on_build;
    let mut session = RoadSession::new(options);

    for _ in 0..extra_points {
        session.apply(RoadCommand::AddPoint)?;
    }
    if recalculate {
        session.apply(RoadCommand::RecalculateAll)?;
    }
    session
        .apply(RoadCommand::GenerateGeometry)
        .context("Mesh-Generierung fehlgeschlagen")?;

    log::info!(
        "Straße gebaut: {} Punkte, {} Vertices, {} Dreiecke",
        session.road().point_count(),
        session.mesh().vertex_count(),
        session.mesh().triangle_count()
    );
    Ok(session)
}
