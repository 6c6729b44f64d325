//! Bearbeitungssitzung: Straße, Optionen und Undo-Historie.

use super::history::{EditHistory, Snapshot};
use super::RoadCommand;
use crate::shared::RoadOptions;
use anyhow::{bail, Result};
use road_ribbon_engine::{HandleKind, Road, RoadMesh};
use std::sync::Arc;

/// Headless-Gegenstück zum Inspector: führt Commands aus und zeichnet sie auf.
#[derive(Debug)]
pub struct RoadSession {
    road: Arc<Road>,
    options: RoadOptions,
    history: EditHistory,
}

impl RoadSession {
    /// Neue Sitzung mit der Standard-Straße.
    pub fn new(options: RoadOptions) -> Self {
        Self::with_road(Road::new(), options)
    }

    /// Neue Sitzung für eine vorhandene Straße.
    pub fn with_road(road: Road, options: RoadOptions) -> Self {
        let history = EditHistory::new_with_capacity(options.history_depth);
        Self {
            road: Arc::new(road),
            options,
            history,
        }
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn mesh(&self) -> &RoadMesh {
        self.road.mesh()
    }

    pub fn options(&self) -> &RoadOptions {
        &self.options
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Führt einen Command aus.
    ///
    /// Vorbedingungen werden vor dem Snapshot geprüft: ein abgelehnter Command
    /// verändert weder Straße noch Historie.
    pub fn apply(&mut self, command: RoadCommand) -> Result<()> {
        self.check_preconditions(&command)?;
        self.history.record_snapshot(Snapshot::new(&self.road, command.label()));

        let options = &self.options;
        let road = Arc::make_mut(&mut self.road);
        match command {
            RoadCommand::AddPoint => road.add_point_with_spacing(options.append_spacing),
            RoadCommand::InsertPointAfter { index } => road.insert_point_after(index),
            RoadCommand::RemovePoint { index } => {
                road.remove_point(index)?;
            }
            RoadCommand::MoveHandle {
                index,
                kind,
                location,
            } => road.move_handle(index, kind, location, options.auto_tangents),
            RoadCommand::SetMode { index, mode } => road.point_mut(index).set_mode(mode),
            RoadCommand::SetWidth { index, width } => {
                road.point_mut(index).set_width(options.clamp_width(width));
            }
            RoadCommand::RecalculateTangents { index } => road.recalculate_tangents(index),
            RoadCommand::RecalculateAll => road.recalculate_all_tangents(),
            RoadCommand::GenerateGeometry => {
                road.generate_geometry(options.steps_per_segment)?;
            }
            RoadCommand::Reset => road.reset(),
        }
        log::debug!("Command ausgeführt: {}", command.label());
        Ok(())
    }

    fn check_preconditions(&self, command: &RoadCommand) -> Result<()> {
        let count = self.road.point_count();
        if let Some(index) = command.target_index() {
            if index >= count {
                bail!(
                    "{}: Punkt-Index {} außerhalb (0..{})",
                    command.label(),
                    index,
                    count
                );
            }
        }
        match command {
            RoadCommand::RemovePoint { .. } if count <= 2 => {
                bail!("remove waypoint: Straße braucht mindestens 2 Punkte")
            }
            RoadCommand::GenerateGeometry if self.options.steps_per_segment == 0 => {
                bail!("generate geometry: steps_per_segment muss ≥ 1 sein")
            }
            RoadCommand::MoveHandle {
                kind: HandleKind::Normal,
                location,
                index,
            } if location.distance_squared(self.road[*index].position()) <= f32::EPSILON => {
                bail!("change normal: Normale darf nicht die Länge 0 haben")
            }
            _ => Ok(()),
        }
    }

    /// Macht den letzten Command rückgängig. Gibt `false` zurück wenn nichts vorhanden ist.
    pub fn undo(&mut self) -> bool {
        let label = self.history.undo_label().unwrap_or("undo");
        let current = Snapshot::new(&self.road, label);
        match self.history.pop_undo_with_current(current) {
            Some(prev) => {
                log::debug!("Undo: {}", prev.label);
                self.road = prev.road;
                true
            }
            None => false,
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Command wieder her.
    pub fn redo(&mut self) -> bool {
        let label = self.history.redo_label().unwrap_or("redo");
        let current = Snapshot::new(&self.road, label);
        match self.history.pop_redo_with_current(current) {
            Some(next) => {
                log::debug!("Redo: {}", next.label);
                self.road = next.road;
                true
            }
            None => false,
        }
    }
}
