//! Bearbeitungs-Commands auf einer Straße.

use glam::Vec3;
use road_ribbon_engine::{ContinuityMode, HandleKind};

/// Eine einzelne Bearbeitung, wie sie ein Editor/Inspector auslöst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoadCommand {
    /// Punkt am Ende anhängen
    AddPoint,
    /// Punkt nach `index` einfügen
    InsertPointAfter { index: usize },
    /// Punkt entfernen (mindestens zwei bleiben erhalten)
    RemovePoint { index: usize },
    /// Griff auf absolute Position verschieben
    MoveHandle {
        index: usize,
        kind: HandleKind,
        location: Vec3,
    },
    /// Tangenten-Modus ändern
    SetMode { index: usize, mode: ContinuityMode },
    /// Breite ändern (wird auf `[0, width_max]` begrenzt)
    SetWidth { index: usize, width: f32 },
    /// Tangenten eines Punkts aus den Nachbarn ableiten
    RecalculateTangents { index: usize },
    /// Tangenten aller Punkte ableiten
    RecalculateAll,
    /// Mesh neu generieren
    GenerateGeometry,
    /// Standard-Straße wiederherstellen
    Reset,
}

impl RoadCommand {
    /// Beschreibung für die Undo-Historie.
    pub fn label(&self) -> &'static str {
        match self {
            RoadCommand::AddPoint => "add waypoint",
            RoadCommand::InsertPointAfter { .. } => "insert waypoint",
            RoadCommand::RemovePoint { .. } => "remove waypoint",
            RoadCommand::MoveHandle { kind, .. } => match kind {
                HandleKind::Position => "move point",
                HandleKind::TangentIn => "change incoming tangent",
                HandleKind::TangentOut => "change outgoing tangent",
                HandleKind::Normal => "change normal",
            },
            RoadCommand::SetMode { .. } => "change point mode",
            RoadCommand::SetWidth { .. } => "change point width",
            RoadCommand::RecalculateTangents { .. } => "recalculate waypoint",
            RoadCommand::RecalculateAll => "recalculate all waypoints",
            RoadCommand::GenerateGeometry => "generate geometry",
            RoadCommand::Reset => "reset road",
        }
    }

    /// Punkt-Index, auf den sich der Command bezieht.
    pub fn target_index(&self) -> Option<usize> {
        match *self {
            RoadCommand::InsertPointAfter { index }
            | RoadCommand::RemovePoint { index }
            | RoadCommand::MoveHandle { index, .. }
            | RoadCommand::SetMode { index, .. }
            | RoadCommand::SetWidth { index, .. }
            | RoadCommand::RecalculateTangents { index } => Some(index),
            RoadCommand::AddPoint
            | RoadCommand::RecalculateAll
            | RoadCommand::GenerateGeometry
            | RoadCommand::Reset => None,
        }
    }
}
