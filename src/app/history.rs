use road_ribbon_engine::Road;
use std::sync::Arc;

/// Snapshot der Straße für Undo/Redo.
///
/// Nutzt Arc-Clone (Copy-on-Write): das Erstellen ist O(1), der eigentliche
/// Klon der Punktliste passiert erst beim nächsten `Arc::make_mut()`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Straße zum Zeitpunkt des Snapshots
    pub road: Arc<Road>,
    /// Beschreibung der Aktion, die nach dem Snapshot ausgeführt wurde
    pub label: &'static str,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn new(road: &Arc<Road>, label: &'static str) -> Self {
        Self {
            road: Arc::clone(road),
            label,
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Beschreibung des nächsten Undo-Schritts (für Menüeinträge).
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(|s| s.label)
    }

    /// Beschreibung des nächsten Redo-Schritts.
    pub fn redo_label(&self) -> Option<&'static str> {
        self.redo_stack.last().map(|s| s.label)
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
