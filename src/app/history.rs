//! Lineare Undo/Redo-History über Szenen-Snapshots.
//!
//! Jeder Snapshot ist ein `Arc<Scene>`; Mutationen am Arbeitszustand
//! laufen über Copy-on-Write (`Arc::make_mut`), sodass ein Push O(1)
//! bleibt und ältere Snapshots unberührt lässt. Sicht, Selektion und
//! In-Arbeit-Elemente sind bewusst nicht Teil der History.

use std::sync::Arc;

use crate::core::Scene;

/// Snapshot-Liste mit Cursor. Der Cursor zeigt immer auf den Snapshot,
/// der dem aktuellen Szenenzustand entspricht; Index 0 ist die leere
/// Ausgangsszene.
pub struct SceneHistory {
    snapshots: Vec<Arc<Scene>>,
    cursor: usize,
}

impl Default for SceneHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHistory {
    /// Beginnt mit genau einem Snapshot der leeren Szene, damit das erste
    /// Undo auf die leere Fläche zurückführt.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Arc::new(Scene::new())],
            cursor: 0,
        }
    }

    /// Hängt einen neuen Snapshot hinter dem Cursor an und verwirft dabei
    /// jeden Redo-Zweig. Lineare History: nach Undo + neuer Änderung gibt
    /// es kein Redo mehr.
    pub fn push(&mut self, scene: Arc<Scene>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Bewegt den Cursor einen Schritt zurück und gibt den dort liegenden
    /// Snapshot zurück; None am Anfang der History (No-op).
    pub fn undo(&mut self) -> Option<Arc<Scene>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Bewegt den Cursor einen Schritt vor; None am Ende der History.
    pub fn redo(&mut self) -> Option<Arc<Scene>> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Anzahl Snapshots (inklusive Ausgangsszene).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        // Per Konstruktion nie leer
        false
    }
}
