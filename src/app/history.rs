//! Undo/Redo über heterogene Entitäten (Wegpunkte und Constraints).
//!
//! Entity-granulare LIFO-History: aufgezeichnet werden nur Erstellungen.
//! Weil beide Collections append-only sind und nie umsortiert werden,
//! entspricht der jüngste History-Eintrag immer dem letzten Element der
//! jeweiligen Collection; Undo darf deshalb einfach vom Ende poppen.

use crate::core::{Constraint, SceneModel, Waypoint};

/// Ein History-Eintrag hält den vollen Wert, keinen Index und keine
/// Referenz. Beim Undo wandert der *live* (ggf. durch Move/Resize
/// mutierte) Wert auf den Redo-Stack, damit Redo die Entität bit-identisch
/// wiederherstellt, unabhängig von späteren Viewport-Änderungen.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    Waypoint(Waypoint),
    Constraint(Constraint),
}

/// Append-only Undo/Redo-Manager.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
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

    /// Zeichnet eine Erstellung auf. Jede neue Erstellung invalidiert den
    /// Redo-Stack.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Entfernt die zuletzt erstellte Entität aus der Szene und legt ihren
    /// Live-Wert auf den Redo-Stack. `false` wenn nichts rückgängig zu
    /// machen ist.
    pub fn undo(&mut self, scene: &mut SceneModel) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };

        match entry {
            HistoryEntry::Waypoint(_) => {
                let Some(live) = scene.waypoints.pop() else {
                    log::warn!("Undo: History und Szene inkonsistent (Wegpunkt fehlt)");
                    return false;
                };
                self.redo_stack.push(HistoryEntry::Waypoint(live));
            }
            HistoryEntry::Constraint(_) => {
                let Some(live) = scene.constraints.pop() else {
                    log::warn!("Undo: History und Szene inkonsistent (Constraint fehlt)");
                    return false;
                };
                self.redo_stack.push(HistoryEntry::Constraint(live));
            }
        }
        true
    }

    /// Fügt den gespeicherten Snapshot-Wert wieder in die Szene ein (nicht
    /// einen neu abgeleiteten) und legt den Eintrag zurück auf den
    /// Undo-Stack. `false` wenn nichts wiederherzustellen ist.
    pub fn redo(&mut self, scene: &mut SceneModel) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };

        match &entry {
            HistoryEntry::Waypoint(waypoint) => scene.waypoints.push(*waypoint),
            HistoryEntry::Constraint(constraint) => scene.constraints.push(constraint.clone()),
        }
        self.undo_stack.push(entry);
        true
    }

    /// Leert beide Stacks (Bulk-Clear der Szene).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
