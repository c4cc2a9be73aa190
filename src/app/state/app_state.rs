//! Hauptzustand der Anwendung.

use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::SceneModel;
use crate::shared::options::HISTORY_MAX_DEPTH;
use crate::shared::EditorOptions;

use super::{DragState, EditorModeState};

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Szene (Wegpunkte, Constraints, unfertige Formen)
    pub scene: SceneModel,
    /// Editor-Modus und Drag-Zustand
    pub editor: EditorModeState,
    /// Undo/Redo-History (Entity-granular)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Radien, Margen, Minimalgrößen, Farben)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            scene: SceneModel::new(),
            editor: EditorModeState::new(),
            history: EditHistory::new_with_capacity(HISTORY_MAX_DEPTH),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Wegpunkte zurück (für Events/UI).
    pub fn waypoint_count(&self) -> usize {
        self.scene.waypoints.len()
    }

    /// Gibt die Anzahl der Constraints zurück (für Events/UI).
    pub fn constraint_count(&self) -> usize {
        self.scene.constraints.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Ob gerade ein Drag/Resize aktiv ist.
    pub fn drag_active(&self) -> bool {
        self.editor.drag != DragState::Idle
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
