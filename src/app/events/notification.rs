//! Nach außen gemeldete Zustandsänderungen (Push an den Controller/Host).

use serde::Serialize;

use crate::app::state::EditorMode;

/// Event an den externen Controller (Panel, Host-Prozess).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Modus gewechselt
    ModeChanged {
        mode: EditorMode,
        captures_input: bool,
    },
    /// Wegpunkt angehängt (neue Gesamtzahl)
    WaypointAdded { count: usize },
    /// Alle Wegpunkte entfernt
    WaypointsCleared,
    /// Constraint erstellt (neue Gesamtzahl)
    ConstraintAdded { count: usize },
    /// Alle Constraints entfernt
    ConstraintsCleared,
    /// Undo/Redo-Zustand nach einer History-Operation
    UndoRedoState {
        waypoint_count: usize,
        constraint_count: usize,
        can_undo: bool,
        can_redo: bool,
        was_undo: bool,
        was_redo: bool,
    },
    /// Trajektorie übernommen (Sample-Anzahl)
    TrajectoryLoaded { count: usize },
    /// Replay-Fortschritt (pro Frame)
    ReplayProgress {
        current_index: usize,
        total: usize,
        elapsed: f64,
    },
    /// Replay vollständig abgespielt (genau einmal pro Start)
    ReplayComplete,
    /// Replay gestoppt
    ReplayStopped,
}

/// Push-Kanal zum externen Controller. Fire-and-forget: Implementierungen
/// dürfen nicht blockieren und müssen eigene Fehler selbst schlucken;
/// ein Notifier-Ausfall darf lokale Mutationen nie korrumpieren.
pub trait Notifier {
    fn notify(&mut self, event: EditorEvent);
}

/// Notifier ohne Empfänger (Tests, Standalone-Betrieb).
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: EditorEvent) {}
}
