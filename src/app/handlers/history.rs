//! Handler für Undo/Redo-Operationen.

use crate::app::events::{EditorEvent, Notifier};
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden, und meldet den
/// resultierenden History-Zustand nach außen.
pub fn undo(state: &mut AppState, notifier: &mut dyn Notifier) {
    let was_undo = state.history.undo(&mut state.scene);
    if was_undo {
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    notify_history_state(state, notifier, was_undo, false);
}

/// Führt einen Redo-Schritt aus, falls vorhanden, und meldet den
/// resultierenden History-Zustand nach außen.
pub fn redo(state: &mut AppState, notifier: &mut dyn Notifier) {
    let was_redo = state.history.redo(&mut state.scene);
    if was_redo {
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    notify_history_state(state, notifier, false, was_redo);
}

/// Meldet Zählerstände und Undo/Redo-Flags nach jeder History-Operation.
fn notify_history_state(
    state: &AppState,
    notifier: &mut dyn Notifier,
    was_undo: bool,
    was_redo: bool,
) {
    notifier.notify(EditorEvent::UndoRedoState {
        waypoint_count: state.waypoint_count(),
        constraint_count: state.constraint_count(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
        was_undo,
        was_redo,
    });
}
