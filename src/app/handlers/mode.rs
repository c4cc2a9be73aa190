//! Handler für Moduswechsel der Eingabe-State-Machine.

use crate::app::events::{EditorEvent, Notifier};
use crate::app::state::{DragState, EditorMode};
use crate::app::AppState;

use super::editing;

/// Wechselt den Editor-Modus.
///
/// Beim Verlassen eines Pfad-Modus wird ein unfertiger Pfad mit ≥2 Punkten
/// als Korridor der passenden Keep-Art committet; mit weniger Punkten wird
/// er stillschweigend verworfen. Andere unfertige Formen und ein aktiver
/// Drag werden abgebrochen.
pub fn set_mode(state: &mut AppState, notifier: &mut dyn Notifier, mode: EditorMode) {
    let old = state.editor.mode;
    if old == mode {
        log::debug!("Moduswechsel: {:?} bereits aktiv", mode);
        return;
    }

    if let Some(keep) = old.path_keep() {
        editing::commit_pending_path(state, notifier, keep);
    }

    state.editor.drag = DragState::Idle;
    state.scene.cancel_pending();
    state.editor.mode = mode;

    log::info!("Editor-Modus: {:?}", mode);
    notifier.notify(EditorEvent::ModeChanged {
        mode,
        captures_input: mode.captures_input(),
    });
}
