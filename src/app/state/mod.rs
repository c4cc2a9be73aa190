//! Application State: Szene, Modus, Drag-Zustand, History.

mod app_state;
mod editor;

pub use app_state::AppState;
pub use editor::{DragState, EditorMode, EditorModeState};
