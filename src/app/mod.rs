//! Application-Layer: Controller, State, Events, Handler und History.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorEvent, EditorKey, Notifier, NullNotifier};
pub use history::{EditHistory, HistoryEntry};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState, EditorMode, EditorModeState};
