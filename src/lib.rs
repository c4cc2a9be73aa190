//! Cursor-Trajektorien-Editor Library.
//! Editor-Kern, Replay-Engine und Wire-Layer als Library exportiert für
//! Tests und Einbettung in einen Host.

pub mod app;
pub mod core;
pub mod protocol;
pub mod replay;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, EditorEvent, EditorKey, EditorMode,
    HistoryEntry, Notifier, NullNotifier,
};
pub use crate::core::{
    Constraint, ConstraintHandle, CorridorConstraint, KeepKind, NormRect, RectConstraint,
    SceneModel, Trajectory, TrajectorySample, Waypoint,
};
pub use protocol::{parse_trajectory_json, StateSnapshot};
pub use replay::{
    Clock, HitTargetResolver, InputEventSink, LowLevelInputInjector, PointerEventKind,
    ReplayEngine, StepOutcome, SystemClock, TargetId,
};
pub use shared::{EditorOptions, RenderScene};
