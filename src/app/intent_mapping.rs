//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Hier sitzt das Routing der Eingabe-State-Machine: Roh-Pointer-Events
//! werden abhängig von Modus und aktivem Drag in Commands übersetzt.
//! Das Mapping ist rein (keine Mutation, kein Logging) und total: Intents
//! ohne Bedeutung im aktuellen Zustand ergeben eine leere Command-Liste.


use super::state::{DragState, EditorMode};
use super::{AppCommand, AppIntent, AppState};
use crate::app::events::EditorKey;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::PointerDown { pos } => map_pointer_down(state, pos),
        AppIntent::PointerMoved { pos } => map_pointer_moved(state, pos),
        AppIntent::PointerUp { pos } => map_pointer_up(state, pos),
        AppIntent::KeyPressed { key } => map_key(state, key),
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewport { size }],
        AppIntent::FrameTick => vec![AppCommand::ReplayFrame],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::TrajectorySet { samples } => vec![AppCommand::SetTrajectory { samples }],
        AppIntent::ReplayStartRequested => vec![AppCommand::StartReplay],
        AppIntent::ReplayStopRequested => vec![AppCommand::StopReplay],
        AppIntent::ReplaySeekRequested { time } => vec![AppCommand::SeekReplay { time }],
        AppIntent::CorridorDefaultWidthChanged { width_norm } => {
            vec![AppCommand::SetCorridorDefaultWidth { width_norm }]
        }
    }
}

/// Pointer-Down: startet je nach Modus Erstellung oder Grab.
fn map_pointer_down(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    // Ein zweiter Grab während eines aktiven Drags ist ausgeschlossen.
    if state.drag_active() {
        return vec![];
    }

    match state.editor.mode {
        EditorMode::Passthrough | EditorMode::Replay => vec![],
        EditorMode::AddWaypoint => vec![AppCommand::AddWaypointAt { pos }],
        EditorMode::MoveWaypoint => vec![AppCommand::BeginWaypointDrag { pos }],
        EditorMode::DrawRectKeepIn | EditorMode::DrawRectKeepOut => {
            vec![AppCommand::BeginRectDraw { pos }]
        }
        EditorMode::DrawPathKeepIn | EditorMode::DrawPathKeepOut => {
            vec![AppCommand::AppendPathPoint { pos }]
        }
        EditorMode::ResizeHandle => vec![AppCommand::BeginResizeDrag { pos }],
    }
}

/// Pointer-Move: nur der aktive Drag konsumiert Bewegungen.
fn map_pointer_moved(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    match state.editor.drag {
        DragState::Idle => vec![],
        DragState::MoveWaypoint { .. } => vec![AppCommand::UpdateWaypointDrag { pos }],
        DragState::DrawRect => vec![AppCommand::UpdateRectDraw { pos }],
        DragState::ResizeRect { .. }
        | DragState::ResizeCorridorVertex { .. }
        | DragState::ResizeCorridorWidth { .. } => {
            vec![AppCommand::UpdateResizeDrag { pos }]
        }
    }
}

/// Pointer-Up: beendet den aktiven Drag.
fn map_pointer_up(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    match state.editor.drag {
        DragState::Idle => vec![],
        DragState::MoveWaypoint { .. } => vec![AppCommand::EndWaypointDrag],
        DragState::DrawRect => vec![AppCommand::FinishRectDraw { pos }],
        DragState::ResizeRect { .. }
        | DragState::ResizeCorridorVertex { .. }
        | DragState::ResizeCorridorWidth { .. } => vec![AppCommand::EndResizeDrag],
    }
}

/// Tastatur: Enter committet den Pfad, Escape verlässt den Modus.
fn map_key(state: &AppState, key: EditorKey) -> Vec<AppCommand> {
    match key {
        EditorKey::Enter => match state.editor.mode {
            EditorMode::DrawPathKeepIn | EditorMode::DrawPathKeepOut => {
                vec![AppCommand::FinalizePendingPath]
            }
            _ => vec![],
        },
        EditorKey::Escape => {
            if state.editor.mode == EditorMode::Passthrough {
                vec![]
            } else {
                vec![AppCommand::SetMode {
                    mode: EditorMode::Passthrough,
                }]
            }
        }
    }
}
