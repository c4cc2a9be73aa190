//! Handler für Wegpunkt-, Rechteck- und Pfad-Editing inklusive
//! Drag/Resize-Lifecycle.

use glam::Vec2;

use crate::app::events::{EditorEvent, Notifier};
use crate::app::history::HistoryEntry;
use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::{Constraint, ConstraintHandle, KeepKind};
use crate::shared::distance_point_to_polyline;

/// Hängt einen Wegpunkt an und zeichnet die Erstellung in der History auf.
pub fn add_waypoint(state: &mut AppState, notifier: &mut dyn Notifier, pos: Vec2) {
    let waypoint = state.scene.add_waypoint(pos);
    state.history.record(HistoryEntry::Waypoint(waypoint));
    let count = state.waypoint_count();
    log::info!("Wegpunkt {} erstellt ({:.0},{:.0})", count, pos.x, pos.y);
    notifier.notify(EditorEvent::WaypointAdded { count });
}

/// Greift den nächsten Wegpunkt unter dem Pointer. Kein Treffer: No-Op.
pub fn begin_waypoint_drag(state: &mut AppState, pos: Vec2) {
    let radius = state.options.waypoint_pick_radius_px;
    if let Some(index) = state.scene.hit_test_waypoint(pos, radius) {
        state.editor.drag = DragState::MoveWaypoint { index };
    }
}

/// Führt den gegriffenen Wegpunkt nach.
pub fn update_waypoint_drag(state: &mut AppState, pos: Vec2) {
    if let DragState::MoveWaypoint { index } = state.editor.drag {
        state.scene.move_waypoint(index, pos);
    }
}

/// Beendet den Wegpunkt-Drag.
pub fn end_waypoint_drag(state: &mut AppState) {
    state.editor.drag = DragState::Idle;
}

/// Beginnt ein Rechteck am Ankerpunkt.
pub fn begin_rect_draw(state: &mut AppState, pos: Vec2) {
    state.scene.start_rect(pos);
    state.editor.drag = DragState::DrawRect;
}

/// Führt die Gegenecke des unfertigen Rechtecks nach.
pub fn update_rect_draw(state: &mut AppState, pos: Vec2) {
    state.scene.update_rect(pos);
}

/// Schließt das Rechteck ab und zeichnet die Erstellung auf.
pub fn finish_rect_draw(state: &mut AppState, notifier: &mut dyn Notifier, pos: Vec2) {
    state.editor.drag = DragState::Idle;
    let Some(keep) = state.editor.mode.rect_keep() else {
        state.scene.cancel_pending();
        return;
    };
    let min = state.options.rect_min_create_px;
    if let Some(constraint) = state.scene.finish_rect(pos, keep, min) {
        state.history.record(HistoryEntry::Constraint(constraint));
        let count = state.constraint_count();
        log::info!("Rechteck-Constraint {} erstellt ({:?})", count, keep);
        notifier.notify(EditorEvent::ConstraintAdded { count });
    }
}

/// Hängt einen Punkt an den unfertigen Pfad an.
pub fn append_path_point(state: &mut AppState, pos: Vec2) {
    state.scene.append_path_point(pos);
}

/// Committet den unfertigen Pfad als Korridor der gegebenen Keep-Art.
/// Weniger als 2 Punkte: stillschweigend verwerfen.
pub fn commit_pending_path(state: &mut AppState, notifier: &mut dyn Notifier, keep: KeepKind) {
    let width = state.options.corridor_default_width_norm;
    match state.scene.finalize_path_corridor(keep, width) {
        Some(constraint) => {
            state.history.record(HistoryEntry::Constraint(constraint));
            let count = state.constraint_count();
            log::info!("Pfad-Korridor {} erstellt ({:?})", count, keep);
            notifier.notify(EditorEvent::ConstraintAdded { count });
        }
        None => log::debug!("Pfad mit <2 Punkten verworfen"),
    }
}

/// Committet den unfertigen Pfad im aktuellen Pfad-Modus (Enter), ohne den
/// Modus zu verlassen.
pub fn finalize_pending_path(state: &mut AppState, notifier: &mut dyn Notifier) {
    if let Some(keep) = state.editor.mode.path_keep() {
        commit_pending_path(state, notifier, keep);
    }
}

/// Sucht das oberste Handle unter dem Pointer und startet den passenden
/// Resize-Drag mit unveränderlichem Start-Snapshot. Kein Treffer: No-Op.
pub fn begin_resize_drag(state: &mut AppState, pos: Vec2) {
    let margin = state.options.handle_margin_px;
    let vertex_radius = state.options.vertex_pick_radius_px;
    let Some((index, handle)) = state.scene.hit_test_constraints(pos, margin, vertex_radius)
    else {
        return;
    };

    match handle {
        ConstraintHandle::Rect(rect_handle) => {
            let Some(Constraint::Rect(r)) = state.scene.constraints.get(index) else {
                return;
            };
            state.editor.drag = DragState::ResizeRect {
                index,
                handle: rect_handle,
                start: r.rect,
                origin_px: pos,
            };
        }
        ConstraintHandle::CorridorVertex(vertex) => {
            state.editor.drag = DragState::ResizeCorridorVertex { index, vertex };
        }
        ConstraintHandle::CorridorWidth => {
            let Some(Constraint::Corridor(c)) = state.scene.constraints.get(index) else {
                return;
            };
            let centerline = c.points_px(state.scene.viewport());
            state.editor.drag = DragState::ResizeCorridorWidth {
                index,
                start_width: c.width,
                origin_dist_px: distance_point_to_polyline(pos, &centerline),
            };
        }
    }
}

/// Führt das aktive Resize mit dem kumulativen Delta seit Drag-Beginn nach.
pub fn update_resize_drag(state: &mut AppState, pos: Vec2) {
    let viewport = state.scene.viewport();
    match state.editor.drag.clone() {
        DragState::ResizeRect {
            index,
            handle,
            start,
            origin_px,
        } => {
            let delta_norm = (pos - origin_px) / viewport;
            let min = state.options.rect_min_resize_px;
            state.scene.resize_rect(index, handle, start, delta_norm, min);
        }
        DragState::ResizeCorridorVertex { index, vertex } => {
            state.scene.resize_corridor_vertex(index, vertex, pos);
        }
        DragState::ResizeCorridorWidth {
            index,
            start_width,
            origin_dist_px,
        } => {
            let Some(Constraint::Corridor(c)) = state.scene.constraints.get(index) else {
                return;
            };
            let centerline = c.points_px(viewport);
            let dist = distance_point_to_polyline(pos, &centerline);
            // Halbbreiten-Delta am Rand → volle Breite wächst doppelt.
            let delta_norm = (dist - origin_dist_px) * 2.0 / viewport.x;
            let min = state.options.corridor_min_width_norm;
            state
                .scene
                .resize_corridor_width(index, start_width, delta_norm, min);
        }
        DragState::Idle | DragState::MoveWaypoint { .. } | DragState::DrawRect => {}
    }
}

/// Beendet den Resize-Drag.
pub fn end_resize_drag(state: &mut AppState) {
    state.editor.drag = DragState::Idle;
}

/// Leert Szene und History.
pub fn clear_all(state: &mut AppState, notifier: &mut dyn Notifier) {
    state.scene.clear_all();
    state.history.clear();
    state.editor.drag = DragState::Idle;
    log::info!("Szene und History geleert");
    notifier.notify(EditorEvent::WaypointsCleared);
    notifier.notify(EditorEvent::ConstraintsCleared);
    notifier.notify(EditorEvent::UndoRedoState {
        waypoint_count: 0,
        constraint_count: 0,
        can_undo: false,
        can_redo: false,
        was_undo: false,
        was_redo: false,
    });
}

/// Setzt die Standard-Korridorbreite (normalisiert) für neue Pfade.
pub fn set_corridor_default_width(state: &mut AppState, width_norm: f32) {
    if width_norm <= 0.0 {
        log::warn!("Ungültige Korridorbreite ignoriert: {}", width_norm);
        return;
    }
    state.options.corridor_default_width_norm = width_norm;
    log::info!("Standard-Korridorbreite: {:.4}", width_norm);
}
