//! Controller-Flows: Undo/Redo über heterogene Entitäten.

use cursor_trajectory_editor::{AppIntent, EditorEvent, EditorMode};
use glam::Vec2;

use super::{drive, editing_controller};

fn last_undo_redo_state(events: &[EditorEvent]) -> (usize, usize, bool, bool, bool, bool) {
    events
        .iter()
        .rev()
        .find_map(|e| match e {
            EditorEvent::UndoRedoState {
                waypoint_count,
                constraint_count,
                can_undo,
                can_redo,
                was_undo,
                was_redo,
            } => Some((
                *waypoint_count,
                *constraint_count,
                *can_undo,
                *can_redo,
                *was_undo,
                *was_redo,
            )),
            _ => None,
        })
        .expect("UndoRedoState-Event erwartet")
}

#[test]
fn undo_removes_most_recent_entity_across_kinds() {
    let (mut controller, mut state, _events) = editing_controller();

    // Wegpunkt, dann Rechteck
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::DrawRectKeepIn,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(200.0, 200.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(400.0, 300.0),
        },
    );

    assert_eq!(state.waypoint_count(), 1);
    assert_eq!(state.constraint_count(), 1);

    // Erstes Undo entfernt das Rechteck (jüngste Erstellung), nicht den Wegpunkt
    drive(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.waypoint_count(), 1);
    assert_eq!(state.constraint_count(), 0);

    drive(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.waypoint_count(), 0);
}

#[test]
fn redo_restores_mutated_entity_bit_identically() {
    let (mut controller, mut state, _events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
        },
    );

    // Nachträglich verschieben (nicht history-getrackt)
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::MoveWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(102.0, 101.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(640.0, 360.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(640.0, 360.0),
        },
    );
    let mutated = state.scene.waypoints[0];

    drive(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.waypoint_count(), 0);

    drive(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.scene.waypoints[0], mutated);
}

#[test]
fn creation_after_undo_clears_redo() {
    let (mut controller, mut state, events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(300.0, 300.0),
        },
    );
    assert!(!state.can_redo());

    // Redo auf leerem Stack: No-Op, Event meldet was_redo = false
    drive(&mut controller, &mut state, AppIntent::RedoRequested);
    let (waypoints, _constraints, can_undo, can_redo, was_undo, was_redo) =
        last_undo_redo_state(&events.borrow());
    assert_eq!(waypoints, 1);
    assert!(can_undo);
    assert!(!can_redo);
    assert!(!was_undo);
    assert!(!was_redo);
}

#[test]
fn undo_event_reports_counts_and_flags() {
    let (mut controller, mut state, events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(&mut controller, &mut state, AppIntent::UndoRequested);

    let (waypoints, constraints, can_undo, can_redo, was_undo, was_redo) =
        last_undo_redo_state(&events.borrow());
    assert_eq!(waypoints, 0);
    assert_eq!(constraints, 0);
    assert!(!can_undo);
    assert!(can_redo);
    assert!(was_undo);
    assert!(!was_redo);
}

#[test]
fn clear_all_empties_scene_history_and_notifies() {
    let (mut controller, mut state, events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(&mut controller, &mut state, AppIntent::ClearAllRequested);

    assert_eq!(state.waypoint_count(), 0);
    assert!(!state.can_undo());
    assert!(!state.can_redo());

    let recorded = events.borrow();
    assert!(recorded
        .iter()
        .any(|e| matches!(e, EditorEvent::WaypointsCleared)));
    assert!(recorded
        .iter()
        .any(|e| matches!(e, EditorEvent::ConstraintsCleared)));
}
