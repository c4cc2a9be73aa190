//! Controller-Flows: Wegpunkte, Rechteck-Draw, Resize.

use cursor_trajectory_editor::{
    AppIntent, Constraint, DragState, EditorEvent, EditorMode, KeepKind,
};
use glam::Vec2;

use super::{drive, editing_controller};

#[test]
fn add_waypoints_in_call_order_with_events() {
    let (mut controller, mut state, events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::AddWaypoint,
        },
    );
    for (x, y) in [(100.0, 50.0), (500.0, 250.0), (900.0, 450.0)] {
        drive(
            &mut controller,
            &mut state,
            AppIntent::PointerDown {
                pos: Vec2::new(x, y),
            },
        );
    }

    assert_eq!(state.scene.waypoints.len(), 3);
    // Normalisierte Koordinaten = Pixel / Viewport zum Zeitpunkt des Klicks
    assert!((state.scene.waypoints[0].x_norm - 0.1).abs() < 1e-6);
    assert!((state.scene.waypoints[2].y_norm - 0.9).abs() < 1e-6);

    let recorded = events.borrow();
    let add_counts: Vec<usize> = recorded
        .iter()
        .filter_map(|e| match e {
            EditorEvent::WaypointAdded { count } => Some(*count),
            _ => None,
        })
        .collect();
    assert_eq!(add_counts, vec![1, 2, 3]);
}

#[test]
fn rect_draw_flow_creates_keep_out_constraint() {
    let (mut controller, mut state, events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::DrawRectKeepOut,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(300.0, 200.0),
        },
    );
    assert_eq!(state.editor.drag, DragState::DrawRect);

    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(150.0, 150.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(100.0, 100.0),
        },
    );

    assert_eq!(state.editor.drag, DragState::Idle);
    assert_eq!(state.scene.constraints.len(), 1);
    let Constraint::Rect(r) = &state.scene.constraints[0] else {
        panic!("Rechteck erwartet");
    };
    assert_eq!(r.keep, KeepKind::KeepOut);
    // Orientierung fixiert trotz Rückwärts-Drag
    assert!((r.rect.x - 0.1).abs() < 1e-5);
    assert!((r.rect.y - 0.2).abs() < 1e-5);

    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, EditorEvent::ConstraintAdded { count: 1 })));
}

#[test]
fn move_waypoint_drag_updates_position() {
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
            pos: Vec2::new(200.0, 200.0),
        },
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::MoveWaypoint,
        },
    );
    // Grab innerhalb des Pick-Radius
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(205.0, 198.0),
        },
    );
    assert_eq!(state.editor.drag, DragState::MoveWaypoint { index: 0 });

    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(400.0, 300.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(400.0, 300.0),
        },
    );

    assert_eq!(state.editor.drag, DragState::Idle);
    assert_eq!(state.scene.waypoints[0].x_px, 400.0);
    assert!((state.scene.waypoints[0].x_norm - 0.4).abs() < 1e-6);
}

#[test]
fn move_waypoint_miss_is_total_noop() {
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
            pos: Vec2::new(200.0, 200.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::MoveWaypoint,
        },
    );

    // Weit weg von jedem Wegpunkt: kein Grab, kein Fehler
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(800.0, 50.0),
        },
    );
    assert_eq!(state.editor.drag, DragState::Idle);

    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(850.0, 60.0),
        },
    );
    assert_eq!(state.scene.waypoints[0].x_px, 200.0);
}

#[test]
fn resize_se_drag_is_cumulative_and_clamped() {
    let (mut controller, mut state, _events) = editing_controller();

    // Rechteck 100..300 x 100..200 aufziehen
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
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(300.0, 200.0),
        },
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::ResizeHandle,
        },
    );
    // Grab an der Se-Ecke
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(300.0, 200.0),
        },
    );
    assert!(matches!(state.editor.drag, DragState::ResizeRect { .. }));

    // Mehrere Zwischen-Moves: nur das kumulative Delta zählt
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(500.0, 400.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(400.0, 250.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(400.0, 250.0),
        },
    );

    let Constraint::Rect(r) = &state.scene.constraints[0] else {
        panic!("Rechteck erwartet");
    };
    // 300 + (400-300) = 400px rechte Kante, 200 + 50 = 250px untere Kante
    assert!((r.rect.width * 1000.0 - 300.0).abs() < 1e-3);
    assert!((r.rect.height * 500.0 - 150.0).abs() < 1e-3);
    // Linke obere Ecke unverändert
    assert!((r.rect.x * 1000.0 - 100.0).abs() < 1e-3);
    assert!((r.rect.y * 500.0 - 100.0).abs() < 1e-3);
}

#[test]
fn resize_below_minimum_clamps_to_twenty_pixels() {
    let (mut controller, mut state, _events) = editing_controller();

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
            pos: Vec2::new(100.0, 100.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(300.0, 200.0),
        },
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::ResizeHandle,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(300.0, 200.0),
        },
    );
    // Se-Ecke weit über die linke obere Ecke hinausziehen
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(0.0, 0.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(0.0, 0.0),
        },
    );

    let Constraint::Rect(r) = &state.scene.constraints[0] else {
        panic!("Rechteck erwartet");
    };
    assert!((r.rect.width * 1000.0 - 20.0).abs() < 1e-3);
    assert!((r.rect.height * 500.0 - 20.0).abs() < 1e-3);
    // x,y (linke obere Ecke) bleiben stehen
    assert!((r.rect.x * 1000.0 - 100.0).abs() < 1e-3);
    assert!((r.rect.y * 500.0 - 100.0).abs() < 1e-3);
}

#[test]
fn corridor_vertex_drag_moves_single_vertex() {
    let (mut controller, mut state, _events) = editing_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::DrawPathKeepIn,
        },
    );
    for pos in [Vec2::new(100.0, 400.0), Vec2::new(600.0, 400.0)] {
        drive(&mut controller, &mut state, AppIntent::PointerDown { pos });
    }
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::ResizeHandle,
        },
    );
    assert_eq!(state.scene.constraints.len(), 1);

    // Vertex 1 greifen und verschieben
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(602.0, 398.0),
        },
    );
    assert!(matches!(
        state.editor.drag,
        DragState::ResizeCorridorVertex { vertex: 1, .. }
    ));
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(600.0, 100.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(600.0, 100.0),
        },
    );

    let Constraint::Corridor(c) = &state.scene.constraints[0] else {
        panic!("Korridor erwartet");
    };
    assert!((c.points[1].y - 0.2).abs() < 1e-5);
    // Vertex 0 unverändert
    assert!((c.points[0].y - 0.8).abs() < 1e-5);
}

#[test]
fn snapshot_and_task_description_reflect_edited_scene() {
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
            pos: Vec2::new(100.0, 50.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: EditorMode::DrawRectKeepOut,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: Vec2::new(200.0, 100.0),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: Vec2::new(400.0, 200.0),
        },
    );

    let snapshot = controller.state_snapshot(&state);
    assert_eq!(snapshot.waypoints.len(), 1);
    assert_eq!(snapshot.constraints.len(), 1);
    assert_eq!(snapshot.mode, EditorMode::DrawRectKeepOut);
    assert!(snapshot.captures_input);
    assert!(snapshot.can_undo);

    let task = controller.task_description(&state);
    assert_eq!(task.waypoints, vec![[100.0, 50.0]]);
    assert_eq!(task.screen_width, 1000);
    assert_eq!(task.screen_height, 500);
    assert_eq!(task.constraints.expect("Constraints vorhanden").regions.len(), 1);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.waypoint_markers.len(), 1);
    assert_eq!(scene.constraint_rects.len(), 1);

    // Jeder ausgeführte Command landet im Log
    assert!(!state.command_log.is_empty());
}

#[test]
fn viewport_resize_keeps_normalized_and_refreshes_pixels() {
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
            pos: Vec2::new(100.0, 50.0),
        },
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [2000.0, 1000.0],
        },
    );

    assert!((state.scene.waypoints[0].x_norm - 0.1).abs() < 1e-6);
    assert_eq!(state.scene.waypoints[0].x_px, 200.0);
    assert_eq!(state.scene.waypoints[0].y_px, 100.0);
}
