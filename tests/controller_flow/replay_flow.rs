//! Controller-Flows: Trajektorie, Replay-Frames, Seek, Stop.

use cursor_trajectory_editor::replay::{LEAVE_SEQUENCE, MOVE_SEQUENCE};
use cursor_trajectory_editor::{AppIntent, EditorEvent, PointerEventKind, TargetId};
use glam::Vec2;

use super::{drive, replay_controller};

/// Drei Samples über 2 Sekunden; Sample 1 wechselt das Hit-Ziel
/// (x ≥ 50 → Ziel 2).
fn wire_samples() -> Vec<[f64; 3]> {
    vec![[10.0, 10.0, 0.0], [100.0, 50.0, 1.0], [120.0, 60.0, 2.0]]
}

#[test]
fn set_trajectory_notifies_sample_count() {
    let (mut controller, mut state, events, _time, _sink) = replay_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            samples: wire_samples(),
        },
    );

    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, EditorEvent::TrajectoryLoaded { count: 3 })));
}

#[test]
fn malformed_trajectory_degrades_to_noop_replay() {
    let (mut controller, mut state, events, _time, sink) = replay_controller();

    // Rückläufige Zeitstempel
    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            samples: vec![[0.0, 0.0, 1.0], [1.0, 1.0, 0.5]],
        },
    );
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, EditorEvent::TrajectoryLoaded { .. })));

    // Replay-Operationen sind No-Ops
    drive(&mut controller, &mut state, AppIntent::ReplayStartRequested);
    drive(&mut controller, &mut state, AppIntent::FrameTick);
    assert!(sink.borrow().is_empty());
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, EditorEvent::ReplayProgress { .. })));
}

#[test]
fn frame_ticks_emit_progress_and_single_completion() {
    let (mut controller, mut state, events, time, _sink) = replay_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            samples: wire_samples(),
        },
    );
    drive(&mut controller, &mut state, AppIntent::ReplayStartRequested);

    drive(&mut controller, &mut state, AppIntent::FrameTick);
    time.set(1.5);
    drive(&mut controller, &mut state, AppIntent::FrameTick);
    time.set(2.5);
    drive(&mut controller, &mut state, AppIntent::FrameTick);
    // Scheduler liefert nach dem Ende weitere Frames
    drive(&mut controller, &mut state, AppIntent::FrameTick);
    drive(&mut controller, &mut state, AppIntent::FrameTick);

    let recorded = events.borrow();
    let progress_indices: Vec<usize> = recorded
        .iter()
        .filter_map(|e| match e {
            EditorEvent::ReplayProgress { current_index, .. } => Some(*current_index),
            _ => None,
        })
        .collect();
    assert_eq!(progress_indices, vec![0, 1, 2]);

    let completions = recorded
        .iter()
        .filter(|e| matches!(e, EditorEvent::ReplayComplete))
        .count();
    assert_eq!(completions, 1);
}

#[test]
fn seek_selects_nearest_sample_not_after_time() {
    let (mut controller, mut state, _events, _time, sink) = replay_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            samples: wire_samples(),
        },
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::ReplaySeekRequested { time: 1.5 },
    );
    // Sample 1 → Position (100, 50)
    let last_move = sink
        .borrow()
        .iter()
        .rev()
        .find(|(_, kind, _)| *kind == PointerEventKind::MouseMove)
        .map(|(_, _, pos)| *pos)
        .expect("Move-Event erwartet");
    assert_eq!(last_move, Vec2::new(100.0, 50.0));

    drive(
        &mut controller,
        &mut state,
        AppIntent::ReplaySeekRequested { time: 2.5 },
    );
    // Hinter dem Ende: auf letztes Sample geklemmt
    let last_move = sink
        .borrow()
        .iter()
        .rev()
        .find(|(_, kind, _)| *kind == PointerEventKind::MouseMove)
        .map(|(_, _, pos)| *pos)
        .expect("Move-Event erwartet");
    assert_eq!(last_move, Vec2::new(120.0, 60.0));
}

#[test]
fn stop_after_target_change_emits_leave_family_and_stopped_event() {
    let (mut controller, mut state, events, time, sink) = replay_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            samples: wire_samples(),
        },
    );
    drive(&mut controller, &mut state, AppIntent::ReplayStartRequested);
    drive(&mut controller, &mut state, AppIntent::FrameTick); // Ziel 1
    time.set(1.5);
    drive(&mut controller, &mut state, AppIntent::FrameTick); // Ziel 2
    sink.borrow_mut().clear();

    drive(&mut controller, &mut state, AppIntent::ReplayStopRequested);

    let recorded = sink.borrow();
    let expected: Vec<(TargetId, PointerEventKind)> = LEAVE_SEQUENCE
        .into_iter()
        .map(|kind| (TargetId(2), kind))
        .collect();
    let actual: Vec<(TargetId, PointerEventKind)> =
        recorded.iter().map(|(t, k, _)| (*t, *k)).collect();
    assert_eq!(actual, expected);

    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, EditorEvent::ReplayStopped)));
}

#[test]
fn move_family_is_dispatched_every_frame_without_target_change() {
    let (mut controller, mut state, _events, time, sink) = replay_controller();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TrajectorySet {
            // Beide Samples auf Ziel 2
            samples: vec![[100.0, 10.0, 0.0], [120.0, 20.0, 1.0]],
        },
    );
    drive(&mut controller, &mut state, AppIntent::ReplayStartRequested);
    drive(&mut controller, &mut state, AppIntent::FrameTick);
    sink.borrow_mut().clear();

    time.set(0.5);
    drive(&mut controller, &mut state, AppIntent::FrameTick);

    // Kein Zielwechsel: nur Move-Familie
    let recorded = sink.borrow();
    let kinds: Vec<PointerEventKind> = recorded.iter().map(|(_, k, _)| *k).collect();
    assert_eq!(kinds, MOVE_SEQUENCE.to_vec());
}
