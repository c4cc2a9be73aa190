//! Gemeinsame Test-Doubles für die Controller-Flow-Tests.

mod editing;
mod history_flow;
mod replay_flow;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cursor_trajectory_editor::replay::{
    Clock, HitTargetResolver, InputEventSink, NullResolver, NullSink, TargetId,
};
use cursor_trajectory_editor::{
    AppController, AppIntent, AppState, EditorEvent, Notifier, PointerEventKind, ReplayEngine,
    SystemClock,
};
use glam::Vec2;

/// Notifier, der alle Events aufzeichnet.
pub struct RecordingNotifier(pub Rc<RefCell<Vec<EditorEvent>>>);

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: EditorEvent) {
        self.0.borrow_mut().push(event);
    }
}

/// Von Hand stellbare Uhr für deterministische Replay-Tests.
#[derive(Clone)]
pub struct TestClock(pub Rc<Cell<f64>>);

impl Clock for TestClock {
    fn now(&self) -> f64 {
        self.0.get()
    }
}

/// Resolver mit zwei Zielen: x < 50 → Ziel 1, sonst Ziel 2.
pub struct SplitResolver;

impl HitTargetResolver for SplitResolver {
    fn topmost_at(&mut self, pos: Vec2) -> Option<TargetId> {
        if pos.x < 50.0 {
            Some(TargetId(1))
        } else {
            Some(TargetId(2))
        }
    }

    fn is_attached(&self, _target: TargetId) -> bool {
        true
    }
}

/// Sink, der alle dispatchten Events samt Position aufzeichnet.
#[derive(Clone, Default)]
pub struct RecordingSink(pub Rc<RefCell<Vec<(TargetId, PointerEventKind, Vec2)>>>);

impl InputEventSink for RecordingSink {
    fn emit(&mut self, target: TargetId, kind: PointerEventKind, pos: Vec2) {
        self.0.borrow_mut().push((target, kind, pos));
    }
}

/// Controller für Editing-Tests: Events werden aufgezeichnet, Replay
/// läuft gegen leere Capabilities.
pub fn editing_controller() -> (AppController, AppState, Rc<RefCell<Vec<EditorEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let controller = AppController::new(
        Box::new(RecordingNotifier(events.clone())),
        ReplayEngine::new(
            Box::new(SystemClock::new()),
            Box::new(NullResolver),
            Box::new(NullSink),
            None,
        ),
    );
    let mut state = AppState::new();
    state
        .scene
        .set_viewport(Vec2::new(1000.0, 500.0));
    (controller, state, events)
}

/// Controller für Replay-Tests mit stellbarer Uhr und Recording-Sink.
pub fn replay_controller() -> (
    AppController,
    AppState,
    Rc<RefCell<Vec<EditorEvent>>>,
    Rc<Cell<f64>>,
    Rc<RefCell<Vec<(TargetId, PointerEventKind, Vec2)>>>,
) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let time = Rc::new(Cell::new(0.0));
    let sink = RecordingSink::default();
    let sink_events = sink.0.clone();

    let controller = AppController::new(
        Box::new(RecordingNotifier(events.clone())),
        ReplayEngine::new(
            Box::new(TestClock(time.clone())),
            Box::new(SplitResolver),
            Box::new(sink),
            None,
        ),
    );
    let mut state = AppState::new();
    state
        .scene
        .set_viewport(Vec2::new(1000.0, 500.0));
    (controller, state, events, time, sink_events)
}

/// Schickt einen Intent und erwartet fehlerfreie Verarbeitung.
pub fn drive(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}
