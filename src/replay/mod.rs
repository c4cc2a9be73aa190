//! Replay-Layer: Engine, Capabilities und Event-Vokabular.

pub mod capabilities;
pub mod engine;
pub mod events;

pub use capabilities::{
    Clock, HitTargetResolver, InputEventSink, LowLevelInputInjector, NullResolver, NullSink,
    SystemClock, TargetId,
};
pub use engine::{ReplayEngine, StepOutcome};
pub use events::{PointerEventKind, ENTER_SEQUENCE, LEAVE_SEQUENCE, MOVE_SEQUENCE};
