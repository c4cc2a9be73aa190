//! Core-Domänentypen: Wegpunkte, Constraints, SceneModel, Trajektorie.

pub mod constraint;
pub mod scene;
pub mod trajectory;
pub mod waypoint;

pub use constraint::{
    Constraint, ConstraintHandle, CorridorConstraint, KeepKind, NormRect, RectConstraint,
};
pub use scene::{PendingRect, SceneModel};
pub use trajectory::{Trajectory, TrajectorySample};
pub use waypoint::Waypoint;
