//! JSON-Wire-Layer: Trajektorien-Parser, Task-Beschreibung und
//! Zustands-Snapshot.

pub mod parser;
pub mod writer;

pub use parser::{parse_trajectory_json, trajectory_from_triplets};
pub use writer::{state_snapshot, task_description, task_description_json, StateSnapshot};
