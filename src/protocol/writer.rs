//! Serialisierung nach außen: Zustands-Snapshot für das Panel und
//! Task-Beschreibung für den externen Trajektorien-Service.
//!
//! Das Task-Format ist vom Service vorgegeben: Wegpunkte als Pixel-Paare,
//! Viewport-Maße, Constraint-Regionen normalisiert mit expliziter Marge
//! und diskriminierter Geometrie-Union.

use serde::Serialize;

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::core::{Constraint, KeepKind, Waypoint};

/// Vollständiger Zustands-Snapshot (Pull-Schnittstelle).
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub waypoints: Vec<Waypoint>,
    pub constraints: Vec<Constraint>,
    pub mode: EditorMode,
    pub captures_input: bool,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub can_undo: bool,
    pub can_redo: bool,
    pub corridor_default_width_norm: f32,
}

/// Baut den Snapshot aus dem aktuellen AppState.
pub fn state_snapshot(state: &AppState) -> StateSnapshot {
    let viewport = state.scene.viewport();
    StateSnapshot {
        waypoints: state.scene.waypoints.clone(),
        constraints: state.scene.constraints.clone(),
        mode: state.editor.mode,
        captures_input: state.editor.mode.captures_input(),
        viewport_width: viewport.x,
        viewport_height: viewport.y,
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
        corridor_default_width_norm: state.options.corridor_default_width_norm,
    }
}

/// Geometrie-Union einer Constraint-Region im Task-Format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskGeometry {
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Path {
        path: Vec<[f32; 2]>,
        width: f32,
    },
}

/// Eine Constraint-Region im Task-Format.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRegion {
    pub constraint_type: KeepKind,
    pub margin: f32,
    pub geometry: TaskGeometry,
}

/// Constraint-Block der Task-Beschreibung.
#[derive(Debug, Clone, Serialize)]
pub struct TaskConstraints {
    pub coordinate_system: &'static str,
    pub default_margin: f32,
    pub regions: Vec<TaskRegion>,
}

/// Task-Beschreibung für den Trajektorien-Service (Black Box:
/// `task -> trajectory | error`).
#[derive(Debug, Clone, Serialize)]
pub struct TaskDescription {
    /// Wegpunkte als Pixel-Paare in Einfügereihenfolge
    pub waypoints: Vec<[f32; 2]>,
    pub screen_width: u32,
    pub screen_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<TaskConstraints>,
}

/// Baut die Task-Beschreibung aus dem aktuellen AppState.
pub fn task_description(state: &AppState) -> TaskDescription {
    let viewport = state.scene.viewport();
    let margin = state.options.region_default_margin_norm;

    let regions: Vec<TaskRegion> = state
        .scene
        .constraints
        .iter()
        .map(|constraint| match constraint {
            Constraint::Rect(r) => TaskRegion {
                constraint_type: r.keep,
                margin,
                geometry: TaskGeometry::Rectangle {
                    x: r.rect.x,
                    y: r.rect.y,
                    width: r.rect.width,
                    height: r.rect.height,
                },
            },
            Constraint::Corridor(c) => TaskRegion {
                constraint_type: c.keep,
                margin,
                geometry: TaskGeometry::Path {
                    path: c.points.iter().map(|p| [p.x, p.y]).collect(),
                    width: c.width,
                },
            },
        })
        .collect();

    TaskDescription {
        waypoints: state
            .scene
            .waypoints
            .iter()
            .map(|w| [w.x_px, w.y_px])
            .collect(),
        screen_width: viewport.x as u32,
        screen_height: viewport.y as u32,
        constraints: (!regions.is_empty()).then_some(TaskConstraints {
            coordinate_system: "normalized",
            default_margin: margin,
            regions,
        }),
    }
}

/// Task-Beschreibung als JSON.
pub fn task_description_json(state: &AppState) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&task_description(state))?)
}
