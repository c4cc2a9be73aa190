//! Baut die deklarative Render-Szene aus dem aktuellen AppState.

use glam::Vec2;

use crate::core::Constraint;
use crate::shared::{
    build_corridor_polygon, MarkerShape, PolygonShape, PolylineShape, RectShape, RenderScene,
};

use super::AppState;

/// Baut die Render-Szene; `replay_cursor` ist die zuletzt dispatchte
/// Replay-Position (falls vorhanden).
pub fn build(state: &AppState, replay_cursor: Option<Vec2>) -> RenderScene {
    let viewport = state.scene.viewport();
    let options = &state.options;

    let waypoint_markers: Vec<MarkerShape> = state
        .scene
        .waypoints
        .iter()
        .map(|w| MarkerShape {
            center: w.px(),
            radius: options.waypoint_marker_radius_px,
            color: options.waypoint_color,
        })
        .collect();

    let waypoint_polyline = (state.scene.waypoints.len() >= 2).then(|| PolylineShape {
        points: state.scene.waypoints.iter().map(|w| w.px()).collect(),
        color: options.waypoint_color,
    });

    let mut constraint_rects = Vec::new();
    let mut constraint_polygons = Vec::new();
    for constraint in &state.scene.constraints {
        match constraint {
            Constraint::Rect(r) => constraint_rects.push(RectShape {
                origin: r.rect.origin_px(viewport),
                size: r.rect.size_px(viewport),
                color: keep_color(state, r.keep),
            }),
            Constraint::Corridor(c) => {
                let points = c.points_px(viewport);
                let polygon = build_corridor_polygon(&points, c.half_width_px(viewport));
                constraint_polygons.push(PolygonShape {
                    points: polygon,
                    color: keep_color(state, c.keep),
                });
            }
        }
    }

    let pending_rect = state.scene.pending_rect().map(|pending| {
        let a = pending.anchor_px;
        let b = pending.current_px;
        RectShape {
            origin: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            size: Vec2::new((a.x - b.x).abs(), (a.y - b.y).abs()),
            color: options.pending_color,
        }
    });

    let pending_path = (!state.scene.pending_path().is_empty()).then(|| PolylineShape {
        points: state
            .scene
            .pending_path()
            .iter()
            .map(|p| *p * viewport)
            .collect(),
        color: options.pending_color,
    });

    let replay_cursor = replay_cursor.map(|pos| MarkerShape {
        center: pos,
        radius: options.waypoint_marker_radius_px,
        color: options.replay_cursor_color,
    });

    RenderScene {
        viewport_size: [viewport.x, viewport.y],
        waypoint_markers,
        waypoint_polyline,
        constraint_rects,
        constraint_polygons,
        pending_rect,
        pending_path,
        replay_cursor,
    }
}

fn keep_color(state: &AppState, keep: crate::core::KeepKind) -> [f32; 4] {
    match keep {
        crate::core::KeepKind::KeepIn => state.options.keep_in_color,
        crate::core::KeepKind::KeepOut => state.options.keep_out_color,
    }
}
