//! SceneModel: besitzt Wegpunkte und Constraints und kapselt alle
//! Mutationen inklusive Normalisierung und Minimal-Größen.
//!
//! Alle Operationen sind total: Indizes außerhalb des Bereichs sind
//! No-Ops, ein Pfad-Finalize mit <2 Punkten verwirft stillschweigend.

use glam::Vec2;

use super::constraint::{
    Constraint, ConstraintHandle, CorridorConstraint, KeepKind, NormRect, RectConstraint,
};
use super::waypoint::Waypoint;
use crate::shared::{hit_test_corridor, hit_test_rect, CorridorHandle, RectHandle};

/// Viewport-Größe bevor der Host eine echte gemeldet hat.
const FALLBACK_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Unfertiges Rechteck während eines Draw-Drags (Pixelraum).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRect {
    /// Ankerpunkt (Pointer-Down)
    pub anchor_px: Vec2,
    /// Aktuelle Gegenecke (letzte Pointer-Position)
    pub current_px: Vec2,
}

/// Szenen-Zustand: Wegpunkte, Constraints, unfertige Formen.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneModel {
    /// Wegpunkte in Einfügereihenfolge (append-only, nie umsortiert)
    pub waypoints: Vec<Waypoint>,
    /// Constraints in Erstellreihenfolge (append-only, nie umsortiert)
    pub constraints: Vec<Constraint>,
    viewport: Vec2,
    pending_rect: Option<PendingRect>,
    pending_path: Vec<Vec2>,
}

impl SceneModel {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            constraints: Vec::new(),
            viewport: FALLBACK_VIEWPORT,
            pending_rect: None,
            pending_path: Vec::new(),
        }
    }

    /// Zuletzt bekannte Viewport-Größe in Pixeln.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Setzt die Viewport-Größe und leitet alle Wegpunkt-Pixelfelder neu ab.
    ///
    /// Constraints sind rein normalisiert gespeichert und brauchen keine
    /// Neuberechnung.
    pub fn set_viewport(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 || size == self.viewport {
            return;
        }
        self.viewport = size;
        for waypoint in &mut self.waypoints {
            waypoint.refresh_px(size);
        }
    }

    // ── Wegpunkte ───────────────────────────────────────────────────

    /// Hängt einen Wegpunkt an der Pixelposition an. Schlägt nie fehl.
    pub fn add_waypoint(&mut self, px: Vec2) -> Waypoint {
        let waypoint = Waypoint::from_px(px, self.viewport);
        self.waypoints.push(waypoint);
        waypoint
    }

    /// Verschiebt einen Wegpunkt in place. Index außerhalb: No-Op.
    pub fn move_waypoint(&mut self, index: usize, px: Vec2) {
        let viewport = self.viewport;
        if let Some(waypoint) = self.waypoints.get_mut(index) {
            waypoint.set_px(px, viewport);
        }
    }

    /// Nächster Wegpunkt innerhalb `radius_px`, jüngere gewinnen bei
    /// Gleichstand.
    pub fn hit_test_waypoint(&self, point_px: Vec2, radius_px: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, waypoint) in self.waypoints.iter().enumerate().rev() {
            let dist = waypoint.px().distance(point_px);
            if dist <= radius_px && best.map_or(true, |(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }

    // ── Rechteck-Draw ───────────────────────────────────────────────

    /// Beginnt ein Rechteck am Ankerpunkt.
    pub fn start_rect(&mut self, px: Vec2) {
        self.pending_rect = Some(PendingRect {
            anchor_px: px,
            current_px: px,
        });
    }

    /// Aktualisiert die Gegenecke des unfertigen Rechtecks.
    pub fn update_rect(&mut self, px: Vec2) {
        if let Some(pending) = self.pending_rect.as_mut() {
            pending.current_px = px;
        }
    }

    /// Schließt das Rechteck ab: Orientierung wird fixiert (linke obere
    /// Ecke, positive Ausdehnung) und beide Kanten auf `min_create_px`
    /// geklemmt, unabhängig von der Drag-Richtung.
    pub fn finish_rect(&mut self, px: Vec2, keep: KeepKind, min_create_px: f32) -> Option<Constraint> {
        let pending = self.pending_rect.take()?;
        let a = pending.anchor_px;
        let b = px;

        let origin = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let size = Vec2::new(
            (a.x - b.x).abs().max(min_create_px),
            (a.y - b.y).abs().max(min_create_px),
        );

        let constraint = Constraint::Rect(RectConstraint {
            keep,
            rect: NormRect {
                x: origin.x / self.viewport.x,
                y: origin.y / self.viewport.y,
                width: size.x / self.viewport.x,
                height: size.y / self.viewport.y,
            },
        });
        self.constraints.push(constraint.clone());
        Some(constraint)
    }

    /// Unfertiges Rechteck (für Vorschau-Rendering).
    pub fn pending_rect(&self) -> Option<PendingRect> {
        self.pending_rect
    }

    // ── Pfad-Draw ───────────────────────────────────────────────────

    /// Hängt einen Punkt an den unfertigen Pfad an.
    pub fn append_path_point(&mut self, px: Vec2) {
        self.pending_path.push(px / self.viewport);
    }

    /// Schließt den Pfad als Korridor-Constraint ab. Weniger als 2 Punkte
    /// werden stillschweigend verworfen (kein Constraint).
    pub fn finalize_path_corridor(&mut self, keep: KeepKind, width_norm: f32) -> Option<Constraint> {
        let points = std::mem::take(&mut self.pending_path);
        if points.len() < 2 {
            return None;
        }
        let constraint = Constraint::Corridor(CorridorConstraint {
            keep,
            points,
            width: width_norm,
        });
        self.constraints.push(constraint.clone());
        Some(constraint)
    }

    /// Punkte des unfertigen Pfads (normalisiert).
    pub fn pending_path(&self) -> &[Vec2] {
        &self.pending_path
    }

    /// Verwirft unfertige Formen (Moduswechsel mitten im Drag).
    pub fn cancel_pending(&mut self) {
        self.pending_rect = None;
        self.pending_path.clear();
    }

    // ── Resize ──────────────────────────────────────────────────────

    /// Berechnet ein Rechteck aus dem Drag-Start-Snapshot plus dem
    /// *kumulativen* Pointer-Delta neu (driftfrei). Klemmt auf
    /// `min_size_px` pro Kante, indem der Anker so verschoben wird, dass
    /// die gegenüberliegende Kante fixiert bleibt.
    pub fn resize_rect(
        &mut self,
        index: usize,
        handle: RectHandle,
        start: NormRect,
        delta_norm: Vec2,
        min_size_px: f32,
    ) {
        let min_w = min_size_px / self.viewport.x;
        let min_h = min_size_px / self.viewport.y;

        let Some(Constraint::Rect(rect_constraint)) = self.constraints.get_mut(index) else {
            return;
        };

        let mut rect = start;

        let moves_left = matches!(handle, RectHandle::Nw | RectHandle::W | RectHandle::Sw);
        let moves_right = matches!(handle, RectHandle::Ne | RectHandle::E | RectHandle::Se);
        let moves_top = matches!(handle, RectHandle::Nw | RectHandle::N | RectHandle::Ne);
        let moves_bottom = matches!(handle, RectHandle::Sw | RectHandle::S | RectHandle::Se);

        if moves_left {
            rect.x = start.x + delta_norm.x;
            rect.width = start.width - delta_norm.x;
            if rect.width < min_w {
                // Rechte Kante bleibt stehen
                rect.x = start.x + start.width - min_w;
                rect.width = min_w;
            }
        }
        if moves_right {
            rect.width = (start.width + delta_norm.x).max(min_w);
        }
        if moves_top {
            rect.y = start.y + delta_norm.y;
            rect.height = start.height - delta_norm.y;
            if rect.height < min_h {
                // Untere Kante bleibt stehen
                rect.y = start.y + start.height - min_h;
                rect.height = min_h;
            }
        }
        if moves_bottom {
            rect.height = (start.height + delta_norm.y).max(min_h);
        }

        rect_constraint.rect = rect;
    }

    /// Setzt einen Korridor-Vertex auf eine absolute Pixelposition.
    pub fn resize_corridor_vertex(&mut self, index: usize, vertex: usize, px: Vec2) {
        let viewport = self.viewport;
        let Some(Constraint::Corridor(corridor)) = self.constraints.get_mut(index) else {
            return;
        };
        if let Some(point) = corridor.points.get_mut(vertex) {
            *point = px / viewport;
        }
    }

    /// Berechnet die Korridorbreite aus dem Drag-Start-Snapshot plus dem
    /// kumulativen Delta neu (driftfrei wie beim Rechteck-Resize).
    pub fn resize_corridor_width(
        &mut self,
        index: usize,
        start_width: f32,
        delta_norm: f32,
        min_width_norm: f32,
    ) {
        let Some(Constraint::Corridor(corridor)) = self.constraints.get_mut(index) else {
            return;
        };
        corridor.width = (start_width + delta_norm).max(min_width_norm);
    }

    // ── Hit-Tests ───────────────────────────────────────────────────

    /// Sucht das oberste Handle unter dem Pointer. Iteriert vom jüngsten
    /// zum ältesten Constraint, damit visuell obenliegende Formen bei
    /// Überlappung gewinnen.
    pub fn hit_test_constraints(
        &self,
        point_px: Vec2,
        margin_px: f32,
        vertex_radius_px: f32,
    ) -> Option<(usize, ConstraintHandle)> {
        for (index, constraint) in self.constraints.iter().enumerate().rev() {
            match constraint {
                Constraint::Rect(r) => {
                    let origin = r.rect.origin_px(self.viewport);
                    let size = r.rect.size_px(self.viewport);
                    if let Some(handle) = hit_test_rect(origin, size, point_px, margin_px) {
                        return Some((index, ConstraintHandle::Rect(handle)));
                    }
                }
                Constraint::Corridor(c) => {
                    let points = c.points_px(self.viewport);
                    let half_width = c.half_width_px(self.viewport);
                    match hit_test_corridor(
                        &points,
                        half_width,
                        point_px,
                        vertex_radius_px,
                        margin_px,
                    ) {
                        Some(CorridorHandle::Vertex(v)) => {
                            return Some((index, ConstraintHandle::CorridorVertex(v)));
                        }
                        Some(CorridorHandle::Width) => {
                            return Some((index, ConstraintHandle::CorridorWidth));
                        }
                        None => {}
                    }
                }
            }
        }
        None
    }

    // ── Bulk ────────────────────────────────────────────────────────

    /// Leert Wegpunkte, Constraints und unfertige Formen.
    pub fn clear_all(&mut self) {
        self.waypoints.clear();
        self.constraints.clear();
        self.cancel_pending();
    }
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}
