//! Constraint-Entitäten: Keep-In/Keep-Out-Regionen als Rechteck oder
//! Pfad-Korridor. Alle Geometrie ist normalisiert gespeichert
//! (auflösungsunabhängig); Pixelwerte entstehen erst bei Hit-Tests und
//! Rendering über die aktuelle Viewport-Größe.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ob die Trajektorie innerhalb oder außerhalb der Region bleiben muss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepKind {
    KeepIn,
    KeepOut,
}

/// Normalisiertes, achsenparalleles Rechteck (linke obere Ecke, positive
/// Ausdehnung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormRect {
    /// Linke obere Ecke in Pixeln.
    pub fn origin_px(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(self.x * viewport.x, self.y * viewport.y)
    }

    /// Ausdehnung in Pixeln.
    pub fn size_px(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(self.width * viewport.x, self.height * viewport.y)
    }
}

/// Rechteck-Constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectConstraint {
    /// Keep-In oder Keep-Out
    pub keep: KeepKind,
    /// Normalisierte Geometrie
    pub rect: NormRect,
}

/// Pfad-Korridor-Constraint: Puffer konstanter Halbbreite um eine Polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorConstraint {
    /// Keep-In oder Keep-Out
    pub keep: KeepKind,
    /// Normalisierte Punktfolge (≥2 Punkte)
    pub points: Vec<Vec2>,
    /// Volle Korridorbreite, normalisiert. Die Geometrie rechnet mit der
    /// Halbbreite; die Pixel-Umrechnung skaliert über die Viewport-Breite.
    pub width: f32,
}

impl CorridorConstraint {
    /// Punktfolge in Pixeln.
    pub fn points_px(&self, viewport: Vec2) -> Vec<Vec2> {
        self.points.iter().map(|p| *p * viewport).collect()
    }

    /// Halbbreite in Pixeln (Skalierung über die Viewport-Breite).
    pub fn half_width_px(&self, viewport: Vec2) -> f32 {
        self.width * 0.5 * viewport.x
    }
}

/// Tagged-Variante über beide Constraint-Formen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Rect(RectConstraint),
    #[serde(rename = "path")]
    Corridor(CorridorConstraint),
}

impl Constraint {
    /// Keep-Art unabhängig von der Form.
    pub fn keep(&self) -> KeepKind {
        match self {
            Constraint::Rect(r) => r.keep,
            Constraint::Corridor(c) => c.keep,
        }
    }
}

/// Handle-Treffer über alle Constraint-Formen (Ergebnis der
/// Newest-First-Suche über den Constraint-Stapel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintHandle {
    /// Rechteck-Zone (Ecke oder Kante)
    Rect(crate::shared::RectHandle),
    /// Korridor-Vertex (Index in der Punktfolge)
    CorridorVertex(usize),
    /// Korridor-Breiten-Handle
    CorridorWidth,
}
