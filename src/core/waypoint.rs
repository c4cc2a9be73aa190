//! Wegpunkt-Entität mit normalisierten und abgeleiteten Pixel-Koordinaten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Bewegungs-Wegpunkt auf dem Dokument.
///
/// Die normalisierte Position ist die Quelle der Wahrheit; die Pixelfelder
/// werden bei jeder Viewport-Änderung neu abgeleitet und bleiben dadurch
/// konsistent zur zuletzt bekannten Viewport-Größe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Normalisierte Position in [0,1]²
    #[serde(rename = "xNorm")]
    pub x_norm: f32,
    #[serde(rename = "yNorm")]
    pub y_norm: f32,
    /// Abgeleitete Pixelposition (zuletzt bekannter Viewport)
    #[serde(rename = "xPixel")]
    pub x_px: f32,
    #[serde(rename = "yPixel")]
    pub y_px: f32,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt aus einer Pixelposition und der aktuellen
    /// Viewport-Größe.
    pub fn from_px(px: Vec2, viewport: Vec2) -> Self {
        Self {
            x_norm: px.x / viewport.x,
            y_norm: px.y / viewport.y,
            x_px: px.x,
            y_px: px.y,
        }
    }

    /// Pixelposition als Vektor.
    pub fn px(&self) -> Vec2 {
        Vec2::new(self.x_px, self.y_px)
    }

    /// Normalisierte Position als Vektor.
    pub fn norm(&self) -> Vec2 {
        Vec2::new(self.x_norm, self.y_norm)
    }

    /// Setzt die Position aus Pixelkoordinaten neu (Move-Drag).
    pub fn set_px(&mut self, px: Vec2, viewport: Vec2) {
        self.x_px = px.x;
        self.y_px = px.y;
        self.x_norm = px.x / viewport.x;
        self.y_norm = px.y / viewport.y;
    }

    /// Leitet die Pixelfelder aus der normalisierten Position neu ab
    /// (nach Viewport-Resize).
    pub fn refresh_px(&mut self, viewport: Vec2) {
        self.x_px = self.x_norm * viewport.x;
        self.y_px = self.y_norm * viewport.y;
    }
}
