//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie zeichnet.
//! Reine Beschreibung; hier wird nichts gezeichnet.

use glam::Vec2;

/// Kreis-Marker (z.B. Wegpunkt oder Korridor-Vertex) in Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Offener Linienzug in Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub points: Vec<Vec2>,
    pub color: [f32; 4],
}

/// Geschlossenes Polygon (Korridor-Umriss) in Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Vec2>,
    pub color: [f32; 4],
}

/// Achsenparalleles Rechteck in Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Wegpunkt-Marker in Einfügereihenfolge
    pub waypoint_markers: Vec<MarkerShape>,
    /// Verbindungslinie durch alle Wegpunkte (leer bei <2 Wegpunkten)
    pub waypoint_polyline: Option<PolylineShape>,
    /// Rechteck-Constraints
    pub constraint_rects: Vec<RectShape>,
    /// Korridor-Umrisse (Puffer-Polygone)
    pub constraint_polygons: Vec<PolygonShape>,
    /// Vorschau des gerade aufgezogenen Rechtecks
    pub pending_rect: Option<RectShape>,
    /// Vorschau des gerade gezeichneten Pfads
    pub pending_path: Option<PolylineShape>,
    /// Replay-Cursor (gesetzt während Playback/Seek)
    pub replay_cursor: Option<MarkerShape>,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene irgendetwas Zeichenbares enthält.
    pub fn is_empty(&self) -> bool {
        self.waypoint_markers.is_empty()
            && self.constraint_rects.is_empty()
            && self.constraint_polygons.is_empty()
            && self.pending_rect.is_none()
            && self.pending_path.is_none()
            && self.replay_cursor.is_none()
    }
}
