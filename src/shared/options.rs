//! Zentrale Konfiguration für den Cursor-Trajektorien-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Pick-Radius für Wegpunkt-Drag in Screen-Pixeln.
pub const WAYPOINT_PICK_RADIUS_PX: f32 = 12.0;
/// Marker-Radius für Wegpunkt-Darstellung in Screen-Pixeln.
pub const WAYPOINT_MARKER_RADIUS_PX: f32 = 6.0;

// ── Handles & Hit-Testing ───────────────────────────────────────────

/// Breite des Trefferbands um Rechteck-Kanten und Korridor-Ränder (Pixel).
pub const HANDLE_MARGIN_PX: f32 = 8.0;
/// Pick-Radius für Korridor-Vertex-Handles (Pixel).
pub const VERTEX_PICK_RADIUS_PX: f32 = 10.0;

// ── Constraint-Geometrie ────────────────────────────────────────────

/// Minimale Kantenlänge eines Rechtecks beim Erstellen (Pixel, vor Normalisierung).
pub const RECT_MIN_CREATE_PX: f32 = 4.0;
/// Minimale Kantenlänge eines Rechtecks beim Resize (Pixel).
pub const RECT_MIN_RESIZE_PX: f32 = 20.0;
/// Standard-Korridorbreite (normalisiert, volle Breite).
pub const CORRIDOR_DEFAULT_WIDTH_NORM: f32 = 0.04;
/// Minimale Korridorbreite beim Resize (normalisiert).
pub const CORRIDOR_MIN_WIDTH_NORM: f32 = 0.002;
/// Standard-Sicherheitsmarge pro Region in der Task-Beschreibung (normalisiert).
pub const REGION_DEFAULT_MARGIN_NORM: f32 = 0.005;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Tiefe der Undo/Redo-Stacks.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe für Wegpunkt-Marker (RGBA: Cyan).
pub const WAYPOINT_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für Keep-In-Regionen (RGBA: Grün).
pub const KEEP_IN_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 0.6];
/// Farbe für Keep-Out-Regionen (RGBA: Rot).
pub const KEEP_OUT_COLOR: [f32; 4] = [0.9, 0.15, 0.15, 0.6];
/// Farbe für unfertige Formen (Pending-Rect/-Pfad, RGBA: Gelb).
pub const PENDING_COLOR: [f32; 4] = [1.0, 0.85, 0.2, 0.8];
/// Farbe für den Replay-Cursor (RGBA: Magenta).
pub const REPLAY_CURSOR_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `cursor_trajectory_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Wegpunkte ───────────────────────────────────────────────
    /// Pick-Radius für Wegpunkt-Drag in Screen-Pixeln
    pub waypoint_pick_radius_px: f32,
    /// Marker-Radius für die Darstellung
    pub waypoint_marker_radius_px: f32,

    // ── Handles ─────────────────────────────────────────────────
    /// Trefferband um Rechteck-Kanten und Korridor-Ränder (Pixel)
    pub handle_margin_px: f32,
    /// Pick-Radius für Korridor-Vertex-Handles (Pixel)
    pub vertex_pick_radius_px: f32,

    // ── Constraints ─────────────────────────────────────────────
    /// Minimale Rechteck-Kante beim Erstellen (Pixel)
    pub rect_min_create_px: f32,
    /// Minimale Rechteck-Kante beim Resize (Pixel)
    pub rect_min_resize_px: f32,
    /// Standard-Korridorbreite für neue Pfad-Korridore (normalisiert).
    /// Per Command zur Laufzeit änderbar; pro Korridor nachträglich
    /// über das Breiten-Handle verstellbar.
    pub corridor_default_width_norm: f32,
    /// Minimale Korridorbreite beim Resize (normalisiert)
    pub corridor_min_width_norm: f32,
    /// Sicherheitsmarge pro Region in der Task-Beschreibung (normalisiert)
    #[serde(default = "default_region_margin_norm")]
    pub region_default_margin_norm: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Farbe für Wegpunkt-Marker
    pub waypoint_color: [f32; 4],
    /// Farbe für Keep-In-Regionen
    pub keep_in_color: [f32; 4],
    /// Farbe für Keep-Out-Regionen
    pub keep_out_color: [f32; 4],
    /// Farbe für unfertige Formen
    pub pending_color: [f32; 4],
    /// Farbe für den Replay-Cursor
    #[serde(default = "default_replay_cursor_color")]
    pub replay_cursor_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            waypoint_pick_radius_px: WAYPOINT_PICK_RADIUS_PX,
            waypoint_marker_radius_px: WAYPOINT_MARKER_RADIUS_PX,

            handle_margin_px: HANDLE_MARGIN_PX,
            vertex_pick_radius_px: VERTEX_PICK_RADIUS_PX,

            rect_min_create_px: RECT_MIN_CREATE_PX,
            rect_min_resize_px: RECT_MIN_RESIZE_PX,
            corridor_default_width_norm: CORRIDOR_DEFAULT_WIDTH_NORM,
            corridor_min_width_norm: CORRIDOR_MIN_WIDTH_NORM,
            region_default_margin_norm: REGION_DEFAULT_MARGIN_NORM,

            waypoint_color: WAYPOINT_COLOR,
            keep_in_color: KEEP_IN_COLOR,
            keep_out_color: KEEP_OUT_COLOR,
            pending_color: PENDING_COLOR,
            replay_cursor_color: REPLAY_CURSOR_COLOR,
        }
    }
}

/// Serde-Default für `region_default_margin_norm` (Abwärtskompatibilität).
fn default_region_margin_norm() -> f32 {
    REGION_DEFAULT_MARGIN_NORM
}

/// Serde-Default für `replay_cursor_color` (Abwärtskompatibilität).
fn default_replay_cursor_color() -> [f32; 4] {
    REPLAY_CURSOR_COLOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cursor_trajectory_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cursor_trajectory_editor.toml")
    }
}
