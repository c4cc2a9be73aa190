//! App-Intents: Eingaben aus Host/Panel/System ohne direkte Mutationslogik.

use serde::{Deserialize, Serialize};

use crate::app::state::EditorMode;

/// Tasten, die das Overlay interpretiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKey {
    /// Schließt den unfertigen Pfad ab, ohne den Modus zu verlassen
    Enter,
    /// Zurück in den Passthrough-Modus
    Escape,
}

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppIntent {
    /// Werkzeug im Panel ausgewählt
    ModeSelected { mode: EditorMode },
    /// Roh-Pointer: Taste gedrückt (Overlay-Pixelkoordinaten)
    PointerDown { pos: glam::Vec2 },
    /// Roh-Pointer: Bewegung
    PointerMoved { pos: glam::Vec2 },
    /// Roh-Pointer: Taste losgelassen
    PointerUp { pos: glam::Vec2 },
    /// Roh-Tastatur
    KeyPressed { key: EditorKey },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kooperativer Frame-Tick des Hosts (treibt das Replay)
    FrameTick,
    /// Alles löschen (Wegpunkte, Constraints, History)
    ClearAllRequested,
    /// Undo: Letzte Erstellung rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Erstellung wiederherstellen
    RedoRequested,
    /// Trajektorie im Wire-Format `[x_px, y_px, t_s]` übernehmen
    TrajectorySet { samples: Vec<[f64; 3]> },
    /// Replay starten
    ReplayStartRequested,
    /// Replay stoppen
    ReplayStopRequested,
    /// Auf Zeitpunkt springen (Sekunden)
    ReplaySeekRequested { time: f64 },
    /// Standard-Korridorbreite (normalisiert) ändern
    CorridorDefaultWidthChanged { width_norm: f32 },
}
