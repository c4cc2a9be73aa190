//! App-Commands: mutierende Schritte, die zentral ausgeführt werden.

use crate::app::state::EditorMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Modus wechseln (committet ggf. den unfertigen Pfad)
    SetMode { mode: EditorMode },
    /// Wegpunkt an Pixelposition anhängen
    AddWaypointAt { pos: glam::Vec2 },
    /// Wegpunkt-Drag beginnen (Hit-Test im Handler; kein Treffer = No-Op)
    BeginWaypointDrag { pos: glam::Vec2 },
    /// Gegriffenen Wegpunkt nachführen
    UpdateWaypointDrag { pos: glam::Vec2 },
    /// Wegpunkt-Drag beenden
    EndWaypointDrag,
    /// Rechteck am Ankerpunkt aufziehen
    BeginRectDraw { pos: glam::Vec2 },
    /// Gegenecke des unfertigen Rechtecks nachführen
    UpdateRectDraw { pos: glam::Vec2 },
    /// Rechteck abschließen (Orientierung fixieren, Minimalgröße klemmen)
    FinishRectDraw { pos: glam::Vec2 },
    /// Punkt an den unfertigen Pfad anhängen
    AppendPathPoint { pos: glam::Vec2 },
    /// Unfertigen Pfad als Korridor committen (<2 Punkte: verwerfen)
    FinalizePendingPath,
    /// Resize-Drag beginnen (Handle-Suche im Handler; kein Treffer = No-Op)
    BeginResizeDrag { pos: glam::Vec2 },
    /// Aktives Resize mit kumulativem Delta nachführen
    UpdateResizeDrag { pos: glam::Vec2 },
    /// Resize-Drag beenden
    EndResizeDrag,
    /// Wegpunkte, Constraints und History leeren
    ClearAll,
    /// Letzte Erstellung rückgängig machen
    Undo,
    /// Rückgängig gemachte Erstellung wiederherstellen
    Redo,
    /// Viewport-Größe setzen
    SetViewport { size: [f32; 2] },
    /// Trajektorie aus Wire-Triplets übernehmen (validiert im Handler)
    SetTrajectory { samples: Vec<[f64; 3]> },
    /// Replay starten
    StartReplay,
    /// Replay stoppen (inkl. Hover-Teardown)
    StopReplay,
    /// Replay auf Zeitpunkt positionieren
    SeekReplay { time: f64 },
    /// Einen kooperativen Replay-Frame ausführen
    ReplayFrame,
    /// Standard-Korridorbreite (normalisiert) setzen
    SetCorridorDefaultWidth { width_norm: f32 },
}
