//! Editor-Modus und Drag-Zustand der Eingabe-State-Machine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{KeepKind, NormRect};
use crate::shared::RectHandle;

/// Aktives Editor-Werkzeug (Modus der Eingabe-State-Machine).
///
/// Moduswechsel werden extern ausgelöst (Tool-Auswahl im Panel); die
/// Machine lebt für die gesamte Editor-Lebensdauer, es gibt keinen
/// Terminalzustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// Standard: Eingaben laufen unverändert an das Dokument durch
    #[default]
    Passthrough,
    /// Klick platziert einen Wegpunkt
    AddWaypoint,
    /// Wegpunkt greifen und verschieben
    MoveWaypoint,
    /// Keep-In-Rechteck aufziehen
    DrawRectKeepIn,
    /// Keep-Out-Rechteck aufziehen
    DrawRectKeepOut,
    /// Keep-In-Pfadkorridor zeichnen (Klick für Klick)
    DrawPathKeepIn,
    /// Keep-Out-Pfadkorridor zeichnen
    DrawPathKeepOut,
    /// Handles greifen und Formen anpassen
    ResizeHandle,
    /// Replay-Ansicht (Eingaben laufen durch)
    Replay,
}

impl EditorMode {
    /// Ob der Modus exklusiven Input-Capture verlangt: der Host muss
    /// Default-Handling und Propagation der Dokument-Eingaben
    /// unterdrücken, solange dieser Wert `true` ist, damit Hover/Fokus-UI
    /// des Dokuments (z.B. Menüs) nicht durch das Overlay zusammenfällt.
    pub fn captures_input(self) -> bool {
        !matches!(self, EditorMode::Passthrough | EditorMode::Replay)
    }

    /// Keep-Art, falls der Modus ein Rechteck aufzieht.
    pub fn rect_keep(self) -> Option<KeepKind> {
        match self {
            EditorMode::DrawRectKeepIn => Some(KeepKind::KeepIn),
            EditorMode::DrawRectKeepOut => Some(KeepKind::KeepOut),
            _ => None,
        }
    }

    /// Keep-Art, falls der Modus einen Pfad zeichnet.
    pub fn path_keep(self) -> Option<KeepKind> {
        match self {
            EditorMode::DrawPathKeepIn => Some(KeepKind::KeepIn),
            EditorMode::DrawPathKeepOut => Some(KeepKind::KeepOut),
            _ => None,
        }
    }
}

/// Aktive Drag/Resize-Operation. Genau eine ist jederzeit aktiv; das Feld
/// gated alle Pointer-Move-Handler, ein zweiter paralleler Grab ist damit
/// konstruktiv unmöglich.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Wegpunkt wird verschoben
    MoveWaypoint { index: usize },
    /// Rechteck wird aufgezogen (Geometrie liegt im SceneModel)
    DrawRect,
    /// Rechteck-Resize; `start` ist der unveränderliche Snapshot vom
    /// Drag-Beginn, `origin_px` die Pointer-Position beim Greifen
    /// (für kumulative Deltas).
    ResizeRect {
        index: usize,
        handle: RectHandle,
        start: NormRect,
        origin_px: Vec2,
    },
    /// Korridor-Vertex wird verschoben
    ResizeCorridorVertex { index: usize, vertex: usize },
    /// Korridor-Breite wird verstellt; Snapshot-basiert wie beim Rechteck.
    /// `origin_dist_px` ist der Abstand Pointer→Mittellinie beim Greifen.
    ResizeCorridorWidth {
        index: usize,
        start_width: f32,
        origin_dist_px: f32,
    },
}

/// Zustand des aktuellen Editor-Werkzeugs.
#[derive(Debug, Default)]
pub struct EditorModeState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Aktive Drag/Resize-Operation
    pub drag: DragState,
}

impl EditorModeState {
    /// Erstellt den Standard-Zustand (Passthrough, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }
}
