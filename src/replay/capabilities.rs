//! Injizierte Fähigkeiten des Replay-Engines.
//!
//! Der Engine ist von jeder konkreten UI-Baum-Implementierung entkoppelt:
//! "oberstes Element am Punkt", Event-Dispatch und Low-Level-Injection
//! kommen als Capabilities vom Host. Der Engine funktioniert korrekt,
//! wenn der Injector komplett fehlt.

use glam::Vec2;

use super::events::PointerEventKind;

/// Opaker Bezeichner eines interaktiven Elements im Host-UI-Baum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Monotone Zeitquelle in Sekunden.
pub trait Clock {
    fn now(&self) -> f64;
}

/// System-Uhr relativ zum Erstellzeitpunkt.
#[derive(Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Liefert das oberste interaktive Element an einer Pixelposition.
pub trait HitTargetResolver {
    /// Oberstes Element am Punkt, `None` wenn dort nichts Interaktives liegt.
    fn topmost_at(&mut self, pos: Vec2) -> Option<TargetId>;

    /// Ob das Element noch im UI-Baum hängt. Leave-Events an bereits
    /// entfernte Elemente werden unterdrückt.
    fn is_attached(&self, target: TargetId) -> bool;
}

/// Dispatcht einzelne Pointer-Events auf ein Ziel-Element.
///
/// Die Reihenfolge der Aufrufe ist für Hover-abhängige UI bindend; der
/// Engine ruft exakt in nativer Browser-Ordnung auf.
pub trait InputEventSink {
    fn emit(&mut self, target: TargetId, kind: PointerEventKind, pos: Vec2);
}

/// Optionale Low-Level-Cursor-Injection (z.B. Debugger-Protokoll), damit
/// natives CSS-Hover der simulierten Position folgt. Best-effort: Fehler
/// werden vom Engine geschluckt.
pub trait LowLevelInputInjector {
    fn move_cursor(&mut self, pos: Vec2) -> anyhow::Result<()>;
}

/// Resolver ohne UI-Baum (Headless-Host, Tests).
#[derive(Debug, Default)]
pub struct NullResolver;

impl HitTargetResolver for NullResolver {
    fn topmost_at(&mut self, _pos: Vec2) -> Option<TargetId> {
        None
    }

    fn is_attached(&self, _target: TargetId) -> bool {
        false
    }
}

/// Sink, der Events verwirft (Headless-Host).
#[derive(Debug, Default)]
pub struct NullSink;

impl InputEventSink for NullSink {
    fn emit(&mut self, _target: TargetId, _kind: PointerEventKind, _pos: Vec2) {}
}
