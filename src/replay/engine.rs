//! Zeitgesteuertes Replay einer vorab berechneten Cursor-Trajektorie.
//!
//! Unabhängig vom Editing: konsumiert eine `Trajectory` und die injizierten
//! Capabilities. Der Host treibt das Playback kooperativ per Frame-Tick;
//! Abbruch wird über das `playing`-Flag am Frame-Anfang erkannt und führt
//! trotzdem den Hover-Teardown aus.

use glam::Vec2;

use crate::core::Trajectory;

use super::capabilities::{Clock, HitTargetResolver, InputEventSink, LowLevelInputInjector, TargetId};
use super::events::{ENTER_SEQUENCE, LEAVE_SEQUENCE, MOVE_SEQUENCE};

/// Ergebnis eines kooperativen Replay-Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Kein Playback aktiv, keine weiteren Frames nötig
    Idle,
    /// Sample dispatcht, Playback läuft weiter
    Progress {
        index: usize,
        total: usize,
        elapsed: f64,
    },
    /// Letztes Sample dispatcht, Playback beendet (genau einmal pro Start)
    Completed { index: usize, total: usize },
}

/// Replay-Engine mit injizierten Capabilities.
pub struct ReplayEngine {
    trajectory: Trajectory,
    playing: bool,
    start_time: f64,
    /// Komplett-Signal bereits ausgelöst (idempotent pro `start()`)
    completed: bool,
    previous_target: Option<TargetId>,
    /// Zuletzt dispatchte Position (Teardown-Koordinaten, Render-Cursor)
    last_pos: Option<Vec2>,
    clock: Box<dyn Clock>,
    resolver: Box<dyn HitTargetResolver>,
    sink: Box<dyn InputEventSink>,
    injector: Option<Box<dyn LowLevelInputInjector>>,
}

impl ReplayEngine {
    /// Erstellt einen Engine mit injizierten Capabilities.
    pub fn new(
        clock: Box<dyn Clock>,
        resolver: Box<dyn HitTargetResolver>,
        sink: Box<dyn InputEventSink>,
        injector: Option<Box<dyn LowLevelInputInjector>>,
    ) -> Self {
        Self {
            trajectory: Trajectory::empty(),
            playing: false,
            start_time: 0.0,
            completed: false,
            previous_target: None,
            last_pos: None,
            clock,
            resolver,
            sink,
            injector,
        }
    }

    /// Aktuelle Trajektorie.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Ob gerade abgespielt wird.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Zuletzt dispatchte Cursor-Position (für Rendering).
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.last_pos
    }

    /// Übernimmt eine neue Trajektorie. Ein laufendes Replay wird vorher
    /// konsistent beendet (inkl. Hover-Teardown), damit kein Element in
    /// einem hängenden Hover-Zustand zurückbleibt.
    pub fn set_trajectory(&mut self, trajectory: Trajectory) -> usize {
        if self.playing || self.previous_target.is_some() {
            log::debug!("Trajektorie ersetzt laufendes Replay: Teardown");
            self.teardown_hover();
            self.playing = false;
        }
        self.completed = false;
        self.last_pos = None;
        self.trajectory = trajectory;
        self.trajectory.len()
    }

    /// Startet das Playback. Leere Trajektorie: No-Op, `false`.
    pub fn start(&mut self) -> bool {
        if self.trajectory.is_empty() {
            log::debug!("Replay-Start ohne Trajektorie: No-Op");
            return false;
        }
        self.playing = true;
        self.completed = false;
        self.start_time = self.clock.now();
        log::info!(
            "Replay gestartet ({} Samples, {:.2}s)",
            self.trajectory.len(),
            self.trajectory.total_duration()
        );
        true
    }

    /// Führt einen kooperativen Frame aus.
    ///
    /// Nach Ablauf der Gesamtdauer wird auf das letzte Sample gesnappt,
    /// dessen Event-Sequenz einmal dispatcht und genau einmal pro
    /// `start()` `Completed` geliefert, auch wenn der Scheduler danach
    /// noch Frames nachliefert.
    pub fn step(&mut self) -> StepOutcome {
        if !self.playing {
            return StepOutcome::Idle;
        }

        let elapsed = self.clock.now() - self.start_time;
        let total = self.trajectory.len();
        let duration = self.trajectory.total_duration();

        if elapsed >= duration {
            let index = total - 1;
            if let Some(sample) = self.trajectory.sample(index) {
                let pos = sample.pos;
                self.dispatch_sample(pos);
            }
            self.playing = false;
            if self.completed {
                return StepOutcome::Idle;
            }
            self.completed = true;
            log::info!("Replay vollständig abgespielt");
            return StepOutcome::Completed { index, total };
        }

        let Some(index) = self.trajectory.index_at(elapsed) else {
            self.playing = false;
            return StepOutcome::Idle;
        };
        if let Some(sample) = self.trajectory.sample(index) {
            let pos = sample.pos;
            self.dispatch_sample(pos);
        }
        StepOutcome::Progress {
            index,
            total,
            elapsed,
        }
    }

    /// Springt auf den Zeitpunkt `time` (Sekunden): gleiche Sample-Suche
    /// und gleicher Event-Dispatch wie ein Playback-Frame, ohne `playing`
    /// oder das Frame-Scheduling anzufassen.
    pub fn seek(&mut self, time: f64) -> Option<usize> {
        let index = self.trajectory.index_at(time)?;
        if let Some(sample) = self.trajectory.sample(index) {
            let pos = sample.pos;
            self.dispatch_sample(pos);
        }
        Some(index)
    }

    /// Stoppt das Playback und räumt den Hover-Zustand auf: ein noch
    /// angehängtes letztes Ziel erhält seine Leave-Familie, damit kein
    /// Element "gehovert" hängenbleibt.
    pub fn stop(&mut self) {
        self.playing = false;
        self.teardown_hover();
        self.last_pos = None;
        log::info!("Replay gestoppt");
    }

    /// Dispatcht die Event-Sequenz für eine Sample-Position in nativer
    /// Browser-Ordnung: Leave vor Enter, Move nach Enter.
    fn dispatch_sample(&mut self, pos: Vec2) {
        let target = self.resolver.topmost_at(pos);

        if target != self.previous_target {
            if let Some(prev) = self.previous_target {
                if self.resolver.is_attached(prev) {
                    for kind in LEAVE_SEQUENCE {
                        self.sink.emit(prev, kind, pos);
                    }
                }
            }
            if let Some(new_target) = target {
                for kind in ENTER_SEQUENCE {
                    self.sink.emit(new_target, kind, pos);
                }
            }
            self.previous_target = target;
        }

        if let Some(current) = self.previous_target {
            for kind in MOVE_SEQUENCE {
                self.sink.emit(current, kind, pos);
            }
        }

        self.last_pos = Some(pos);

        // Best-effort: Injector-Ausfall darf den Dispatch nie stören.
        if let Some(injector) = self.injector.as_mut() {
            if let Err(e) = injector.move_cursor(pos) {
                log::debug!("Low-Level-Injection fehlgeschlagen: {e}");
            }
        }
    }

    /// Leave-Familie für das letzte gehoverte Ziel (falls noch angehängt),
    /// mit Best-effort-Koordinaten der letzten Dispatch-Position.
    fn teardown_hover(&mut self) {
        if let Some(prev) = self.previous_target.take() {
            if self.resolver.is_attached(prev) {
                let pos = self.last_pos.unwrap_or(Vec2::ZERO);
                for kind in LEAVE_SEQUENCE {
                    self.sink.emit(prev, kind, pos);
                }
            }
        }
    }
}
