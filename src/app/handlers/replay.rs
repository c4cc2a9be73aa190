//! Handler für Trajektorie und Replay-Steuerung.

use crate::app::events::{EditorEvent, Notifier};
use crate::core::Trajectory;
use crate::protocol::parser;
use crate::replay::{ReplayEngine, StepOutcome};

/// Übernimmt eine Trajektorie aus Wire-Triplets `[x_px, y_px, t_s]`.
///
/// Fehlerhafte Eingaben (leer, nicht-endliche Werte, rückläufige Zeit)
/// degradieren zu einer leeren Trajektorie; Replay-Operationen werden
/// dann zu No-Ops; ein `TrajectoryLoaded`-Event gibt es nur bei Erfolg.
pub fn set_trajectory(
    engine: &mut ReplayEngine,
    notifier: &mut dyn Notifier,
    samples: Vec<[f64; 3]>,
) {
    match parser::trajectory_from_triplets(&samples) {
        Ok(trajectory) => {
            let count = engine.set_trajectory(trajectory);
            log::info!("Trajektorie übernommen ({} Samples)", count);
            notifier.notify(EditorEvent::TrajectoryLoaded { count });
        }
        Err(e) => {
            log::warn!("Trajektorie verworfen: {}", e);
            engine.set_trajectory(Trajectory::empty());
        }
    }
}

/// Startet das Replay (No-Op ohne Trajektorie).
pub fn start(engine: &mut ReplayEngine) {
    engine.start();
}

/// Stoppt das Replay inklusive Hover-Teardown und meldet den Stop.
pub fn stop(engine: &mut ReplayEngine, notifier: &mut dyn Notifier) {
    engine.stop();
    notifier.notify(EditorEvent::ReplayStopped);
}

/// Springt auf einen Zeitpunkt (Sekunden), ohne das Playback anzufassen.
pub fn seek(engine: &mut ReplayEngine, time: f64) {
    match engine.seek(time) {
        Some(index) => log::debug!("Seek auf t={:.3}s → Sample {}", time, index),
        None => log::debug!("Seek ohne Trajektorie: No-Op"),
    }
}

/// Führt einen kooperativen Replay-Frame aus und meldet Fortschritt bzw.
/// das einmalige Komplett-Signal.
pub fn frame(engine: &mut ReplayEngine, notifier: &mut dyn Notifier) {
    match engine.step() {
        StepOutcome::Idle => {}
        StepOutcome::Progress {
            index,
            total,
            elapsed,
        } => notifier.notify(EditorEvent::ReplayProgress {
            current_index: index,
            total,
            elapsed,
        }),
        StepOutcome::Completed { index, total } => {
            notifier.notify(EditorEvent::ReplayProgress {
                current_index: index,
                total,
                elapsed: engine.trajectory().total_duration(),
            });
            notifier.notify(EditorEvent::ReplayComplete);
        }
    }
}
