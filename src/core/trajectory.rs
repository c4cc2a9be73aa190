//! Zeitgestempelte Trajektorien-Samples für das Replay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Sample der vorab berechneten Cursor-Trajektorie.
///
/// `t` ist die kumulative Zeit in Sekunden; das erste Sample liegt
/// konventionell bei 0, das letzte definiert die Gesamtdauer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub pos: Vec2,
    pub t: f64,
}

/// Zeitlich aufsteigend sortierte Sample-Folge.
///
/// Die Sortierung wird beim Parsen validiert (`protocol::parser`); der
/// Core-Typ setzt sie voraus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Erstellt eine Trajektorie aus validierten Samples.
    pub fn from_samples(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    /// Leere Trajektorie (Replay-Operationen werden zu No-Ops).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Gesamtdauer = Zeitstempel des letzten Samples.
    pub fn total_duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.t)
    }

    /// Index des letzten Samples mit `t <= elapsed` (binäre Suche).
    ///
    /// Liegt `elapsed` vor dem ersten Sample, wird Index 0 geliefert;
    /// hinter dem letzten Sample der letzte Index. `None` nur bei leerer
    /// Trajektorie.
    pub fn index_at(&self, elapsed: f64) -> Option<usize> {
        if self.samples.is_empty() {
            return None;
        }
        let count = self.samples.partition_point(|s| s.t <= elapsed);
        Some(count.saturating_sub(1))
    }

    /// Sample per Index.
    pub fn sample(&self, index: usize) -> Option<&TrajectorySample> {
        self.samples.get(index)
    }
}
