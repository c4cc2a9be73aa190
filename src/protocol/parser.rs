//! Parser für das Trajektorien-Wire-Format.
//!
//! Wire-Format: JSON-Array aus `[x_px, y_px, t_seconds]`-Triplets mit
//! kumulativen, nicht-fallenden Zeitstempeln (erstes Sample konventionell
//! bei t=0, letztes = Gesamtdauer).

use anyhow::{bail, Context};
use glam::Vec2;

use crate::core::{Trajectory, TrajectorySample};

/// Validiert Wire-Triplets und baut die Trajektorie.
///
/// Fehler bei: leerer Folge, nicht-endlichen Werten, rückläufiger Zeit.
pub fn trajectory_from_triplets(samples: &[[f64; 3]]) -> anyhow::Result<Trajectory> {
    if samples.is_empty() {
        bail!("leere Trajektorie");
    }

    let mut out = Vec::with_capacity(samples.len());
    let mut prev_t = f64::NEG_INFINITY;
    for (i, triplet) in samples.iter().enumerate() {
        let [x, y, t] = *triplet;
        if !x.is_finite() || !y.is_finite() || !t.is_finite() {
            bail!("Sample {} enthält nicht-endliche Werte", i);
        }
        if t < prev_t {
            bail!("Zeitstempel fällt bei Sample {} ({} < {})", i, t, prev_t);
        }
        prev_t = t;
        out.push(TrajectorySample {
            pos: Vec2::new(x as f32, y as f32),
            t,
        });
    }
    Ok(Trajectory::from_samples(out))
}

/// Parst das JSON-Wire-Format (`[[x, y, t], …]`).
pub fn parse_trajectory_json(json: &str) -> anyhow::Result<Trajectory> {
    let triplets: Vec<[f64; 3]> =
        serde_json::from_str(json).context("Trajektorien-JSON nicht lesbar")?;
    trajectory_from_triplets(&triplets)
}
