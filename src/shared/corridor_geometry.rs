//! Reine Geometrie-Funktionen für Korridor-Polygone.
//!
//! Layer-neutral: kann von `core`, `app` und anderen Layer-übergreifenden
//! Modulen importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Unterhalb dieser Länge gilt ein summierter Normalenvektor als degeneriert
/// (nahezu 180°-Richtungsumkehr zwischen zwei Segmenten).
const NORMAL_EPSILON: f32 = 1e-6;

/// Linke Perpendikulare der normalisierten Segmentrichtung `a → b`.
///
/// Segmente der Länge 0 liefern den Nullvektor.
fn segment_normal(a: Vec2, b: Vec2) -> Vec2 {
    let dir = b - a;
    let len = dir.length();
    if len < NORMAL_EPSILON {
        return Vec2::ZERO;
    }
    (dir / len).perp()
}

/// Baut das geschlossene Puffer-Polygon um eine Polyline mit konstanter
/// Halbbreite.
///
/// Pro Punkt wird eine Miter-Normale berechnet: Endpunkte nutzen die
/// Perpendikulare ihres einzigen Nachbarsegments, innere Punkte das
/// renormalisierte Mittel der beiden Segment-Perpendikularen. Fällt die
/// Summe unter ein Epsilon (nahezu vollständige Richtungsumkehr), wird auf
/// die Perpendikulare des eingehenden Segments zurückgegriffen.
///
/// Linker Rand in Vorwärtsreihenfolge plus rechter Rand rückwärts ergeben
/// das geschlossene Polygon. Es findet keine Selbstschnitt-Reparatur statt;
/// scharfe Umkehrungen können sich selbst schneiden (akzeptierte Näherung).
///
/// Weniger als 2 Punkte ergeben ein leeres Polygon.
pub fn build_corridor_polygon(points: &[Vec2], half_width: f32) -> Vec<Vec2> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let mut normals = Vec::with_capacity(n);

    for i in 0..n {
        let normal = if i == 0 {
            segment_normal(points[0], points[1])
        } else if i == n - 1 {
            segment_normal(points[n - 2], points[n - 1])
        } else {
            let incoming = segment_normal(points[i - 1], points[i]);
            let outgoing = segment_normal(points[i], points[i + 1]);
            let summed = incoming + outgoing;
            if summed.length() < NORMAL_EPSILON {
                incoming
            } else {
                summed.normalize()
            }
        };
        normals.push(normal);
    }

    let mut polygon = Vec::with_capacity(2 * n);
    for i in 0..n {
        polygon.push(points[i] + normals[i] * half_width);
    }
    for i in (0..n).rev() {
        polygon.push(points[i] - normals[i] * half_width);
    }
    polygon
}

/// Euklidischer Abstand von `p` zum Segment `a → b` (geklemmte Projektion).
///
/// Segmente der Länge 0 degenerieren zum Punktabstand.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < NORMAL_EPSILON * NORMAL_EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Minimaler Abstand von `p` zu einer Polyline (Segment für Segment).
///
/// Leere Polylines liefern `f32::INFINITY`, einzelne Punkte den Punktabstand.
pub fn distance_point_to_polyline(p: Vec2, points: &[Vec2]) -> f32 {
    match points.len() {
        0 => f32::INFINITY,
        1 => p.distance(points[0]),
        _ => points
            .windows(2)
            .map(|w| distance_point_to_segment(p, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}
