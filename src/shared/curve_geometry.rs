//! Reine Geometrie-Funktionen für Kurven und rotierte Konturen.
//!
//! Layer-neutral: wird vom Draw-List-Aufbau für Bildschirm und Export
//! genutzt und kennt weder Board noch Optionen.

use glam::Vec2;

use crate::core::quadratic_point;

/// Tastet eine quadratische Bézier-Kurve gleichmäßig ab.
///
/// Liefert `segments + 1` Punkte inklusive Start und Ende.
pub fn sample_quadratic(start: Vec2, control: Vec2, end: Vec2, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| quadratic_point(start, control, end, i as f32 / segments as f32))
        .collect()
}

/// Tastet einen Kreisbogen ab (Winkel in Radiant, y-Achse nach unten).
///
/// Liefert `segments + 1` Punkte von `start_angle` bis `end_angle`.
pub fn sample_arc(
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    segments: u32,
) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = start_angle + (end_angle - start_angle) * i as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            center + Vec2::new(cos, sin) * radius
        })
        .collect()
}

/// Eckpunkte eines regelmäßigen Polygons, beginnend bei `start_angle`.
pub fn regular_polygon(center: Vec2, radius: f32, sides: u32, start_angle: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = start_angle + i as f32 * std::f32::consts::TAU / sides as f32;
            let (sin, cos) = angle.sin_cos();
            center + Vec2::new(cos, sin) * radius
        })
        .collect()
}

/// Abtastpunkte einer achsenparallelen Ellipse als geschlossene Kontur.
///
/// Liefert `segments` Punkte ohne Duplikat des Startpunkts.
pub fn sample_ellipse(center: Vec2, radii: Vec2, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / segments as f32;
            let (sin, cos) = angle.sin_cos();
            center + Vec2::new(cos * radii.x, sin * radii.y)
        })
        .collect()
}

/// Rotiert einen Punkt um ein Zentrum (Winkel in Radiant).
pub fn rotate_around(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Rotiert alle Punkte in place um ein Zentrum (Winkel in Radiant).
pub fn rotate_points(points: &mut [Vec2], center: Vec2, angle: f32) {
    for p in points.iter_mut() {
        *p = rotate_around(*p, center, angle);
    }
}
