//! Spielfeld-Hintergrund als Display-List.
//!
//! Deterministisch und rein parametrisch: für eine Breite/Höhe entsteht
//! immer dieselbe Operationsfolge. Die Farben kommen aus den Optionen.

use glam::Vec2;
use taktikboard_raster::{Color, DrawOp};

use super::solid;
use crate::shared::EditorOptions;
use crate::shared::curve_geometry::sample_arc;

/// Strichstärke aller Feldmarkierungen.
const LINE_WIDTH: f32 = 2.0;
/// Breite eines Mähstreifens; Wiederholung alle zwei Breiten.
const STRIPE_WIDTH: f32 = 30.0;
/// Abstand der Außenlinien vom Board-Rand.
const BORDER_INSET: f32 = 10.0;
const CENTER_CIRCLE_RADIUS: f32 = 50.0;
/// Radius von Anstoß- und Elfmeterpunkt.
const SPOT_RADIUS: f32 = 3.0;
/// Tiefe des Strafraums ab der Torlinie und halbe Breite.
const PENALTY_AREA_DEPTH: f32 = 132.0;
const PENALTY_AREA_HALF: f32 = 110.0;
/// Tiefe des Torraums ab der Torlinie und halbe Breite.
const GOAL_AREA_DEPTH: f32 = 44.0;
const GOAL_AREA_HALF: f32 = 55.0;
/// Abstand des Elfmeterpunkts von der Torlinie.
const PENALTY_SPOT_DISTANCE: f32 = 88.0;
const PENALTY_ARC_RADIUS: f32 = 50.0;
/// Halber Öffnungswinkel des Strafraumbogens in Radiant.
const PENALTY_ARC_SPAN: f32 = 0.3;
const CORNER_RADIUS: f32 = 10.0;
/// Abtastschritte pro Kreisbogen.
const ARC_SEGMENTS: u32 = 16;

/// Reiht das komplette Spielfeld ein: Rasen, Streifen, Linien,
/// Mittelkreis, Strafräume und Eckbögen.
pub fn push_field(ops: &mut Vec<DrawOp>, width: f32, height: f32, options: &EditorOptions) {
    let line = solid(options.field_line_color);

    ops.push(DrawOp::FillRect {
        min: Vec2::ZERO,
        max: Vec2::new(width, height),
        color: solid(options.field_grass_color),
    });

    // Mähstreifen: jede zweite Bahn in der dunkleren Musterfarbe
    let stripe = solid(options.field_stripe_color);
    let mut x = 0.0;
    while x < width {
        ops.push(DrawOp::FillRect {
            min: Vec2::new(x, 0.0),
            max: Vec2::new(x + STRIPE_WIDTH, height),
            color: stripe,
        });
        x += STRIPE_WIDTH * 2.0;
    }

    ops.push(DrawOp::StrokeRect {
        min: Vec2::splat(BORDER_INSET),
        max: Vec2::new(width - BORDER_INSET, height - BORDER_INSET),
        width: LINE_WIDTH,
        color: line,
    });
    ops.push(DrawOp::Polyline {
        points: vec![
            Vec2::new(width / 2.0, BORDER_INSET),
            Vec2::new(width / 2.0, height - BORDER_INSET),
        ],
        width: LINE_WIDTH,
        color: line,
    });

    let center = Vec2::new(width / 2.0, height / 2.0);
    ops.push(DrawOp::StrokeCircle {
        center,
        radius: CENTER_CIRCLE_RADIUS,
        width: LINE_WIDTH,
        color: line,
    });
    ops.push(DrawOp::FillCircle {
        center,
        radius: SPOT_RADIUS,
        color: line,
    });

    push_penalty_area(ops, BORDER_INSET, height / 2.0, 1.0, line);
    push_penalty_area(ops, width - BORDER_INSET, height / 2.0, -1.0, line);
    push_corners(ops, width, height, line);
}

/// Eine Strafraum-Baugruppe an einer Torlinie.
///
/// `direction` +1 zeigt ins Feld (linkes Tor), −1 entsprechend rechts.
/// Straf- und Torraum sind zur Torlinie hin offene Linienzüge; der
/// Strafraumbogen um den Elfmeterpunkt öffnet sich zur Torlinie.
fn push_penalty_area(ops: &mut Vec<DrawOp>, x_pos: f32, y_pos: f32, direction: f32, line: Color) {
    ops.push(DrawOp::Polyline {
        points: vec![
            Vec2::new(x_pos, y_pos - PENALTY_AREA_HALF),
            Vec2::new(x_pos + direction * PENALTY_AREA_DEPTH, y_pos - PENALTY_AREA_HALF),
            Vec2::new(x_pos + direction * PENALTY_AREA_DEPTH, y_pos + PENALTY_AREA_HALF),
            Vec2::new(x_pos, y_pos + PENALTY_AREA_HALF),
        ],
        width: LINE_WIDTH,
        color: line,
    });
    ops.push(DrawOp::Polyline {
        points: vec![
            Vec2::new(x_pos, y_pos - GOAL_AREA_HALF),
            Vec2::new(x_pos + direction * GOAL_AREA_DEPTH, y_pos - GOAL_AREA_HALF),
            Vec2::new(x_pos + direction * GOAL_AREA_DEPTH, y_pos + GOAL_AREA_HALF),
            Vec2::new(x_pos, y_pos + GOAL_AREA_HALF),
        ],
        width: LINE_WIDTH,
        color: line,
    });

    let spot = Vec2::new(x_pos + direction * PENALTY_SPOT_DISTANCE, y_pos);
    ops.push(DrawOp::FillCircle {
        center: spot,
        radius: SPOT_RADIUS,
        color: line,
    });

    // Bogenmitte liegt auf der Feldachse Richtung Torlinie
    let base = if direction > 0.0 { std::f32::consts::PI } else { 0.0 };
    ops.push(DrawOp::Polyline {
        points: sample_arc(
            spot,
            PENALTY_ARC_RADIUS,
            base - PENALTY_ARC_SPAN,
            base + PENALTY_ARC_SPAN,
            ARC_SEGMENTS,
        ),
        width: LINE_WIDTH,
        color: line,
    });
}

/// Vier Viertelkreise an den Ecken der Außenlinien, jeweils ins Feld
/// geöffnet.
fn push_corners(ops: &mut Vec<DrawOp>, width: f32, height: f32, line: Color) {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    let corners = [
        (Vec2::new(BORDER_INSET, BORDER_INSET), 0.0, FRAC_PI_2),
        (Vec2::new(width - BORDER_INSET, BORDER_INSET), FRAC_PI_2, PI),
        (Vec2::new(BORDER_INSET, height - BORDER_INSET), 1.5 * PI, TAU),
        (
            Vec2::new(width - BORDER_INSET, height - BORDER_INSET),
            PI,
            1.5 * PI,
        ),
    ];
    for (center, from, to) in corners {
        ops.push(DrawOp::Polyline {
            points: sample_arc(center, CORNER_RADIUS, from, to, ARC_SEGMENTS),
            width: LINE_WIDTH,
            color: line,
        });
    }
}
