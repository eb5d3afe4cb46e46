//! Pfeile als Display-List: Linie, Spitzen und Griff-Overlay.

use glam::Vec2;
use taktikboard_raster::{Color, DrawOp};

use super::solid;
use crate::core::hit_test::{HANDLE_SIZE, ROTATION_HANDLE_OFFSET};
use crate::core::{Arrow, ArrowKind, HeadStyle};
use crate::shared::EditorOptions;
use crate::shared::curve_geometry::{rotate_around, rotate_points, sample_quadratic};

/// Abtastschritte der Bézier-Kurve.
const CURVE_SEGMENTS: u32 = 32;
/// Spitzenlänge bei Strichstärke 2; skaliert linear mit der Strichstärke.
const HEAD_BASE_LENGTH: f32 = 15.0;
/// Strich- und Lückenlänge der Kontrollpunkt-Führungslinie.
const GUIDE_DASH: f32 = 5.0;

/// Reiht einen Pfeil ein: Linie, Spitze(n), dann das Griff-Overlay.
///
/// Die Rotation dreht alles um den Mittelpunkt der Strecke Start–Ende,
/// Overlay eingeschlossen. Gesperrte Pfeile behalten ihre Strichstärke;
/// nur selektierte, entsperrte werden um 1 verbreitert.
pub fn push_arrow(
    ops: &mut Vec<DrawOp>,
    arrow: &Arrow,
    selected: bool,
    show_handles: bool,
    options: &EditorOptions,
) {
    let color = if selected {
        solid(options.selection_color)
    } else {
        solid(arrow.color)
    };
    let width = if !arrow.locked && selected {
        arrow.line_width + 1.0
    } else {
        arrow.line_width
    };
    let rotation = arrow.rotation.to_radians();
    let pivot = arrow.midpoint();
    let curve_control = arrow.curved.then_some(arrow.control).flatten();

    let mut line = match curve_control {
        Some(control) => sample_quadratic(arrow.start, control, arrow.end, CURVE_SEGMENTS),
        None => vec![arrow.start, arrow.end],
    };
    if rotation != 0.0 {
        rotate_points(&mut line, pivot, rotation);
    }
    ops.push(DrawOp::Polyline {
        points: line,
        width,
        color,
    });

    // Spitzenrichtung aus der Sehne Start–Ende, auch bei Kurven
    let chord = arrow.end - arrow.start;
    let direction = chord.y.atan2(chord.x);
    let head_length = HEAD_BASE_LENGTH * (arrow.line_width / 2.0);
    push_head(
        ops,
        arrow.head_style,
        arrow.end,
        direction,
        head_length,
        rotation,
        pivot,
        color,
    );
    if arrow.kind == ArrowKind::Bidirectional {
        push_head(
            ops,
            arrow.head_style,
            arrow.start,
            direction + std::f32::consts::PI,
            head_length,
            rotation,
            pivot,
            color,
        );
    }

    if show_handles {
        push_overlay(ops, arrow, curve_control, width, pivot, rotation, options);
    }
}

/// Eine Pfeilspitze an `tip`, ausgerichtet entlang `direction`.
#[allow(clippy::too_many_arguments)]
fn push_head(
    ops: &mut Vec<DrawOp>,
    style: HeadStyle,
    tip: Vec2,
    direction: f32,
    length: f32,
    rotation: f32,
    pivot: Vec2,
    color: Color,
) {
    match style {
        HeadStyle::Circle => {
            let center = if rotation == 0.0 {
                tip
            } else {
                rotate_around(tip, pivot, rotation)
            };
            ops.push(DrawOp::FillCircle {
                center,
                radius: length / 2.0,
                color,
            });
        }
        HeadStyle::Triangle => {
            let mut points = vec![
                tip,
                tip - length * Vec2::from_angle(direction - std::f32::consts::FRAC_PI_6),
                tip - length * Vec2::from_angle(direction + std::f32::consts::FRAC_PI_6),
            ];
            if rotation != 0.0 {
                rotate_points(&mut points, pivot, rotation);
            }
            ops.push(DrawOp::FillPolygon { points, color });
        }
        HeadStyle::Diamond => {
            let mut points = vec![
                tip,
                tip - length * Vec2::from_angle(direction - std::f32::consts::FRAC_PI_4),
                tip - 1.5 * length * Vec2::from_angle(direction),
                tip - length * Vec2::from_angle(direction + std::f32::consts::FRAC_PI_4),
            ];
            if rotation != 0.0 {
                rotate_points(&mut points, pivot, rotation);
            }
            ops.push(DrawOp::FillPolygon { points, color });
        }
    }
}

/// Griff-Overlay eines selektierten, entsperrten Pfeils.
///
/// Punktgriffe an Start, Ende und Kontrollpunkt; bei aktiver Kurve eine
/// gestrichelte Führungslinie über den Kontrollpunkt; dazu der
/// Rotationsanzeiger über dem Mittelpunkt. Alle Striche erben die
/// Strichstärke der Linie.
fn push_overlay(
    ops: &mut Vec<DrawOp>,
    arrow: &Arrow,
    curve_control: Option<Vec2>,
    width: f32,
    pivot: Vec2,
    rotation: f32,
    options: &EditorOptions,
) {
    let selection = solid(options.selection_color);
    let fill = solid(options.handle_fill_color);
    let radius = HANDLE_SIZE / 2.0;
    let rot = |p: Vec2| {
        if rotation == 0.0 {
            p
        } else {
            rotate_around(p, pivot, rotation)
        }
    };

    push_point_handle(ops, rot(arrow.start), radius, width, fill, selection);
    push_point_handle(ops, rot(arrow.end), radius, width, fill, selection);
    if let Some(control) = curve_control {
        push_point_handle(ops, rot(control), radius, width, fill, selection);
        ops.push(DrawOp::DashedLine {
            points: vec![rot(arrow.start), rot(control), rot(arrow.end)],
            width,
            dash: GUIDE_DASH,
            gap: GUIDE_DASH,
            color: selection,
        });
    }

    // Rotationsanzeiger: rein dekorativ, kein Griff dahinter
    let dot = rot(Vec2::new(pivot.x, pivot.y - ROTATION_HANDLE_OFFSET));
    ops.push(DrawOp::FillCircle {
        center: dot,
        radius,
        color: selection,
    });
    ops.push(DrawOp::StrokeCircle {
        center: dot,
        radius,
        width,
        color: selection,
    });
    ops.push(DrawOp::Polyline {
        points: vec![rot(pivot), dot],
        width,
        color: selection,
    });
}

/// Weißer Punktgriff mit Rand in Selektionsfarbe.
fn push_point_handle(
    ops: &mut Vec<DrawOp>,
    center: Vec2,
    radius: f32,
    width: f32,
    fill: Color,
    stroke: Color,
) {
    ops.push(DrawOp::FillCircle {
        center,
        radius,
        color: fill,
    });
    ops.push(DrawOp::StrokeCircle {
        center,
        radius,
        width,
        color: stroke,
    });
}
