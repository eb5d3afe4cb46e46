//! Formen als Display-List: Körper, Beschriftung und Griff-Overlay.
//!
//! Rotation wird hier aufgelöst: rotierte Rechtecke und Ellipsen werden
//! zu Polygonen abgeflacht, bevor sie in die Liste kommen. Die
//! Trefferflächen in `core::hit_test` bleiben davon unberührt.

use glam::Vec2;
use taktikboard_raster::{Color, DrawOp, rgb};

use super::solid;
use crate::core::hit_test::{HANDLE_SIZE, ResizeHandle, rotation_handle_position};
use crate::core::{GlyphStyle, Shape, ShapeKind};
use crate::shared::EditorOptions;
use crate::shared::curve_geometry::{
    regular_polygon, rotate_around, rotate_points, sample_ellipse, sample_quadratic,
};

/// Strichstärke unselektierter Formen.
const STROKE_WIDTH: f32 = 2.0;
/// Strichstärke selektierter Formen; gilt auch für das Griff-Overlay.
const SELECTED_STROKE_WIDTH: f32 = 3.0;
/// Schrifthöhe der Beschriftung in Board-Einheiten.
const LABEL_SIZE: f32 = 14.0;
/// Länge der Glyph-Spitzen.
const GLYPH_HEAD_LENGTH: f32 = 15.0;
/// Halber Öffnungswinkel der Glyph-Spitzen.
const GLYPH_HEAD_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
/// Abtastschritte für die Kontur rotierter Ellipsen.
const ELLIPSE_SEGMENTS: u32 = 48;
/// Abtastschritte der Glyph-Kurve.
const CURVE_SEGMENTS: u32 = 32;

/// Reiht eine Form ein: Körper, dann Beschriftung, dann Griffe.
///
/// `selected` färbt die Kontur in der Selektionsfarbe und verbreitert
/// den Strich; `show_handles` hängt zusätzlich das Griff-Overlay an
/// (selektiert und nicht gesperrt).
pub fn push_shape(
    ops: &mut Vec<DrawOp>,
    shape: &Shape,
    selected: bool,
    show_handles: bool,
    options: &EditorOptions,
) {
    let angle = shape.rotation.to_radians();
    let center = shape.center();
    let fill = solid(shape.color);
    let stroke = if selected {
        solid(options.selection_color)
    } else {
        rgb(0, 0, 0)
    };
    let stroke_width = if selected {
        SELECTED_STROKE_WIDTH
    } else {
        STROKE_WIDTH
    };
    let (min, max) = shape.bounds();

    match &shape.kind {
        ShapeKind::Rectangle => {
            if angle == 0.0 {
                ops.push(DrawOp::FillRect { min, max, color: fill });
                ops.push(DrawOp::StrokeRect {
                    min,
                    max,
                    width: stroke_width,
                    color: stroke,
                });
            } else {
                let corners = vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
                push_filled_outline(ops, corners, center, angle, fill, stroke_width, stroke);
            }
        }
        ShapeKind::Circle => {
            let radii = shape.size * 0.5;
            if angle == 0.0 {
                ops.push(DrawOp::FillEllipse {
                    center,
                    radii,
                    color: fill,
                });
                ops.push(DrawOp::StrokeEllipse {
                    center,
                    radii,
                    width: stroke_width,
                    color: stroke,
                });
            } else {
                let points = sample_ellipse(center, radii, ELLIPSE_SEGMENTS);
                push_filled_outline(ops, points, center, angle, fill, stroke_width, stroke);
            }
        }
        ShapeKind::Triangle => {
            let points = vec![
                Vec2::new(center.x, min.y),
                Vec2::new(max.x, max.y),
                Vec2::new(min.x, max.y),
            ];
            push_filled_outline(ops, points, center, angle, fill, stroke_width, stroke);
        }
        ShapeKind::Polygon => {
            let radius = shape.size.x.min(shape.size.y) / 2.0;
            let points = regular_polygon(center, radius, 6, -std::f32::consts::FRAC_PI_2);
            push_filled_outline(ops, points, center, angle, fill, stroke_width, stroke);
        }
        ShapeKind::DirectionalArrow {
            style,
            bidirectional,
            ..
        } => {
            push_glyph(ops, shape, *style, *bidirectional, selected, options);
        }
    }

    if !shape.text.is_empty() {
        ops.push(DrawOp::Text {
            center,
            text: shape.text.clone(),
            size: LABEL_SIZE,
            angle,
            color: rgb(0, 0, 0),
        });
    }

    if show_handles {
        push_handles(ops, shape, center, angle, options);
    }
}

/// Füllung plus geschlossene Kontur; rotiert die Punkte bei Bedarf.
fn push_filled_outline(
    ops: &mut Vec<DrawOp>,
    mut points: Vec<Vec2>,
    center: Vec2,
    angle: f32,
    fill: Color,
    stroke_width: f32,
    stroke: Color,
) {
    if angle != 0.0 {
        rotate_points(&mut points, center, angle);
    }
    let mut outline = points.clone();
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    ops.push(DrawOp::FillPolygon {
        points,
        color: fill,
    });
    ops.push(DrawOp::Polyline {
        points: outline,
        width: stroke_width,
        color: stroke,
    });
}

/// Richtungspfeil-Glyph quer durch die Bounding-Box.
///
/// Die Strichstärke ist fest 2 bzw. 3 bei Selektion; das
/// `line_width`-Feld der Form fließt hier nicht ein. Die Spitzen
/// bleiben achsenparallel zur Box, auch beim Kurvenstil.
fn push_glyph(
    ops: &mut Vec<DrawOp>,
    shape: &Shape,
    style: GlyphStyle,
    bidirectional: bool,
    selected: bool,
    options: &EditorOptions,
) {
    let color = if selected {
        solid(options.selection_color)
    } else {
        solid(shape.color)
    };
    let width = if selected {
        SELECTED_STROKE_WIDTH
    } else {
        STROKE_WIDTH
    };
    let angle = shape.rotation.to_radians();
    let center = shape.center();
    let (min, max) = shape.bounds();
    let start = Vec2::new(min.x, center.y);
    let end = Vec2::new(max.x, center.y);

    let mut line = match style {
        GlyphStyle::Curved => {
            sample_quadratic(start, Vec2::new(center.x, min.y), end, CURVE_SEGMENTS)
        }
        GlyphStyle::Straight => vec![start, end],
    };
    if angle != 0.0 {
        rotate_points(&mut line, center, angle);
    }
    ops.push(DrawOp::Polyline {
        points: line,
        width,
        color,
    });

    let dx = GLYPH_HEAD_LENGTH * GLYPH_HEAD_ANGLE.cos();
    let dy = GLYPH_HEAD_LENGTH * GLYPH_HEAD_ANGLE.sin();
    let mut head = vec![
        end,
        Vec2::new(end.x - dx, end.y - dy),
        Vec2::new(end.x - dx, end.y + dy),
    ];
    if angle != 0.0 {
        rotate_points(&mut head, center, angle);
    }
    ops.push(DrawOp::FillPolygon {
        points: head,
        color,
    });

    if bidirectional {
        let mut head = vec![
            start,
            Vec2::new(start.x + dx, start.y + dy),
            Vec2::new(start.x + dx, start.y - dy),
        ];
        if angle != 0.0 {
            rotate_points(&mut head, center, angle);
        }
        ops.push(DrawOp::FillPolygon {
            points: head,
            color,
        });
    }
}

/// Griff-Overlay: Rotationspunkt mit Stiel, dann acht weiße Quadrate.
///
/// Das Overlay dreht mit der Form mit; die Trefferflächen bleiben
/// achsenparallel.
fn push_handles(
    ops: &mut Vec<DrawOp>,
    shape: &Shape,
    center: Vec2,
    angle: f32,
    options: &EditorOptions,
) {
    let selection = solid(options.selection_color);
    let half = HANDLE_SIZE / 2.0;

    let rot = rotation_handle_position(shape);
    let dot = if angle == 0.0 {
        rot
    } else {
        rotate_around(rot, center, angle)
    };
    ops.push(DrawOp::FillCircle {
        center: dot,
        radius: half,
        color: selection,
    });
    ops.push(DrawOp::StrokeCircle {
        center: dot,
        radius: half,
        width: SELECTED_STROKE_WIDTH,
        color: selection,
    });

    let mut stem = vec![Vec2::new(center.x, shape.pos.y), rot];
    if angle != 0.0 {
        rotate_points(&mut stem, center, angle);
    }
    ops.push(DrawOp::Polyline {
        points: stem,
        width: SELECTED_STROKE_WIDTH,
        color: selection,
    });

    let fill = solid(options.handle_fill_color);
    for handle in ResizeHandle::ALL {
        let hp = handle.position(shape);
        let min = hp - Vec2::splat(half);
        let max = hp + Vec2::splat(half);
        if angle == 0.0 {
            ops.push(DrawOp::FillRect {
                min,
                max,
                color: fill,
            });
            ops.push(DrawOp::StrokeRect {
                min,
                max,
                width: SELECTED_STROKE_WIDTH,
                color: selection,
            });
        } else {
            let mut corners = vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
            rotate_points(&mut corners, center, angle);
            let mut outline = corners.clone();
            outline.push(corners[0]);
            ops.push(DrawOp::FillPolygon {
                points: corners,
                color: fill,
            });
            ops.push(DrawOp::Polyline {
                points: outline,
                width: SELECTED_STROKE_WIDTH,
                color: selection,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_shape() -> Shape {
        Shape {
            id: 1,
            kind: ShapeKind::Rectangle,
            pos: Vec2::new(100.0, 100.0),
            size: Vec2::new(100.0, 60.0),
            color: [76, 175, 80],
            text: String::new(),
            rotation: 0.0,
            locked: false,
            group_id: None,
        }
    }

    #[test]
    fn test_rechteck_fuellt_und_umrandet() {
        let mut ops = Vec::new();
        push_shape(&mut ops, &rect_shape(), false, false, &EditorOptions::default());
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], DrawOp::FillRect { .. }));
        match &ops[1] {
            DrawOp::StrokeRect { width, color, .. } => {
                assert_eq!(*width, STROKE_WIDTH);
                assert_eq!(&color[..3], &[0, 0, 0], "Unselektiert: schwarze Kontur");
            }
            other => panic!("StrokeRect erwartet, war {other:?}"),
        }
    }

    #[test]
    fn test_selektion_faerbt_und_verbreitert_die_kontur() {
        let mut ops = Vec::new();
        push_shape(&mut ops, &rect_shape(), true, false, &EditorOptions::default());
        match &ops[1] {
            DrawOp::StrokeRect { width, color, .. } => {
                assert_eq!(*width, SELECTED_STROKE_WIDTH);
                assert_eq!(&color[..3], &[37, 99, 235]);
            }
            other => panic!("StrokeRect erwartet, war {other:?}"),
        }
    }

    #[test]
    fn test_griff_overlay_hat_acht_quadrate_und_rotationspunkt() {
        let mut ops = Vec::new();
        push_shape(&mut ops, &rect_shape(), true, true, &EditorOptions::default());

        let squares = ops
            .iter()
            .filter(|op| {
                matches!(op, DrawOp::FillRect { min, max, color }
                    if max.x - min.x == HANDLE_SIZE
                        && max.y - min.y == HANDLE_SIZE
                        && &color[..3] == &[255, 255, 255])
            })
            .count();
        assert_eq!(squares, 8);

        let dot = ops.iter().find_map(|op| match op {
            DrawOp::FillCircle { center, radius, .. } if *radius == HANDLE_SIZE / 2.0 => {
                Some(*center)
            }
            _ => None,
        });
        assert_eq!(dot, Some(Vec2::new(150.0, 80.0)), "20 über der Oberkante");
    }

    #[test]
    fn test_rotierte_form_wird_zum_polygon() {
        let mut shape = rect_shape();
        shape.rotation = 45.0;
        let mut ops = Vec::new();
        push_shape(&mut ops, &shape, false, false, &EditorOptions::default());
        assert!(matches!(ops[0], DrawOp::FillPolygon { .. }));
        // Kontur als geschlossener Linienzug mit wiederholtem Startpunkt.
        if let DrawOp::Polyline { points, .. } = &ops[1] {
            assert_eq!(points.len(), 5);
            assert_eq!(points[0], points[4]);
        } else {
            panic!("Kontur-Linienzug erwartet");
        }
    }

    #[test]
    fn test_sechseck_radius_aus_kleinerer_seite() {
        let mut shape = rect_shape();
        shape.kind = ShapeKind::Polygon;
        let mut ops = Vec::new();
        push_shape(&mut ops, &shape, false, false, &EditorOptions::default());
        if let DrawOp::FillPolygon { points, .. } = &ops[0] {
            assert_eq!(points.len(), 6);
            // Radius 30 (Höhe 60), erster Eckpunkt senkrecht über dem Zentrum.
            assert!((points[0].x - 150.0).abs() < 1e-3);
            assert!((points[0].y - 100.0).abs() < 1e-3);
        } else {
            panic!("Sechseck als Polygon erwartet");
        }
    }

    #[test]
    fn test_glyph_ignoriert_linienbreite_der_form() {
        let mut shape = rect_shape();
        shape.kind = ShapeKind::DirectionalArrow {
            style: GlyphStyle::Straight,
            bidirectional: false,
            line_width: 9.0,
        };
        let mut ops = Vec::new();
        push_shape(&mut ops, &shape, false, false, &EditorOptions::default());
        if let DrawOp::Polyline { width, points, .. } = &ops[0] {
            assert_eq!(*width, STROKE_WIDTH, "Feste Strichstärke, nicht 9");
            assert_eq!(points[0], Vec2::new(100.0, 130.0));
            assert_eq!(points[1], Vec2::new(200.0, 130.0));
        } else {
            panic!("Glyph-Linie erwartet");
        }
        assert!(
            matches!(&ops[1], DrawOp::FillPolygon { points, .. } if points.len() == 3),
            "Dreieckige Spitze am Ende"
        );
    }

    #[test]
    fn test_bidirektionaler_glyph_bekommt_zweite_spitze() {
        let mut shape = rect_shape();
        shape.kind = ShapeKind::DirectionalArrow {
            style: GlyphStyle::Straight,
            bidirectional: true,
            line_width: 2.0,
        };
        let mut ops = Vec::new();
        push_shape(&mut ops, &shape, false, false, &EditorOptions::default());
        let heads = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPolygon { points, .. } if points.len() == 3))
            .count();
        assert_eq!(heads, 2);
    }

    #[test]
    fn test_beschriftung_zentriert_mit_rotation() {
        let mut shape = rect_shape();
        shape.text = "MS".to_string();
        shape.rotation = 90.0;
        let mut ops = Vec::new();
        push_shape(&mut ops, &shape, false, false, &EditorOptions::default());
        match ops.last() {
            Some(DrawOp::Text {
                center,
                text,
                size,
                angle,
                ..
            }) => {
                assert_eq!(*center, Vec2::new(150.0, 130.0));
                assert_eq!(text, "MS");
                assert_eq!(*size, LABEL_SIZE);
                assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
            }
            other => panic!("Text-Operation erwartet, war {other:?}"),
        }
    }
}
