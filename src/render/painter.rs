//! Zeichnet eine Display-List auf den egui-Painter.
//!
//! Die Abbildung Board → Bildschirm ist uniform skaliert und zentriert
//! (Letterboxing); alle Operationen werden auf die Board-Fläche
//! geclippt. Strichstärken skalieren mit.

use eframe::egui;
use glam::Vec2;
use taktikboard_raster::{Color, DrawOp};

use crate::core::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::shared::curve_geometry::sample_ellipse;

/// Abtastschritte für Ellipsen, die egui nicht nativ kennt.
const ELLIPSE_SEGMENTS: u32 = 48;

/// Uniforme Abbildung der Board-Fläche auf einen Bildschirmausschnitt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapping {
    /// Bildschirmposition der Board-Ecke (0,0)
    pub origin: egui::Pos2,
    /// Bildschirm-Pixel pro Board-Einheit
    pub scale: f32,
}

impl ViewportMapping {
    /// Passt die Board-Fläche zentriert in einen Bildschirmausschnitt ein.
    pub fn fit(rect: egui::Rect) -> Self {
        let scale = (rect.width() / BOARD_WIDTH)
            .min(rect.height() / BOARD_HEIGHT)
            .max(f32::EPSILON);
        let size = egui::vec2(BOARD_WIDTH * scale, BOARD_HEIGHT * scale);
        Self {
            origin: rect.center() - size / 2.0,
            scale,
        }
    }

    /// Board-Koordinaten → Bildschirm.
    pub fn board_to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + p.x * self.scale,
            self.origin.y + p.y * self.scale,
        )
    }

    /// Bildschirm → Board-Koordinaten.
    pub fn screen_to_board(&self, p: egui::Pos2) -> Vec2 {
        Vec2::new(
            (p.x - self.origin.x) / self.scale,
            (p.y - self.origin.y) / self.scale,
        )
    }

    /// Board-Fläche in Bildschirm-Koordinaten.
    pub fn board_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin,
            egui::vec2(BOARD_WIDTH * self.scale, BOARD_HEIGHT * self.scale),
        )
    }
}

/// Zeichnet die komplette Display-List.
pub fn paint_ops(painter: &egui::Painter, mapping: ViewportMapping, ops: &[DrawOp]) {
    let painter = painter.with_clip_rect(mapping.board_rect());
    for op in ops {
        paint_op(&painter, mapping, op);
    }
}

fn paint_op(painter: &egui::Painter, mapping: ViewportMapping, op: &DrawOp) {
    let s = mapping.scale;
    match op {
        DrawOp::FillRect { min, max, color } => {
            painter.rect_filled(screen_rect(mapping, *min, *max), 0.0, color32(*color));
        }
        DrawOp::StrokeRect {
            min,
            max,
            width,
            color,
        } => {
            painter.rect_stroke(
                screen_rect(mapping, *min, *max),
                0.0,
                egui::Stroke::new(width * s, color32(*color)),
                egui::StrokeKind::Middle,
            );
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => {
            painter.circle_filled(mapping.board_to_screen(*center), radius * s, color32(*color));
        }
        DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        } => {
            painter.circle_stroke(
                mapping.board_to_screen(*center),
                radius * s,
                egui::Stroke::new(width * s, color32(*color)),
            );
        }
        DrawOp::FillEllipse {
            center,
            radii,
            color,
        } => {
            let points = ellipse_points(mapping, *center, *radii);
            painter.add(egui::Shape::convex_polygon(
                points,
                color32(*color),
                egui::Stroke::NONE,
            ));
        }
        DrawOp::StrokeEllipse {
            center,
            radii,
            width,
            color,
        } => {
            let points = ellipse_points(mapping, *center, *radii);
            painter.add(egui::Shape::closed_line(
                points,
                egui::Stroke::new(width * s, color32(*color)),
            ));
        }
        DrawOp::FillPolygon { points, color } => {
            // Der Editor reiht nur konvexe Polygone ein; der Rasterizer
            // kann auch konkave.
            painter.add(egui::Shape::convex_polygon(
                screen_points(mapping, points),
                color32(*color),
                egui::Stroke::NONE,
            ));
        }
        DrawOp::Polyline {
            points,
            width,
            color,
        } => {
            painter.add(egui::Shape::line(
                screen_points(mapping, points),
                egui::Stroke::new(width * s, color32(*color)),
            ));
        }
        DrawOp::DashedLine {
            points,
            width,
            dash,
            gap,
            color,
        } => {
            painter.extend(egui::Shape::dashed_line(
                &screen_points(mapping, points),
                egui::Stroke::new(width * s, color32(*color)),
                dash * s,
                gap * s,
            ));
        }
        DrawOp::Text {
            center,
            text,
            size,
            angle,
            color,
        } => {
            let galley = painter.layout_no_wrap(
                text.clone(),
                egui::FontId::proportional(size * s),
                color32(*color),
            );
            // Obere linke Ecke so versetzen, dass das Zentrum nach der
            // Rotation auf `center` liegt.
            let half = galley.size() / 2.0;
            let (sin, cos) = angle.sin_cos();
            let offset = egui::vec2(
                -(half.x * cos - half.y * sin),
                -(half.x * sin + half.y * cos),
            );
            let pos = mapping.board_to_screen(*center) + offset;
            painter.add(
                egui::epaint::TextShape::new(pos, galley, color32(*color)).with_angle(*angle),
            );
        }
    }
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

fn screen_rect(mapping: ViewportMapping, min: Vec2, max: Vec2) -> egui::Rect {
    egui::Rect::from_min_max(mapping.board_to_screen(min), mapping.board_to_screen(max))
}

fn screen_points(mapping: ViewportMapping, points: &[Vec2]) -> Vec<egui::Pos2> {
    points.iter().map(|p| mapping.board_to_screen(*p)).collect()
}

fn ellipse_points(mapping: ViewportMapping, center: Vec2, radii: Vec2) -> Vec<egui::Pos2> {
    screen_points(mapping, &sample_ellipse(center, radii, ELLIPSE_SEGMENTS))
}
