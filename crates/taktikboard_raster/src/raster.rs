//! Software-Rasterizer für die Display-List.
//!
//! Alle Primitive arbeiten als Pixel-Schleifen über die Bounding-Box
//! mit Bounds-Check und Alpha-Blending. Kein Anti-Aliasing; für
//! Export und Vorschaubilder in Originalauflösung ausreichend.

use anyhow::Result;
use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::draw::{Color, DrawOp};
use crate::font;

/// Rendert eine Display-List in ein neues RGBA-Bild.
///
/// Der Hintergrund ist deckend weiß; die Ops werden in
/// Listen-Reihenfolge gezeichnet.
pub fn render_ops(width: u32, height: u32, ops: &[DrawOp]) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    for op in ops {
        draw_op(&mut image, op);
    }
    image
}

/// Kodiert ein RGBA-Bild als PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}

fn draw_op(image: &mut RgbaImage, op: &DrawOp) {
    match op {
        DrawOp::FillRect { min, max, color } => fill_rect(image, *min, *max, *color),
        DrawOp::StrokeRect {
            min,
            max,
            width,
            color,
        } => stroke_rect(image, *min, *max, *width, *color),
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => fill_circle(image, *center, *radius, *color),
        DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        } => stroke_circle(image, *center, *radius, *width, *color),
        DrawOp::FillEllipse {
            center,
            radii,
            color,
        } => fill_ellipse(image, *center, *radii, *color),
        DrawOp::StrokeEllipse {
            center,
            radii,
            width,
            color,
        } => stroke_ellipse(image, *center, *radii, *width, *color),
        DrawOp::FillPolygon { points, color } => fill_polygon(image, points, *color),
        DrawOp::Polyline {
            points,
            width,
            color,
        } => polyline(image, points, *width, *color),
        DrawOp::DashedLine {
            points,
            width,
            dash,
            gap,
            color,
        } => dashed_polyline(image, points, *width, *dash, *gap, *color),
        DrawOp::Text {
            center,
            text,
            size,
            angle,
            color,
        } => {
            let scale = font::scale_for_size(*size);
            font::draw_text_centered(image, *center, text, *color, scale, *angle);
        }
    }
}

/// Setzt einen Pixel mit Bounds-Check und Alpha-Blending.
pub(crate) fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let alpha = color[3] as f32 / 255.0;
    if alpha >= 1.0 {
        image.put_pixel(x as u32, y as u32, Rgba(color));
        return;
    }
    if alpha <= 0.0 {
        return;
    }
    let bg = image.get_pixel(x as u32, y as u32);
    let inv = 1.0 - alpha;
    let blended = Rgba([
        (bg[0] as f32 * inv + color[0] as f32 * alpha) as u8,
        (bg[1] as f32 * inv + color[1] as f32 * alpha) as u8,
        (bg[2] as f32 * inv + color[2] as f32 * alpha) as u8,
        255,
    ]);
    image.put_pixel(x as u32, y as u32, blended);
}

// ── Flächen ─────────────────────────────────────────────────────────

fn fill_rect(image: &mut RgbaImage, min: Vec2, max: Vec2, color: Color) {
    let x0 = min.x.floor() as i32;
    let y0 = min.y.floor() as i32;
    let x1 = max.x.ceil() as i32;
    let y1 = max.y.ceil() as i32;

    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(image, x, y, color);
        }
    }
}

fn stroke_rect(image: &mut RgbaImage, min: Vec2, max: Vec2, width: f32, color: Color) {
    let half = (width / 2.0).max(0.5);
    let x0 = (min.x - half).floor() as i32;
    let y0 = (min.y - half).floor() as i32;
    let x1 = (max.x + half).ceil() as i32;
    let y1 = (max.y + half).ceil() as i32;

    for y in y0..y1 {
        for x in x0..x1 {
            let fx = x as f32 + 0.5;
            let fy = y as f32 + 0.5;
            let in_outer = fx >= min.x - half
                && fx <= max.x + half
                && fy >= min.y - half
                && fy <= max.y + half;
            let in_inner = fx > min.x + half
                && fx < max.x - half
                && fy > min.y + half
                && fy < max.y - half;
            if in_outer && !in_inner {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn fill_circle(image: &mut RgbaImage, center: Vec2, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let x0 = (center.x - radius).floor() as i32;
    let y0 = (center.y - radius).floor() as i32;
    let x1 = (center.x + radius).ceil() as i32;
    let y1 = (center.y + radius).ceil() as i32;
    let r_sq = radius * radius;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= r_sq {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn stroke_circle(image: &mut RgbaImage, center: Vec2, radius: f32, width: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let half = (width / 2.0).max(0.5);
    let outer = radius + half;
    let inner = (radius - half).max(0.0);
    let x0 = (center.x - outer).floor() as i32;
    let y0 = (center.y - outer).floor() as i32;
    let x1 = (center.x + outer).ceil() as i32;
    let y1 = (center.y + outer).ceil() as i32;
    let outer_sq = outer * outer;
    let inner_sq = inner * inner;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d_sq = p.distance_squared(center);
            if d_sq <= outer_sq && d_sq >= inner_sq {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn fill_ellipse(image: &mut RgbaImage, center: Vec2, radii: Vec2, color: Color) {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return;
    }
    let x0 = (center.x - radii.x).floor() as i32;
    let y0 = (center.y - radii.y).floor() as i32;
    let x1 = (center.x + radii.x).ceil() as i32;
    let y1 = (center.y + radii.y).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let nx = (x as f32 + 0.5 - center.x) / radii.x;
            let ny = (y as f32 + 0.5 - center.y) / radii.y;
            if nx * nx + ny * ny <= 1.0 {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

/// Ellipsen-Umriss als 64-Segment-Linienzug.
fn stroke_ellipse(image: &mut RgbaImage, center: Vec2, radii: Vec2, width: f32, color: Color) {
    const SEGMENTS: usize = 64;
    let mut points = Vec::with_capacity(SEGMENTS + 1);
    for i in 0..=SEGMENTS {
        let t = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        points.push(center + Vec2::new(t.cos() * radii.x, t.sin() * radii.y));
    }
    polyline(image, &points, width, color);
}

/// Scanline-Füllung nach Even-Odd-Regel.
fn fill_polygon(image: &mut RgbaImage, points: &[Vec2], color: Color) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let mut crossings: Vec<f32> = Vec::new();
    for y in (min_y.floor() as i32)..(max_y.ceil() as i32) {
        let sy = y as f32 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                let t = (sy - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|p, q| p.total_cmp(q));
        for pair in crossings.chunks_exact(2) {
            for x in (pair[0].round() as i32)..(pair[1].round() as i32) {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

// ── Linien ──────────────────────────────────────────────────────────

/// Dickes Liniensegment mit runden Kappen (Distanz-Test zur Strecke).
fn thick_segment(image: &mut RgbaImage, a: Vec2, b: Vec2, width: f32, color: Color) {
    let half = (width / 2.0).max(0.5);
    let x0 = (a.x.min(b.x) - half).floor() as i32;
    let y0 = (a.y.min(b.y) - half).floor() as i32;
    let x1 = (a.x.max(b.x) + half).ceil() as i32;
    let y1 = (a.y.max(b.y) + half).ceil() as i32;
    let ab = b - a;
    let len_sq = ab.length_squared();
    let half_sq = half * half;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let t = if len_sq > 0.0 {
                ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            if p.distance_squared(a + ab * t) <= half_sq {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn polyline(image: &mut RgbaImage, points: &[Vec2], width: f32, color: Color) {
    for pair in points.windows(2) {
        thick_segment(image, pair[0], pair[1], width, color);
    }
}

/// Gestrichelter Linienzug; die Dash-Phase läuft über Segmentgrenzen weiter.
fn dashed_polyline(
    image: &mut RgbaImage,
    points: &[Vec2],
    width: f32,
    dash: f32,
    gap: f32,
    color: Color,
) {
    if dash <= 0.0 || gap <= 0.0 {
        polyline(image, points, width, color);
        return;
    }
    let period = dash + gap;
    let mut phase = 0.0_f32;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = a.distance(b);
        if seg_len <= f32::EPSILON {
            continue;
        }
        let dir = (b - a) / seg_len;

        let mut pos = 0.0_f32;
        while pos < seg_len {
            let in_dash = phase < dash;
            let remaining = if in_dash { dash - phase } else { period - phase };
            let step = remaining.min(seg_len - pos);
            if step <= 0.0 {
                break;
            }
            if in_dash {
                thick_segment(image, a + dir * pos, a + dir * (pos + step), width, color);
            }
            pos += step;
            phase += step;
            if phase >= period {
                phase = 0.0;
            }
        }
    }
}
