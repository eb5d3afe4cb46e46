//! Reines Hit-Testing in Board-Koordinaten.
//!
//! Alle Tests arbeiten auf unrotierten Bounding-Boxen; die Rotation
//! einer Form wirkt nur auf die Darstellung, nicht auf die Trefferfläche.

use glam::Vec2;

use super::arrow::Arrow;
use super::shape::{Shape, ShapeKind};

/// Kantenlänge der quadratischen Griff-Flächen in Board-Einheiten.
pub const HANDLE_SIZE: f32 = 8.0;
/// Abstand des Rotationsgriffs über der Oberkante einer Form.
pub const ROTATION_HANDLE_OFFSET: f32 = 20.0;
/// Halbe Kantenlänge der Pfeilpunkt-Griffe (Test je Achse).
pub const ARROW_HANDLE_RADIUS: f32 = 4.0;
/// Maximaler Abstand für Treffer auf einer Pfeillinie.
pub const LINE_HIT_DISTANCE: f32 = 5.0;
/// Bounding-Box-Erweiterung für Richtungspfeil-Glyphen.
pub const GLYPH_HIT_MARGIN: f32 = 10.0;
/// Abtastschritte für Treffer auf gekrümmten Pfeilen.
const CURVE_SAMPLES: u32 = 50;

/// Die acht Resize-Griffe einer Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleRight,
    BottomRight,
    BottomMiddle,
    BottomLeft,
    MiddleLeft,
}

impl ResizeHandle {
    /// Alle Griffe in fester Testreihenfolge (im Uhrzeigersinn ab oben links).
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopMiddle,
        ResizeHandle::TopRight,
        ResizeHandle::MiddleRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomMiddle,
        ResizeHandle::BottomLeft,
        ResizeHandle::MiddleLeft,
    ];

    /// Position des Griffs auf der Bounding-Box der Form.
    pub fn position(&self, shape: &Shape) -> Vec2 {
        let (min, max) = shape.bounds();
        let cx = (min.x + max.x) / 2.0;
        let cy = (min.y + max.y) / 2.0;
        match self {
            ResizeHandle::TopLeft => Vec2::new(min.x, min.y),
            ResizeHandle::TopMiddle => Vec2::new(cx, min.y),
            ResizeHandle::TopRight => Vec2::new(max.x, min.y),
            ResizeHandle::MiddleRight => Vec2::new(max.x, cy),
            ResizeHandle::BottomRight => Vec2::new(max.x, max.y),
            ResizeHandle::BottomMiddle => Vec2::new(cx, max.y),
            ResizeHandle::BottomLeft => Vec2::new(min.x, max.y),
            ResizeHandle::MiddleLeft => Vec2::new(min.x, cy),
        }
    }
}

/// Griff einer selektierten Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeHandle {
    /// Einer der acht Resize-Griffe
    Resize(ResizeHandle),
    /// Rotationsgriff über der Oberkante
    Rotate,
}

/// Griff eines selektierten Pfeils, in Test-Prioritätsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHandle {
    /// Startpunkt
    Start,
    /// Endpunkt
    End,
    /// Kontrollpunkt (nur gekrümmte Pfeile)
    Control,
    /// Die Linie selbst — verschiebt den ganzen Pfeil
    Line,
}

/// Treffer der Element-Suche an einer Board-Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementHit {
    /// Eine Form, per Flächen-Test getroffen
    Shape(u64),
    /// Ein Pfeil samt getroffenem Griff
    Arrow { id: u64, handle: ArrowHandle },
}

/// Position des Rotationsgriffs einer Form.
pub fn rotation_handle_position(shape: &Shape) -> Vec2 {
    Vec2::new(
        shape.pos.x + shape.size.x / 2.0,
        shape.pos.y - ROTATION_HANDLE_OFFSET,
    )
}

/// Testet die neun Griffe einer Form in fester Reihenfolge.
///
/// Jeder Griff ist eine 8×8-Fläche um seine Position; die Ränder
/// zählen als Treffer.
pub fn shape_handle_at(shape: &Shape, pos: Vec2) -> Option<ShapeHandle> {
    let half = HANDLE_SIZE / 2.0;
    for handle in ResizeHandle::ALL {
        let hp = handle.position(shape);
        if (pos.x - hp.x).abs() <= half && (pos.y - hp.y).abs() <= half {
            return Some(ShapeHandle::Resize(handle));
        }
    }
    let rp = rotation_handle_position(shape);
    if (pos.x - rp.x).abs() <= half && (pos.y - rp.y).abs() <= half {
        return Some(ShapeHandle::Rotate);
    }
    None
}

/// Flächen-Test einer Form; Richtungspfeil-Glyphen erhalten
/// zusätzlichen Rand, weil ihre Strichfläche die Box kaum füllt.
pub fn point_in_shape(shape: &Shape, pos: Vec2) -> bool {
    let margin = if matches!(shape.kind, ShapeKind::DirectionalArrow { .. }) {
        GLYPH_HIT_MARGIN
    } else {
        0.0
    };
    let (min, max) = shape.bounds();
    pos.x >= min.x - margin
        && pos.x <= max.x + margin
        && pos.y >= min.y - margin
        && pos.y <= max.y + margin
}

/// Testet die Griffe eines Pfeils: Start, Ende, Kontrollpunkt, dann
/// die Linie selbst. Pfeile haben keinen Flächen-Test.
pub fn arrow_handle_at(arrow: &Arrow, pos: Vec2) -> Option<ArrowHandle> {
    if near_point(arrow.start, pos) {
        return Some(ArrowHandle::Start);
    }
    if near_point(arrow.end, pos) {
        return Some(ArrowHandle::End);
    }
    let curve = arrow.curved.then_some(arrow.control).flatten();
    if let Some(control) = curve {
        if near_point(control, pos) {
            return Some(ArrowHandle::Control);
        }
    }
    let on_line = if curve.is_some() {
        near_curve(arrow, pos)
    } else {
        near_segment(arrow.start, arrow.end, pos)
    };
    on_line.then_some(ArrowHandle::Line)
}

/// Erstes Element an einer Position.
///
/// Formen gewinnen vor Pfeilen und werden in Array-Reihenfolge
/// getestet — der erste Treffer zählt, nicht der zuletzt gezeichnete.
pub fn element_at(shapes: &[Shape], arrows: &[Arrow], pos: Vec2) -> Option<ElementHit> {
    for shape in shapes {
        if point_in_shape(shape, pos) {
            return Some(ElementHit::Shape(shape.id));
        }
    }
    for arrow in arrows {
        if let Some(handle) = arrow_handle_at(arrow, pos) {
            return Some(ElementHit::Arrow {
                id: arrow.id,
                handle,
            });
        }
    }
    None
}

/// Per-Achsen-Test um einen Punktgriff.
fn near_point(point: Vec2, pos: Vec2) -> bool {
    (pos.x - point.x).abs() <= ARROW_HANDLE_RADIUS
        && (pos.y - point.y).abs() <= ARROW_HANDLE_RADIUS
}

/// Projektionstest gegen die Strecke Start–Ende: Lotfußpunkt muss
/// innerhalb der Strecke liegen, euklidischer Abstand maximal
/// [`LINE_HIT_DISTANCE`].
fn near_segment(start: Vec2, end: Vec2, pos: Vec2) -> bool {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq <= f32::EPSILON {
        return pos.distance_squared(start) <= LINE_HIT_DISTANCE * LINE_HIT_DISTANCE;
    }
    let t = (pos - start).dot(seg) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let closest = start + seg * t;
    pos.distance_squared(closest) <= LINE_HIT_DISTANCE * LINE_HIT_DISTANCE
}

/// Abtasttest entlang der Bézier-Kurve mit 51 Stützstellen; der
/// Abstand wird je Achse geprüft.
fn near_curve(arrow: &Arrow, pos: Vec2) -> bool {
    for i in 0..=CURVE_SAMPLES {
        let t = i as f32 / CURVE_SAMPLES as f32;
        let point = arrow.point_at(t);
        if (pos.x - point.x).abs() <= LINE_HIT_DISTANCE
            && (pos.y - point.y).abs() <= LINE_HIT_DISTANCE
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arrow::{ArrowKind, HeadStyle};
    use crate::core::shape::GlyphStyle;

    fn shape_at(id: u64, x: f32, y: f32, w: f32, h: f32) -> Shape {
        Shape {
            id,
            kind: ShapeKind::Rectangle,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color: [76, 175, 80],
            text: String::new(),
            rotation: 0.0,
            locked: false,
            group_id: None,
        }
    }

    fn straight_arrow(id: u64, start: Vec2, end: Vec2) -> Arrow {
        Arrow {
            id,
            start,
            end,
            kind: ArrowKind::Straight,
            head_style: HeadStyle::Triangle,
            color: [76, 175, 80],
            curved: false,
            control: None,
            line_width: 2.0,
            rotation: 0.0,
            locked: false,
            group_id: None,
            length: 100.0,
            width: 2.0,
        }
    }

    fn curved_arrow(id: u64, start: Vec2, control: Vec2, end: Vec2) -> Arrow {
        let mut arrow = straight_arrow(id, start, end);
        arrow.kind = ArrowKind::Curved;
        arrow.curved = true;
        arrow.control = Some(control);
        arrow
    }

    #[test]
    fn test_punkt_in_form_raender_inklusive() {
        let shape = shape_at(1, 50.0, 50.0, 100.0, 100.0);
        assert!(point_in_shape(&shape, Vec2::new(50.0, 50.0)), "Ecke zählt");
        assert!(point_in_shape(&shape, Vec2::new(150.0, 150.0)), "Gegenecke zählt");
        assert!(!point_in_shape(&shape, Vec2::new(150.1, 100.0)));
    }

    #[test]
    fn test_glyph_bekommt_trefferrand() {
        let mut glyph = shape_at(1, 100.0, 100.0, 100.0, 100.0);
        glyph.kind = ShapeKind::DirectionalArrow {
            style: GlyphStyle::Straight,
            bidirectional: false,
            line_width: 2.0,
        };
        assert!(
            point_in_shape(&glyph, Vec2::new(95.0, 150.0)),
            "10 Einheiten Rand um Glyph-Boxen"
        );
        assert!(!point_in_shape(&glyph, Vec2::new(89.0, 150.0)));

        let plain = shape_at(2, 100.0, 100.0, 100.0, 100.0);
        assert!(
            !point_in_shape(&plain, Vec2::new(95.0, 150.0)),
            "Andere Formen ohne Rand"
        );
    }

    #[test]
    fn test_griff_reihenfolge_oben_links_vor_rotation() {
        // Griffzentren bei (100,100) für TopLeft und (150,80) für Rotate.
        let shape = shape_at(1, 100.0, 100.0, 100.0, 100.0);
        assert_eq!(
            shape_handle_at(&shape, Vec2::new(100.0, 100.0)),
            Some(ShapeHandle::Resize(ResizeHandle::TopLeft))
        );
        assert_eq!(
            shape_handle_at(&shape, Vec2::new(150.0, 80.0)),
            Some(ShapeHandle::Rotate),
            "Rotationsgriff 20 Einheiten über der Oberkante"
        );
        assert_eq!(shape_handle_at(&shape, Vec2::new(150.0, 150.0)), None);
    }

    #[test]
    fn test_griff_flaeche_acht_mal_acht_inklusive() {
        let shape = shape_at(1, 100.0, 100.0, 100.0, 100.0);
        // BottomRight liegt bei (200,200); ±4 je Achse zählt noch.
        assert_eq!(
            shape_handle_at(&shape, Vec2::new(204.0, 196.0)),
            Some(ShapeHandle::Resize(ResizeHandle::BottomRight))
        );
        assert_eq!(shape_handle_at(&shape, Vec2::new(204.5, 200.0)), None);
    }

    #[test]
    fn test_gerade_linie_treffer_und_verfehlung() {
        let arrow = straight_arrow(1, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(50.0, 3.0)),
            Some(ArrowHandle::Line),
            "3 Einheiten Abstand trifft"
        );
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(50.0, 10.0)),
            None,
            "10 Einheiten Abstand verfehlt"
        );
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(120.0, 0.0)),
            None,
            "Hinter dem Endpunkt liegt kein Treffer"
        );
    }

    #[test]
    fn test_punktgriffe_vor_liniengriff() {
        let arrow = straight_arrow(1, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(2.0, 2.0)),
            Some(ArrowHandle::Start)
        );
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(98.0, -3.0)),
            Some(ArrowHandle::End)
        );
    }

    #[test]
    fn test_kurve_treffer_am_scheitel() {
        let arrow = curved_arrow(
            1,
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, -25.0),
            Vec2::new(100.0, 0.0),
        );
        // Scheitelpunkt der Kurve liegt bei (50, -12.5).
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(50.0, -12.5)),
            Some(ArrowHandle::Line)
        );
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(50.0, 50.0)),
            None,
            "Die Sehne der Kurve ist kein Treffer"
        );
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(52.0, -23.0)),
            Some(ArrowHandle::Control)
        );
    }

    #[test]
    fn test_kurvenflag_ohne_kontrollpunkt_faellt_auf_gerade_zurueck() {
        let mut arrow = straight_arrow(1, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        arrow.curved = true;
        assert_eq!(
            arrow_handle_at(&arrow, Vec2::new(50.0, 3.0)),
            Some(ArrowHandle::Line)
        );
    }

    #[test]
    fn test_formen_gewinnen_vor_pfeilen() {
        let shapes = vec![shape_at(1, 40.0, -10.0, 20.0, 20.0)];
        let arrows = vec![straight_arrow(2, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0))];
        assert_eq!(
            element_at(&shapes, &arrows, Vec2::new(50.0, 0.0)),
            Some(ElementHit::Shape(1)),
            "Die Form liegt über der Pfeillinie"
        );
    }

    #[test]
    fn test_erste_form_im_array_gewinnt() {
        let shapes = vec![
            shape_at(1, 50.0, 50.0, 100.0, 100.0),
            shape_at(2, 50.0, 50.0, 100.0, 100.0),
        ];
        assert_eq!(
            element_at(&shapes, &[], Vec2::new(100.0, 100.0)),
            Some(ElementHit::Shape(1)),
            "Bei Überlappung zählt die Array-Reihenfolge"
        );
    }

    #[test]
    fn test_pfeiltreffer_liefert_griff() {
        let arrows = vec![straight_arrow(9, Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0))];
        assert_eq!(
            element_at(&[], &arrows, Vec2::new(1.0, 1.0)),
            Some(ElementHit::Arrow {
                id: 9,
                handle: ArrowHandle::Start
            })
        );
        assert_eq!(element_at(&[], &arrows, Vec2::new(400.0, 400.0)), None);
    }
}
