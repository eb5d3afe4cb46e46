//! Use-Case: Neue Elemente aus der Palette einfügen.

use crate::app::state::ShapeTool;
use crate::app::AppState;
use crate::core::{Arrow, GlyphStyle, Selection, Shape, ShapeKind};

/// Einfügeposition für neue Formen.
const NEW_SHAPE_POS: glam::Vec2 = glam::Vec2::new(50.0, 50.0);
/// Standardgröße für neue Formen.
const NEW_SHAPE_SIZE: glam::Vec2 = glam::Vec2::new(100.0, 100.0);

/// Fügt eine neue Form mit den aktuellen Paletten-Einstellungen ein.
///
/// Die Form landet oben links auf dem Board und wird selektiert.
pub fn add_shape(state: &mut AppState) {
    let kind = match state.palette.tool {
        ShapeTool::Rectangle => ShapeKind::Rectangle,
        ShapeTool::Circle => ShapeKind::Circle,
        ShapeTool::Triangle => ShapeKind::Triangle,
        ShapeTool::Polygon => ShapeKind::Polygon,
        ShapeTool::DirectionalArrow => ShapeKind::DirectionalArrow {
            style: if state.palette.glyph_curved {
                GlyphStyle::Curved
            } else {
                GlyphStyle::Straight
            },
            bidirectional: state.palette.glyph_bidirectional,
            line_width: 2.0,
        },
    };

    let id = state.board.next_element_id();
    let shape = Shape {
        id,
        kind,
        pos: NEW_SHAPE_POS,
        size: NEW_SHAPE_SIZE,
        color: state.palette.color,
        text: state.palette.text.clone(),
        rotation: 0.0,
        locked: false,
        group_id: None,
    };
    let label = shape.kind.label();
    state.board.shapes.push(shape);
    state.selection = Selection::Shape(id);
    state.record_document_snapshot();

    log::info!(
        "{} {} an Position ({:.1}, {:.1}) eingefügt",
        label,
        id,
        NEW_SHAPE_POS.x,
        NEW_SHAPE_POS.y
    );
}

/// Fügt einen neuen Pfeil mit den aktuellen Paletten-Einstellungen ein.
///
/// Neue Pfeile starten immer als gerade Strecke; das `curved`-Flag wird
/// erst beim Pfeilart-Wechsel im Eigenschaften-Panel gesetzt.
pub fn add_arrow(state: &mut AppState) {
    let id = state.board.next_element_id();
    let arrow = Arrow {
        id,
        start: glam::vec2(100.0, 100.0),
        end: glam::vec2(200.0, 100.0),
        kind: state.palette.arrow_kind,
        head_style: state.palette.head_style,
        color: state.palette.color,
        curved: false,
        control: None,
        line_width: 2.0,
        rotation: 0.0,
        locked: false,
        group_id: None,
        length: 100.0,
        width: 2.0,
    };
    state.board.arrows.push(arrow);
    state.selection = Selection::Arrow(id);
    state.record_document_snapshot();

    log::info!("Pfeil {} (100.0, 100.0)→(200.0, 100.0) eingefügt", id);
}
