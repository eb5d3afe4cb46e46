//! Use-Case: Patches aus dem Eigenschaften-Panel anwenden.

use crate::app::events::{ArrowPatch, ShapePatch};
use crate::app::AppState;
use crate::core::{Arrow, ArrowKind, ShapeKind};

/// Versatz des injizierten Kontrollpunkts über der Streckenmitte.
const CONTROL_POINT_LIFT: f32 = 25.0;

/// Wendet einen Patch auf eine Form an.
///
/// Gesperrte Formen nehmen ausschließlich das `locked`-Feld an; alle
/// anderen Felder des Patches werden verworfen.
pub fn update_shape(state: &mut AppState, id: u64, patch: ShapePatch) {
    let Some(shape) = state.board.find_shape_mut(id) else {
        log::warn!("Form {} nicht gefunden, Patch verworfen", id);
        return;
    };

    if shape.locked {
        let Some(locked) = patch.locked else {
            log::debug!("Form {} ist gesperrt, Patch verworfen", id);
            return;
        };
        shape.locked = locked;
        state.record_document_snapshot();
        log::info!("Form {} {}", id, lock_label(locked));
        return;
    }

    if let Some(pos) = patch.pos {
        shape.pos = pos;
    }
    if let Some(size) = patch.size {
        shape.size = size;
    }
    if let Some(color) = patch.color {
        shape.color = color;
    }
    if let Some(text) = patch.text {
        shape.text = text;
    }
    if let Some(rotation) = patch.rotation {
        shape.rotation = rotation;
    }
    if let Some(locked) = patch.locked {
        shape.locked = locked;
    }
    if let ShapeKind::DirectionalArrow {
        style,
        bidirectional,
        line_width,
    } = &mut shape.kind
    {
        if let Some(new_style) = patch.glyph_style {
            *style = new_style;
        }
        if let Some(new_bidirectional) = patch.glyph_bidirectional {
            *bidirectional = new_bidirectional;
        }
        if let Some(new_line_width) = patch.glyph_line_width {
            *line_width = new_line_width;
        }
    }

    state.record_document_snapshot();
    log::debug!("Form {} aktualisiert", id);
}

/// Wendet einen Patch auf einen Pfeil an.
///
/// Gesperrte Pfeile nehmen ausschließlich das `locked`-Feld an. Ein
/// Pfeilart-Wechsel im Patch zieht das `curved`-Flag und die
/// Kontrollpunkt-Injektion nach.
pub fn update_arrow(state: &mut AppState, id: u64, patch: ArrowPatch) {
    let Some(arrow) = state.board.find_arrow_mut(id) else {
        log::warn!("Pfeil {} nicht gefunden, Patch verworfen", id);
        return;
    };

    if arrow.locked {
        let Some(locked) = patch.locked else {
            log::debug!("Pfeil {} ist gesperrt, Patch verworfen", id);
            return;
        };
        arrow.locked = locked;
        state.record_document_snapshot();
        log::info!("Pfeil {} {}", id, lock_label(locked));
        return;
    }

    if let Some(kind) = patch.kind {
        apply_arrow_kind(arrow, kind);
    }
    if let Some(start) = patch.start {
        arrow.start = start;
    }
    if let Some(end) = patch.end {
        arrow.end = end;
    }
    if let Some(control) = patch.control {
        arrow.control = Some(control);
    }
    if let Some(head_style) = patch.head_style {
        arrow.head_style = head_style;
    }
    if let Some(color) = patch.color {
        arrow.color = color;
    }
    if let Some(length) = patch.length {
        arrow.length = length;
    }
    if let Some(line_width) = patch.line_width {
        arrow.line_width = line_width;
    }
    if let Some(rotation) = patch.rotation {
        arrow.rotation = rotation;
    }
    if let Some(locked) = patch.locked {
        arrow.locked = locked;
    }

    state.record_document_snapshot();
    log::debug!("Pfeil {} aktualisiert", id);
}

/// Pfeilart-Wechsel wie im Eigenschaften-Panel:
/// - `Curved` setzt das Kurven-Flag und legt bei Bedarf einen
///   Kontrollpunkt oberhalb der Streckenmitte an.
/// - `Straight` löscht nur das Flag; der Kontrollpunkt bleibt für einen
///   späteren Rückwechsel erhalten.
/// - `Bidirectional` ändert ausschließlich die Pfeilart.
fn apply_arrow_kind(arrow: &mut Arrow, kind: ArrowKind) {
    arrow.kind = kind;
    match kind {
        ArrowKind::Curved => {
            arrow.curved = true;
            if arrow.control.is_none() {
                let mid = arrow.midpoint();
                arrow.control = Some(glam::vec2(mid.x, mid.y - CONTROL_POINT_LIFT));
            }
        }
        ArrowKind::Straight => arrow.curved = false,
        ArrowKind::Bidirectional => {}
    }
}

fn lock_label(locked: bool) -> &'static str {
    if locked {
        "gesperrt"
    } else {
        "entsperrt"
    }
}
