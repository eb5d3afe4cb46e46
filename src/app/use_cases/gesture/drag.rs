//! Use-Case: Laufende Geste mit neuer Zeigerposition fortsetzen.
//!
//! Jede committete Bewegung hält sofort einen Undo-Schritt fest. Ein
//! durchgezogener Drag erzeugt damit pro Move-Event einen Eintrag und
//! lässt sich schrittweise rückgängig machen.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::core::{clamp_to_board, ArrowHandle, ResizeHandle, BOARD_HEIGHT, BOARD_WIDTH};

/// Mindestkantenlänge beim Skalieren; kleinere Ergebnisse werden verworfen.
const MIN_SHAPE_SIZE: f32 = 10.0;

/// Verarbeitet eine Zeigerbewegung für die aktive Geste.
pub fn drag_move(state: &mut AppState, pos: glam::Vec2) {
    match state.gesture {
        Gesture::Idle => {}
        Gesture::DraggingShape { id, grab_offset } => move_shape(state, id, pos - grab_offset),
        Gesture::Resizing { id, handle } => resize_shape(state, id, handle, pos),
        Gesture::Rotating { id } => rotate_shape(state, id, pos),
        Gesture::EditingArrowPoint {
            id,
            handle,
            last_pos,
        } => edit_arrow(state, id, handle, last_pos, pos),
    }
}

/// Verschiebt die Form auf die Zielposition, begrenzt auf das Board.
fn move_shape(state: &mut AppState, id: u64, target: glam::Vec2) {
    let Some(shape) = state.board.find_shape_mut(id) else {
        log::warn!("Form {} während Drag verschwunden", id);
        return;
    };

    let max = glam::vec2(BOARD_WIDTH - shape.size.x, BOARD_HEIGHT - shape.size.y);
    shape.pos = target.min(max).max(glam::Vec2::ZERO);
    state.record_document_snapshot();
}

/// Skaliert die Form anhand der absoluten Zeigerposition.
///
/// Der Griff bestimmt, welche Kanten folgen; die gegenüberliegende
/// Kante bleibt stehen. Ergebnisse unter [`MIN_SHAPE_SIZE`] werden
/// komplett verworfen statt geklemmt.
fn resize_shape(state: &mut AppState, id: u64, handle: ResizeHandle, pos: glam::Vec2) {
    let Some(shape) = state.board.find_shape_mut(id) else {
        log::warn!("Form {} während Resize verschwunden", id);
        return;
    };

    let (min, max) = shape.bounds();
    let size = shape.size;
    let (new_pos, new_size) = match handle {
        ResizeHandle::TopLeft => (pos, max - pos),
        ResizeHandle::TopMiddle => (
            glam::vec2(min.x, pos.y),
            glam::vec2(size.x, max.y - pos.y),
        ),
        ResizeHandle::TopRight => (
            glam::vec2(min.x, pos.y),
            glam::vec2(pos.x - min.x, max.y - pos.y),
        ),
        ResizeHandle::MiddleRight => (min, glam::vec2(pos.x - min.x, size.y)),
        ResizeHandle::BottomRight => (min, pos - min),
        ResizeHandle::BottomMiddle => (min, glam::vec2(size.x, pos.y - min.y)),
        ResizeHandle::BottomLeft => (
            glam::vec2(pos.x, min.y),
            glam::vec2(max.x - pos.x, pos.y - min.y),
        ),
        ResizeHandle::MiddleLeft => (
            glam::vec2(pos.x, min.y),
            glam::vec2(max.x - pos.x, size.y),
        ),
    };

    if new_size.x > MIN_SHAPE_SIZE && new_size.y > MIN_SHAPE_SIZE {
        shape.pos = new_pos;
        shape.size = new_size;
        state.record_document_snapshot();
    }
}

/// Rotiert die Form auf den Winkel Zentrum→Zeiger.
///
/// Der Winkel wird roh in Grad gespeichert und kann negativ sein;
/// normalisiert wird erst bei Eingaben über das Eigenschaften-Panel.
fn rotate_shape(state: &mut AppState, id: u64, pos: glam::Vec2) {
    let Some(shape) = state.board.find_shape_mut(id) else {
        log::warn!("Form {} während Rotation verschwunden", id);
        return;
    };

    let center = shape.center();
    shape.rotation = (pos.y - center.y).atan2(pos.x - center.x).to_degrees();
    state.record_document_snapshot();
}

/// Zieht einen Pfeilpunkt oder verschiebt die ganze Linie.
///
/// Der Linien-Griff verschiebt Start, Ende und Kontrollpunkt um das
/// Zeiger-Delta, Punkt-Griffe setzen absolut. Alle Koordinaten werden
/// einzeln aufs Board begrenzt.
fn edit_arrow(
    state: &mut AppState,
    id: u64,
    handle: ArrowHandle,
    last_pos: glam::Vec2,
    pos: glam::Vec2,
) {
    let Some(arrow) = state.board.find_arrow_mut(id) else {
        log::warn!("Pfeil {} während Drag verschwunden", id);
        return;
    };

    match handle {
        ArrowHandle::Line => {
            let delta = pos - last_pos;
            arrow.start = clamp_to_board(arrow.start + delta);
            arrow.end = clamp_to_board(arrow.end + delta);
            if let Some(control) = arrow.control.as_mut() {
                *control = clamp_to_board(*control + delta);
            }
        }
        ArrowHandle::Start => arrow.start = clamp_to_board(pos),
        ArrowHandle::End => arrow.end = clamp_to_board(pos),
        ArrowHandle::Control => arrow.control = Some(clamp_to_board(pos)),
    }

    // Aktuelle Zeigerposition für die nächste Delta-Berechnung merken
    state.gesture = Gesture::EditingArrowPoint {
        id,
        handle,
        last_pos: pos,
    };
    state.record_document_snapshot();
}
