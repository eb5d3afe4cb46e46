//! Use-Case: Zeiger-Gesten starten.
//!
//! Jeder Gestenstart selektiert das betroffene Element. Gesperrte
//! Elemente erreichen diese Funktionen nicht — das Intent-Mapping
//! erzeugt für sie nur eine nackte Selektion.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::core::{ArrowHandle, ResizeHandle, Selection};

/// Startet das Verschieben einer Form.
///
/// `grab_offset` ist der Abstand Zeiger→Form-Ursprung beim Anfassen,
/// damit die Form nicht unter den Zeiger springt.
pub fn begin_shape_drag(state: &mut AppState, id: u64, grab_offset: glam::Vec2) {
    let Some(shape) = state.board.find_shape(id) else {
        log::warn!("Form {} nicht gefunden, keine Geste gestartet", id);
        return;
    };
    if shape.locked {
        log::warn!("Form {} ist gesperrt, keine Geste gestartet", id);
        return;
    }

    state.selection = Selection::Shape(id);
    state.gesture = Gesture::DraggingShape { id, grab_offset };
    log::debug!("Form {} wird verschoben", id);
}

/// Startet das Skalieren einer Form über einen Griff.
pub fn begin_resize(state: &mut AppState, id: u64, handle: ResizeHandle) {
    let Some(shape) = state.board.find_shape(id) else {
        log::warn!("Form {} nicht gefunden, keine Geste gestartet", id);
        return;
    };
    if shape.locked {
        log::warn!("Form {} ist gesperrt, keine Geste gestartet", id);
        return;
    }

    state.selection = Selection::Shape(id);
    state.gesture = Gesture::Resizing { id, handle };
    log::debug!("Form {} wird über {:?} skaliert", id, handle);
}

/// Startet das Rotieren einer Form um ihr Zentrum.
pub fn begin_rotate(state: &mut AppState, id: u64) {
    let Some(shape) = state.board.find_shape(id) else {
        log::warn!("Form {} nicht gefunden, keine Geste gestartet", id);
        return;
    };
    if shape.locked {
        log::warn!("Form {} ist gesperrt, keine Geste gestartet", id);
        return;
    }

    state.selection = Selection::Shape(id);
    state.gesture = Gesture::Rotating { id };
    log::debug!("Form {} wird rotiert", id);
}

/// Startet das Ziehen eines Pfeilpunkts oder der ganzen Pfeillinie.
pub fn begin_arrow_edit(state: &mut AppState, id: u64, handle: ArrowHandle, pos: glam::Vec2) {
    let Some(arrow) = state.board.find_arrow(id) else {
        log::warn!("Pfeil {} nicht gefunden, keine Geste gestartet", id);
        return;
    };
    if arrow.locked {
        log::warn!("Pfeil {} ist gesperrt, keine Geste gestartet", id);
        return;
    }

    state.selection = Selection::Arrow(id);
    state.gesture = Gesture::EditingArrowPoint {
        id,
        handle,
        last_pos: pos,
    };
    log::debug!("Pfeil {} wird über {:?} gezogen", id, handle);
}
