//! Handler für den Drag-Lifecycle auf dem Board.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ArrowHandle, ResizeHandle};

/// Startet das Verschieben einer Form.
pub fn begin_shape_drag(state: &mut AppState, id: u64, grab_offset: glam::Vec2) {
    use_cases::gesture::begin_shape_drag(state, id, grab_offset);
}

/// Startet das Skalieren einer Form über einen Griff.
pub fn begin_resize(state: &mut AppState, id: u64, handle: ResizeHandle) {
    use_cases::gesture::begin_resize(state, id, handle);
}

/// Startet das Rotieren einer Form.
pub fn begin_rotate(state: &mut AppState, id: u64) {
    use_cases::gesture::begin_rotate(state, id);
}

/// Startet das Ziehen eines Pfeilpunkts oder der Pfeillinie.
pub fn begin_arrow_edit(state: &mut AppState, id: u64, handle: ArrowHandle, pos: glam::Vec2) {
    use_cases::gesture::begin_arrow_edit(state, id, handle, pos);
}

/// Setzt die laufende Geste mit einer neuen Zeigerposition fort.
pub fn drag_move(state: &mut AppState, pos: glam::Vec2) {
    use_cases::gesture::drag_move(state, pos);
}

/// Beendet die laufende Geste.
pub fn end_drag(state: &mut AppState) {
    use_cases::gesture::end_drag(state);
}
