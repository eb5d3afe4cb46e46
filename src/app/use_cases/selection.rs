//! Use-Case-Funktionen für die Element-Selektion.

use crate::app::AppState;
use crate::core::Selection;

/// Selektiert eine Form, ohne eine Geste zu starten.
///
/// Wird für gesperrte Formen verwendet: sichtbar im Eigenschaften-Panel,
/// aber ohne Griffe und ohne Drag.
pub fn select_shape(state: &mut AppState, id: u64) {
    if state.board.find_shape(id).is_none() {
        log::warn!("Form {} nicht gefunden, Selektion unverändert", id);
        return;
    }
    state.selection = Selection::Shape(id);
    log::debug!("Form {} selektiert", id);
}

/// Selektiert einen Pfeil, ohne eine Geste zu starten.
pub fn select_arrow(state: &mut AppState, id: u64) {
    if state.board.find_arrow(id).is_none() {
        log::warn!("Pfeil {} nicht gefunden, Selektion unverändert", id);
        return;
    }
    state.selection = Selection::Arrow(id);
    log::debug!("Pfeil {} selektiert", id);
}

/// Hebt die Selektion auf (Klick ins Leere, Escape).
pub fn clear_selection(state: &mut AppState) {
    if state.selection.is_none() {
        return;
    }
    state.selection = Selection::None;
    log::debug!("Selektion aufgehoben");
}
