//! Use-Case: Element löschen.

use crate::app::AppState;
use crate::core::Selection;

/// Entfernt ein Element (Form oder Pfeil) vom Board.
///
/// Eine darauf zeigende Selektion wird aufgehoben, verwaiste Gruppen
/// werden bereinigt.
pub fn delete_element(state: &mut AppState, id: u64) {
    if !state.board.remove_element(id) {
        log::warn!("Element {} nicht gefunden, nichts gelöscht", id);
        return;
    }

    if state.selection.element_id() == Some(id) {
        state.selection = Selection::None;
    }
    state.board.prune_empty_groups();
    state.record_document_snapshot();
    log::info!("Element {} gelöscht", id);
}
