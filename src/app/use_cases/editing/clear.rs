//! Use-Case: Board leeren.

use crate::app::AppState;
use crate::core::Selection;

/// Entfernt alle Formen, Pfeile und Gruppen.
///
/// Der leere Zustand wird als Undo-Schritt festgehalten und ist damit
/// rückgängig machbar.
pub fn clear_board(state: &mut AppState) {
    let removed = state.board.element_count();
    state.board.clear();
    state.selection = Selection::None;
    state.record_document_snapshot();
    log::info!("Board geleert ({} Elemente entfernt)", removed);
}
