//! Handler für Undo.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Die Selektion bleibt stehen; zeigt sie auf ein Element, das im
/// wiederhergestellten Stand fehlt, läuft sie beim nächsten Zugriff
/// einfach ins Leere.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.pop_undo() {
        prev.apply_to(&mut state.board);
        state.board.prune_empty_groups();
        state.mark_document_changed();
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}
