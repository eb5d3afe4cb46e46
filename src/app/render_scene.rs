//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Bildschirm-Frame und PNG-Export rufen beide hierher; was exportiert
/// wird, ist exakt das, was der Frame zeigt.
pub fn build(state: &AppState) -> RenderScene<'_> {
    RenderScene {
        board: &state.board,
        selection: state.selection,
        options: &state.options,
    }
}
