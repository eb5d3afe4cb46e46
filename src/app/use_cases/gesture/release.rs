//! Use-Case: Laufende Geste beenden.

use crate::app::state::Gesture;
use crate::app::AppState;

/// Beendet die aktive Geste.
///
/// Die letzten committeten Werte bleiben stehen; ein eigener
/// Undo-Schritt entsteht beim Loslassen nicht mehr.
pub fn end_drag(state: &mut AppState) {
    if state.gesture.is_active() {
        state.gesture = Gesture::Idle;
        log::debug!("Geste beendet");
    }
}
