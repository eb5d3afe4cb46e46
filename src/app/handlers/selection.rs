//! Handler für Selektions-Commands.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert eine Form ohne Geste.
pub fn select_shape(state: &mut AppState, id: u64) {
    use_cases::selection::select_shape(state, id);
}

/// Selektiert einen Pfeil ohne Geste.
pub fn select_arrow(state: &mut AppState, id: u64) {
    use_cases::selection::select_arrow(state, id);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
