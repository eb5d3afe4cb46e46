//! Handler für Element-Editing und Paletten-Einstellungen.

use crate::app::events::{ArrowPatch, ShapePatch};
use crate::app::state::ShapeTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ArrowKind, HeadStyle};

/// Fügt eine neue Form mit den aktuellen Paletten-Einstellungen ein.
pub fn add_shape(state: &mut AppState) {
    use_cases::editing::add_shape(state);
}

/// Fügt einen neuen Pfeil mit den aktuellen Paletten-Einstellungen ein.
pub fn add_arrow(state: &mut AppState) {
    use_cases::editing::add_arrow(state);
}

/// Wendet einen Panel-Patch auf eine Form an.
pub fn update_shape(state: &mut AppState, id: u64, patch: ShapePatch) {
    use_cases::editing::update_shape(state, id, patch);
}

/// Wendet einen Panel-Patch auf einen Pfeil an.
pub fn update_arrow(state: &mut AppState, id: u64, patch: ArrowPatch) {
    use_cases::editing::update_arrow(state, id, patch);
}

/// Löscht ein Element vom Board.
pub fn delete_element(state: &mut AppState, id: u64) {
    use_cases::editing::delete_element(state, id);
}

/// Nimmt ein Element in eine neue Einzelgruppe auf.
pub fn group_element(state: &mut AppState, id: u64) {
    use_cases::editing::group_element(state, id);
}

/// Löst ein Element aus seiner Gruppe.
pub fn ungroup_element(state: &mut AppState, id: u64) {
    use_cases::editing::ungroup_element(state, id);
}

/// Entfernt alle Elemente vom Board.
pub fn clear_board(state: &mut AppState) {
    use_cases::editing::clear_board(state);
}

/// Wechselt das Formwerkzeug der Palette.
pub fn set_shape_tool(state: &mut AppState, tool: ShapeTool) {
    state.palette.tool = tool;
    log::info!("Formwerkzeug: {}", tool.label());
}

/// Schaltet den Richtungspfeil-Glyph der Palette zwischen gerade und gekrümmt.
pub fn set_glyph_curved(state: &mut AppState, curved: bool) {
    state.palette.glyph_curved = curved;
}

/// Schaltet den Richtungspfeil-Glyph der Palette bidirektional.
pub fn set_glyph_bidirectional(state: &mut AppState, bidirectional: bool) {
    state.palette.glyph_bidirectional = bidirectional;
}

/// Setzt die Pfeilart für neue Pfeile.
pub fn set_arrow_kind(state: &mut AppState, kind: ArrowKind) {
    state.palette.arrow_kind = kind;
    log::info!("Pfeilart: {}", kind.label());
}

/// Setzt den Spitzen-Stil für neue Pfeile.
pub fn set_head_style(state: &mut AppState, style: HeadStyle) {
    state.palette.head_style = style;
    log::info!("Pfeilspitze: {}", style.label());
}

/// Setzt die Palettenfarbe für neue Elemente.
pub fn set_palette_color(state: &mut AppState, color: [u8; 3]) {
    state.palette.color = color;
}

/// Setzt den Beschriftungstext für neue Formen.
pub fn set_palette_text(state: &mut AppState, text: String) {
    state.palette.text = text;
}
