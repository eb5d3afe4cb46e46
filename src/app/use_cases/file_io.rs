//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::Gesture;
use crate::app::AppState;
use crate::core::{Board, Selection};

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt das Board aus einer JSON-Datei und ersetzt das aktuelle.
///
/// Selektion und Geste werden zurückgesetzt, die Undo-History beginnt
/// neu beim geladenen Stand. Gruppen ohne lebende Elemente werden
/// direkt nach dem Laden bereinigt.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)?;
    let mut board: Board = serde_json::from_str(&json)?;
    board.prune_empty_groups();

    log::info!(
        "Board geladen: {} Formen, {} Pfeile ({})",
        board.shapes.len(),
        board.arrows.len(),
        path
    );

    state.selection = Selection::None;
    state.gesture = Gesture::Idle;
    state.history.reset(&board);
    state.board = board;
    state.ui.current_file_path = Some(path);
    state.mark_document_changed();
    Ok(())
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet den Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_board_to_file(state, &path)?;
        log::info!("Board gespeichert: {}", path);
        Ok(())
    } else {
        // Kein Pfad bekannt → Speichern-unter-Dialog öffnen
        request_save_file_as(state);
        Ok(())
    }
}

/// Öffnet den Speichern-unter-Dialog über UI-State.
pub fn request_save_file_as(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Speichert das Board unter dem angegebenen Pfad und merkt ihn sich.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_board_to_file(state, &path)?;
    state.ui.current_file_path = Some(path.clone());
    log::info!("Board gespeichert als: {}", path);
    Ok(())
}

/// Schreibt das Board als JSON in eine Datei.
fn write_board_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&state.board)?;
    std::fs::write(path, json)?;
    Ok(())
}
