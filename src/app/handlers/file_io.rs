//! Handler für Datei-Operationen (Öffnen, Speichern, Export).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Lädt ein Board aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Speichert das Board.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den
/// Dialog), `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => use_cases::file_io::save_file_as(state, path),
        None => use_cases::file_io::save_current_file(state),
    }
}

/// Öffnet den Speichern-unter-Dialog.
pub fn request_save_as(state: &mut AppState) {
    use_cases::file_io::request_save_file_as(state);
}

/// Öffnet den PNG-Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::export::request_export(state);
}

/// Exportiert das Board als PNG unter dem übergebenen Pfad.
pub fn export_png(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_png(state, path)
}
