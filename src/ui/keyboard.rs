//! Keyboard-Shortcuts für das Board.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Während einer Texteingabe (Beschriftungs-Felder) gehören die
    // Tasten dem fokussierten Widget, nicht dem Board.
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Cmd/Ctrl + Z (Undo), O (Öffnen), S (Speichern / Shift = Speichern unter)
    let (modifiers, key_z_pressed, key_o_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    // Delete/Backspace (Element löschen), Escape (Selektion aufheben)
    let (key_del_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_escape_pressed && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    events
}
