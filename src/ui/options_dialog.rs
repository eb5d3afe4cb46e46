//! Optionen-Dialog für Farben und Thumbnail-Verhalten.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Selektion ───────────────────────────────────────
            ui.collapsing("Selektion", |ui| {
                changed |= color_edit(ui, "Konturfarbe:", &mut opts.selection_color);
                changed |= color_edit(ui, "Griff-Füllung:", &mut opts.handle_fill_color);
            });

            // ── Spielfeld ───────────────────────────────────────
            ui.collapsing("Spielfeld", |ui| {
                changed |= color_edit(ui, "Rasen:", &mut opts.field_grass_color);
                changed |= color_edit(ui, "Linien:", &mut opts.field_line_color);
                changed |= color_edit(ui, "Mähstreifen:", &mut opts.field_stripe_color);
            });

            // ── Vorschaubilder ──────────────────────────────────
            ui.collapsing("Vorschaubilder", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Verzögerung (ms):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.thumbnail_debounce_ms)
                                .range(0..=2000)
                                .speed(10),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für ein RGB-Tripel.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [u8; 3]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgb(color[0], color[1], color[2]);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r();
            color[1] = c.g();
            color[2] = c.b();
            changed = true;
        }
    });
    changed
}
