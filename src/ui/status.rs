//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Formen: {} | Pfeile: {}",
                state.shape_count(),
                state.arrow_count()
            ));

            ui.separator();

            if let Some(path) = &state.ui.current_file_path {
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            } else {
                ui.label("Keine Datei geladen");
            }

            ui.separator();

            if let Some(shape) = state.selected_shape() {
                ui.label(format!(
                    "Selektiert: {} (ID {})",
                    shape.kind.label(),
                    shape.id
                ));
            } else if let Some(arrow) = state.selected_arrow() {
                ui.label(format!("Selektiert: Pfeil (ID {})", arrow.id));
            } else {
                ui.label("Keine Selektion");
            }

            ui.separator();

            if let Some(pos) = state.ui.pointer_board_pos {
                ui.label(format!("Position: ({:.1}, {:.1})", pos.x, pos.y));
            } else {
                ui.label("Position: –");
            }

            // Statusnachricht (z.B. Export-Ergebnis)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
