//! Toolbar für Palette und Element-Aktionen.

use crate::app::{AppIntent, AppState, ShapeTool};
use crate::core::{ArrowKind, HeadStyle};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let palette = &state.palette;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Form:");

            for tool in ShapeTool::ALL {
                let button = egui::Button::new(tool.label()).selected(palette.tool == tool);
                if ui.add(button).clicked() {
                    events.push(AppIntent::SetShapeToolRequested { tool });
                }
            }

            // Glyph-Stile nur für das Richtungspfeil-Werkzeug
            if palette.tool == ShapeTool::DirectionalArrow {
                let mut curved = palette.glyph_curved;
                if ui.checkbox(&mut curved, "Gekrümmt").changed() {
                    events.push(AppIntent::SetGlyphCurvedRequested { curved });
                }
                let mut bidirectional = palette.glyph_bidirectional;
                if ui.checkbox(&mut bidirectional, "Beidseitig").changed() {
                    events.push(AppIntent::SetGlyphBidirectionalRequested { bidirectional });
                }
            }

            if ui.button("＋ Form").clicked() {
                events.push(AppIntent::AddShapeRequested);
            }

            ui.separator();

            ui.label("Pfeil:");
            arrow_kind_selector(ui, palette.arrow_kind, &mut events);
            head_style_selector(ui, palette.head_style, &mut events);

            if ui.button("＋ Pfeil").clicked() {
                events.push(AppIntent::AddArrowRequested);
            }

            ui.separator();

            ui.label("Farbe:");
            let mut color = egui::Color32::from_rgb(
                palette.color[0],
                palette.color[1],
                palette.color[2],
            );
            if ui.color_edit_button_srgba(&mut color).changed() {
                events.push(AppIntent::SetPaletteColorRequested {
                    color: [color.r(), color.g(), color.b()],
                });
            }

            ui.label("Text:");
            let mut text = palette.text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("Beschriftung")
                    .desired_width(100.0),
            );
            if response.changed() {
                events.push(AppIntent::SetPaletteTextRequested { text });
            }

            ui.separator();

            let has_selection = !state.selection.is_none();
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Löschen"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Rückgängig"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
        });
    });

    events
}

fn arrow_kind_selector(ui: &mut egui::Ui, current: ArrowKind, events: &mut Vec<AppIntent>) {
    let mut selected = current;
    egui::ComboBox::from_id_salt("palette_arrow_kind")
        .selected_text(selected.label())
        .width(110.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, ArrowKind::Straight, ArrowKind::Straight.label());
            ui.selectable_value(&mut selected, ArrowKind::Curved, ArrowKind::Curved.label());
            ui.selectable_value(
                &mut selected,
                ArrowKind::Bidirectional,
                ArrowKind::Bidirectional.label(),
            );
        });
    if selected != current {
        events.push(AppIntent::SetArrowKindRequested { kind: selected });
    }
}

fn head_style_selector(ui: &mut egui::Ui, current: HeadStyle, events: &mut Vec<AppIntent>) {
    let mut selected = current;
    egui::ComboBox::from_id_salt("palette_head_style")
        .selected_text(selected.label())
        .width(90.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, HeadStyle::Triangle, HeadStyle::Triangle.label());
            ui.selectable_value(&mut selected, HeadStyle::Diamond, HeadStyle::Diamond.label());
            ui.selectable_value(&mut selected, HeadStyle::Circle, HeadStyle::Circle.label());
        });
    if selected != current {
        events.push(AppIntent::SetHeadStyleRequested { style: selected });
    }
}
