//! Properties-Panel (rechte Seitenleiste) für Form- und Pfeil-Eigenschaften.

use crate::app::{AppIntent, AppState, ArrowPatch, ShapePatch};
use crate::core::{Arrow, ArrowKind, GlyphStyle, HeadStyle, Shape, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
///
/// Gesperrte Elemente zeigen ihre Werte ausgegraut; nur die Sperre
/// selbst, Gruppierung und Löschen bleiben bedienbar.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            if let Some(shape) = state.selected_shape() {
                render_shape_properties(ui, shape, &mut events);
            } else if let Some(arrow) = state.selected_arrow() {
                render_arrow_properties(ui, arrow, &mut events);
            } else {
                ui.label("Keine Selektion");
            }
        });

    events
}

fn render_shape_properties(ui: &mut egui::Ui, shape: &Shape, events: &mut Vec<AppIntent>) {
    ui.label(format!("{} (ID {})", shape.kind.label(), shape.id));
    ui.add_space(4.0);

    let editable = !shape.locked;
    let mut patch = ShapePatch::default();

    let mut pos = shape.pos;
    ui.horizontal(|ui| {
        ui.label("Position:");
        let changed = ui
            .add_enabled(editable, egui::DragValue::new(&mut pos.x).speed(1.0))
            .changed()
            | ui
                .add_enabled(editable, egui::DragValue::new(&mut pos.y).speed(1.0))
                .changed();
        if changed {
            patch.pos = Some(pos);
        }
    });

    let mut size = shape.size;
    ui.horizontal(|ui| {
        ui.label("Größe:");
        let changed = ui
            .add_enabled(
                editable,
                egui::DragValue::new(&mut size.x)
                    .range(10.0..=BOARD_WIDTH)
                    .speed(1.0),
            )
            .changed()
            | ui
                .add_enabled(
                    editable,
                    egui::DragValue::new(&mut size.y)
                        .range(10.0..=BOARD_HEIGHT)
                        .speed(1.0),
                )
                .changed();
        if changed {
            patch.size = Some(size);
        }
    });

    render_rotation_row(ui, editable, shape.rotation, &mut patch.rotation);

    let mut color = egui::Color32::from_rgb(shape.color[0], shape.color[1], shape.color[2]);
    ui.horizontal(|ui| {
        ui.label("Farbe:");
        ui.add_enabled_ui(editable, |ui| {
            if ui.color_edit_button_srgba(&mut color).changed() {
                patch.color = Some([color.r(), color.g(), color.b()]);
            }
        });
    });

    let mut text = shape.text.clone();
    ui.horizontal(|ui| {
        ui.label("Text:");
        if ui
            .add_enabled(
                editable,
                egui::TextEdit::singleline(&mut text).desired_width(120.0),
            )
            .changed()
        {
            patch.text = Some(text.clone());
        }
    });

    // Glyph-Eigenschaften nur für Richtungspfeil-Formen
    if let ShapeKind::DirectionalArrow {
        style,
        bidirectional,
        line_width,
    } = &shape.kind
    {
        ui.add_space(4.0);
        ui.add_enabled_ui(editable, |ui| {
            let mut curved = *style == GlyphStyle::Curved;
            if ui.checkbox(&mut curved, "Gekrümmt").changed() {
                patch.glyph_style = Some(if curved {
                    GlyphStyle::Curved
                } else {
                    GlyphStyle::Straight
                });
            }

            let mut bidi = *bidirectional;
            if ui.checkbox(&mut bidi, "Beidseitig").changed() {
                patch.glyph_bidirectional = Some(bidi);
            }

            let mut width = *line_width;
            ui.horizontal(|ui| {
                ui.label("Strichstärke:");
                if ui
                    .add(egui::DragValue::new(&mut width).range(1.0..=10.0).speed(0.1))
                    .changed()
                {
                    patch.glyph_line_width = Some(width);
                }
            });
        });
    }

    ui.add_space(4.0);
    let mut locked = shape.locked;
    if ui.checkbox(&mut locked, "🔒 Gesperrt").changed() {
        patch.locked = Some(locked);
    }

    if patch != ShapePatch::default() {
        events.push(AppIntent::UpdateShapeRequested {
            id: shape.id,
            patch,
        });
    }

    render_common_actions(ui, shape.id, shape.group_id, events);
}

fn render_arrow_properties(ui: &mut egui::Ui, arrow: &Arrow, events: &mut Vec<AppIntent>) {
    ui.label(format!("Pfeil (ID {})", arrow.id));
    ui.add_space(4.0);

    let editable = !arrow.locked;
    let mut patch = ArrowPatch::default();

    let mut start = arrow.start;
    ui.horizontal(|ui| {
        ui.label("Start:");
        let changed = ui
            .add_enabled(editable, egui::DragValue::new(&mut start.x).speed(1.0))
            .changed()
            | ui
                .add_enabled(editable, egui::DragValue::new(&mut start.y).speed(1.0))
                .changed();
        if changed {
            patch.start = Some(start);
        }
    });

    let mut end = arrow.end;
    ui.horizontal(|ui| {
        ui.label("Ende:");
        let changed = ui
            .add_enabled(editable, egui::DragValue::new(&mut end.x).speed(1.0))
            .changed()
            | ui
                .add_enabled(editable, egui::DragValue::new(&mut end.y).speed(1.0))
                .changed();
        if changed {
            patch.end = Some(end);
        }
    });

    // Längen-Metadatum; wird nicht aus Start/Ende zurückgerechnet
    let mut length = arrow.length;
    ui.horizontal(|ui| {
        ui.label("Länge:");
        if ui
            .add_enabled(editable, egui::DragValue::new(&mut length).speed(1.0))
            .changed()
        {
            patch.length = Some(length);
        }
    });

    // Kontrollpunkt nur bei gekrümmten Pfeilen; bei geraden bleibt ein
    // vorhandener Punkt gespeichert, aber unsichtbar
    if let Some(control) = arrow.curved.then_some(arrow.control).flatten() {
        let mut cp = control;
        ui.horizontal(|ui| {
            ui.label("Kontrollpunkt:");
            let changed = ui
                .add_enabled(editable, egui::DragValue::new(&mut cp.x).speed(1.0))
                .changed()
                | ui
                    .add_enabled(editable, egui::DragValue::new(&mut cp.y).speed(1.0))
                    .changed();
            if changed {
                patch.control = Some(cp);
            }
        });
    }

    ui.add_enabled_ui(editable, |ui| {
        let mut kind = arrow.kind;
        egui::ComboBox::from_id_salt("prop_arrow_kind")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut kind, ArrowKind::Straight, ArrowKind::Straight.label());
                ui.selectable_value(&mut kind, ArrowKind::Curved, ArrowKind::Curved.label());
                ui.selectable_value(
                    &mut kind,
                    ArrowKind::Bidirectional,
                    ArrowKind::Bidirectional.label(),
                );
            });
        if kind != arrow.kind {
            patch.kind = Some(kind);
        }

        let mut head = arrow.head_style;
        egui::ComboBox::from_id_salt("prop_head_style")
            .selected_text(head.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut head, HeadStyle::Triangle, HeadStyle::Triangle.label());
                ui.selectable_value(&mut head, HeadStyle::Diamond, HeadStyle::Diamond.label());
                ui.selectable_value(&mut head, HeadStyle::Circle, HeadStyle::Circle.label());
            });
        if head != arrow.head_style {
            patch.head_style = Some(head);
        }

        let mut line_width = arrow.line_width;
        ui.horizontal(|ui| {
            ui.label("Strichstärke:");
            if ui
                .add(
                    egui::DragValue::new(&mut line_width)
                        .range(1.0..=10.0)
                        .speed(0.1),
                )
                .changed()
            {
                patch.line_width = Some(line_width);
            }
        });
    });

    render_rotation_row(ui, editable, arrow.rotation, &mut patch.rotation);

    let mut color = egui::Color32::from_rgb(arrow.color[0], arrow.color[1], arrow.color[2]);
    ui.horizontal(|ui| {
        ui.label("Farbe:");
        ui.add_enabled_ui(editable, |ui| {
            if ui.color_edit_button_srgba(&mut color).changed() {
                patch.color = Some([color.r(), color.g(), color.b()]);
            }
        });
    });

    ui.add_space(4.0);
    let mut locked = arrow.locked;
    if ui.checkbox(&mut locked, "🔒 Gesperrt").changed() {
        patch.locked = Some(locked);
    }

    if patch != ArrowPatch::default() {
        events.push(AppIntent::UpdateArrowRequested {
            id: arrow.id,
            patch,
        });
    }

    render_common_actions(ui, arrow.id, arrow.group_id, events);
}

/// Rotationszeile mit Normalisierung auf 0..360 beim Bestätigen.
fn render_rotation_row(
    ui: &mut egui::Ui,
    editable: bool,
    current: f32,
    target: &mut Option<f32>,
) {
    let mut rotation = current;
    ui.horizontal(|ui| {
        ui.label("Rotation:");
        if ui
            .add_enabled(
                editable,
                egui::DragValue::new(&mut rotation).speed(1.0).suffix("°"),
            )
            .changed()
        {
            *target = Some(normalize_degrees(rotation));
        }
        if ui
            .add_enabled(editable && current != 0.0, egui::Button::new("0°").small())
            .clicked()
        {
            *target = Some(0.0);
        }
    });
}

fn render_common_actions(
    ui: &mut egui::Ui,
    id: u64,
    group_id: Option<u64>,
    events: &mut Vec<AppIntent>,
) {
    ui.separator();

    if let Some(gid) = group_id {
        ui.label(format!("Gruppe: {}", gid));
        if ui.button("Gruppe lösen").clicked() {
            events.push(AppIntent::UngroupElementRequested { id });
        }
    } else if ui.button("Gruppieren").clicked() {
        events.push(AppIntent::GroupElementRequested { id });
    }

    if ui.small_button("✕ Löschen").clicked() {
        events.push(AppIntent::DeleteSelectedRequested);
    }
}

/// Winkel in Grad auf den Bereich [0, 360) abbilden.
fn normalize_degrees(value: f32) -> f32 {
    ((value % 360.0) + 360.0) % 360.0
}
