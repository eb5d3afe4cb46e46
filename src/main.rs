//! Taktikboard-Editor.
//!
//! Interaktiver 2D-Editor für Fußball-Übungsdiagramme: Formen und Pfeile
//! auf einem Spielfeld-Hintergrund, mit JSON-Persistenz und PNG-Export.

use eframe::egui;
use taktikboard_editor::app::use_cases;
use taktikboard_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Taktikboard-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Taktikboard-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Taktikboard-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);
        self.sync_thumbnail();
        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let mapping = render::ViewportMapping::fit(rect);

                // Zeigerposition für die Statusleiste
                self.state.ui.pointer_board_pos = response
                    .hover_pos()
                    .map(|pos| mapping.screen_to_board(pos));

                events.extend(
                    self.input
                        .collect_board_events(ui, &response, mapping, &self.state),
                );

                let scene = self.controller.build_render_scene(&self.state);
                let ops = render::build_draw_list(&scene);
                render::paint_ops(ui.painter(), mapping, &ops);

                // Dünner Rahmen um die Board-Fläche
                ui.painter().rect_stroke(
                    mapping.board_rect(),
                    0.0,
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                    egui::StrokeKind::Outside,
                );
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Schreibt nach abgeklungener Änderung ein Vorschaubild neben die
    /// aktuelle Datei (`<name>.thumb.png`). Ohne bekannten Pfad wird das
    /// Bild verworfen.
    fn sync_thumbnail(&mut self) {
        let png = match use_cases::export::poll_thumbnail(&mut self.state, std::time::Instant::now())
        {
            Ok(Some(png)) => png,
            Ok(None) => return,
            Err(e) => {
                log::error!("Thumbnail-Erzeugung fehlgeschlagen: {:#}", e);
                return;
            }
        };

        let Some(current) = self.state.ui.current_file_path.as_deref() else {
            return;
        };
        let thumb_path = std::path::Path::new(current).with_extension("thumb.png");
        if let Err(e) = std::fs::write(&thumb_path, &png) {
            log::warn!(
                "Vorschaubild konnte nicht geschrieben werden ({}): {:#}",
                thumb_path.display(),
                e
            );
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.gesture.is_active()
            || self.state.show_options_dialog
            || self.state.thumbnail.pending_since.is_some()
        {
            ctx.request_repaint();
        }
    }
}
