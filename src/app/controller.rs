//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Gesten ===
            AppCommand::BeginShapeDrag { id, grab_offset } => {
                handlers::gesture::begin_shape_drag(state, id, grab_offset)
            }
            AppCommand::BeginResize { id, handle } => {
                handlers::gesture::begin_resize(state, id, handle)
            }
            AppCommand::BeginRotate { id } => handlers::gesture::begin_rotate(state, id),
            AppCommand::BeginArrowEdit { id, handle, pos } => {
                handlers::gesture::begin_arrow_edit(state, id, handle, pos)
            }
            AppCommand::DragMove { pos } => handlers::gesture::drag_move(state, pos),
            AppCommand::EndDrag => handlers::gesture::end_drag(state),

            // === Selektion ===
            AppCommand::SelectShape { id } => handlers::selection::select_shape(state, id),
            AppCommand::SelectArrow { id } => handlers::selection::select_arrow(state, id),
            AppCommand::ClearSelection => handlers::selection::clear_selection(state),

            // === Editing ===
            AppCommand::AddShape => handlers::editing::add_shape(state),
            AppCommand::AddArrow => handlers::editing::add_arrow(state),
            AppCommand::UpdateShape { id, patch } => {
                handlers::editing::update_shape(state, id, patch)
            }
            AppCommand::UpdateArrow { id, patch } => {
                handlers::editing::update_arrow(state, id, patch)
            }
            AppCommand::DeleteElement { id } => handlers::editing::delete_element(state, id),
            AppCommand::GroupElement { id } => handlers::editing::group_element(state, id),
            AppCommand::UngroupElement { id } => handlers::editing::ungroup_element(state, id),
            AppCommand::ClearBoard => handlers::editing::clear_board(state),

            // === Palette ===
            AppCommand::SetShapeTool { tool } => handlers::editing::set_shape_tool(state, tool),
            AppCommand::SetGlyphCurved { curved } => {
                handlers::editing::set_glyph_curved(state, curved)
            }
            AppCommand::SetGlyphBidirectional { bidirectional } => {
                handlers::editing::set_glyph_bidirectional(state, bidirectional)
            }
            AppCommand::SetArrowKind { kind } => handlers::editing::set_arrow_kind(state, kind),
            AppCommand::SetHeadStyle { style } => handlers::editing::set_head_style(state, style),
            AppCommand::SetPaletteColor { color } => {
                handlers::editing::set_palette_color(state, color)
            }
            AppCommand::SetPaletteText { text } => handlers::editing::set_palette_text(state, text),

            // === Datei-I/O & Export ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestSaveAsDialog => handlers::file_io::request_save_as(state),
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ExportPng { path } => handlers::file_io::export_png(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene<'a>(&self, state: &'a AppState) -> RenderScene<'a> {
        render_scene::build(state)
    }
}
