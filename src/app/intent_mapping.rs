//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::{AppCommand, AppIntent, AppState};
use crate::core::{self, ElementHit, ShapeHandle};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Eine leere Sequenz heißt: der Intent hat in diesem Zustand keine
/// Wirkung (etwa Zeigerbewegung ohne laufende Geste).
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => {
            vec![AppCommand::SaveFile { path: None }]
        }
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveAsDialog],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportPng { path }],
        AppIntent::PointerPressed { pos } => map_pointer_press(state, pos),
        AppIntent::PointerDragged { pos } => {
            if state.gesture.is_active() {
                vec![AppCommand::DragMove { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => {
            if state.gesture.is_active() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::AddShapeRequested => vec![AppCommand::AddShape],
        AppIntent::AddArrowRequested => vec![AppCommand::AddArrow],
        AppIntent::UpdateShapeRequested { id, patch } => {
            vec![AppCommand::UpdateShape { id, patch }]
        }
        AppIntent::UpdateArrowRequested { id, patch } => {
            vec![AppCommand::UpdateArrow { id, patch }]
        }
        AppIntent::DeleteSelectedRequested => match state.selection.element_id() {
            Some(id) => vec![AppCommand::DeleteElement { id }],
            None => Vec::new(),
        },
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::ClearBoardRequested => vec![AppCommand::ClearBoard],
        AppIntent::GroupElementRequested { id } => vec![AppCommand::GroupElement { id }],
        AppIntent::UngroupElementRequested { id } => vec![AppCommand::UngroupElement { id }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::SetShapeToolRequested { tool } => vec![AppCommand::SetShapeTool { tool }],
        AppIntent::SetGlyphCurvedRequested { curved } => {
            vec![AppCommand::SetGlyphCurved { curved }]
        }
        AppIntent::SetGlyphBidirectionalRequested { bidirectional } => {
            vec![AppCommand::SetGlyphBidirectional { bidirectional }]
        }
        AppIntent::SetArrowKindRequested { kind } => vec![AppCommand::SetArrowKind { kind }],
        AppIntent::SetHeadStyleRequested { style } => vec![AppCommand::SetHeadStyle { style }],
        AppIntent::SetPaletteColorRequested { color } => {
            vec![AppCommand::SetPaletteColor { color }]
        }
        AppIntent::SetPaletteTextRequested { text } => vec![AppCommand::SetPaletteText { text }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Löst einen Zeiger-Druck in Board-Koordinaten auf.
///
/// Reihenfolge: erst die Griffe des selektierten Elements, dann der
/// Flächen-Test über alle Elemente, zuletzt Deselektion. Gesperrte
/// Elemente starten keine Geste, bleiben aber selektierbar.
fn map_pointer_press(state: &AppState, pos: Vec2) -> Vec<AppCommand> {
    if let Some(id) = state.selection.shape_id() {
        if let Some(shape) = state.board.find_shape(id) {
            if !shape.locked {
                match core::shape_handle_at(shape, pos) {
                    Some(ShapeHandle::Rotate) => return vec![AppCommand::BeginRotate { id }],
                    Some(ShapeHandle::Resize(handle)) => {
                        return vec![AppCommand::BeginResize { id, handle }];
                    }
                    None => {}
                }
            }
        }
    }
    if let Some(id) = state.selection.arrow_id() {
        if let Some(arrow) = state.board.find_arrow(id) {
            if !arrow.locked {
                if let Some(handle) = core::arrow_handle_at(arrow, pos) {
                    return vec![AppCommand::BeginArrowEdit { id, handle, pos }];
                }
            }
        }
    }

    match core::element_at(&state.board.shapes, &state.board.arrows, pos) {
        Some(ElementHit::Shape(id)) => match state.board.find_shape(id) {
            Some(shape) if shape.locked => vec![AppCommand::SelectShape { id }],
            Some(shape) => vec![AppCommand::BeginShapeDrag {
                id,
                grab_offset: pos - shape.pos,
            }],
            None => Vec::new(),
        },
        Some(ElementHit::Arrow { id, handle }) => {
            let locked = state.board.find_arrow(id).is_some_and(|a| a.locked);
            if locked {
                vec![AppCommand::SelectArrow { id }]
            } else {
                vec![AppCommand::BeginArrowEdit { id, handle, pos }]
            }
        }
        None if state.selection.is_none() => Vec::new(),
        None => vec![AppCommand::ClearSelection],
    }
}
