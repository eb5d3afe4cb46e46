//! Board-Input-Handling: Zeiger-Events und Hover-Cursor → AppIntent.

use glam::Vec2;

use super::keyboard;
use crate::app::{AppIntent, AppState, Gesture};
use crate::core::{self, ArrowHandle, ElementHit, ResizeHandle, ShapeHandle};
use crate::render::ViewportMapping;

/// Verwaltet den Input-Zustand für das Board.
#[derive(Default)]
pub struct InputState {
    /// Primärtaste war im letzten Frame auf dem Board gedrückt
    pointer_was_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_was_down: false,
        }
    }

    /// Sammelt Board-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positions-Intents tragen Board-Koordinaten; die Umrechnung aus
    /// Bildschirm-Koordinaten passiert hier über das `mapping`.
    pub fn collect_board_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        mapping: ViewportMapping,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            !state.selection.is_none(),
        ));

        let (primary_down, press_origin, latest_pos, pointer_delta) = ui.input(|i| {
            (
                i.pointer.primary_down(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        let down_on_board = response.is_pointer_button_down_on() && primary_down;

        if down_on_board && !self.pointer_was_down {
            // press_origin() liefert die exakte Klickposition vor der
            // Drag-Schwelle; interact_pointer_pos() erst die Position
            // nach der Drag-Erkennung.
            if let Some(screen_pos) = press_origin {
                events.push(AppIntent::PointerPressed {
                    pos: mapping.screen_to_board(screen_pos),
                });
            }
        } else if down_on_board && pointer_delta != egui::Vec2::ZERO {
            if let Some(screen_pos) = latest_pos {
                events.push(AppIntent::PointerDragged {
                    pos: mapping.screen_to_board(screen_pos),
                });
            }
        }

        if self.pointer_was_down && !down_on_board {
            events.push(AppIntent::PointerReleased);
        }
        self.pointer_was_down = down_on_board;

        // Cursor: laufende Geste dominiert, sonst Hover-Test
        let cursor = if state.gesture.is_active() {
            gesture_cursor(&state.gesture)
        } else if let Some(hover) = response.hover_pos() {
            hover_cursor(state, mapping.screen_to_board(hover))
        } else {
            egui::CursorIcon::Default
        };
        if cursor != egui::CursorIcon::Default {
            ui.ctx().set_cursor_icon(cursor);
        }

        events
    }
}

/// Cursor-Form während einer laufenden Geste.
fn gesture_cursor(gesture: &Gesture) -> egui::CursorIcon {
    match gesture {
        Gesture::Rotating { .. } => egui::CursorIcon::Grabbing,
        Gesture::Resizing { handle, .. } => resize_cursor(*handle),
        Gesture::DraggingShape { .. } | Gesture::EditingArrowPoint { .. } => egui::CursorIcon::Move,
        Gesture::Idle => egui::CursorIcon::Default,
    }
}

/// Cursor-Form für eine Board-Position ohne laufende Geste.
///
/// Spiegelt die Auflösungsreihenfolge des Zeiger-Drucks: erst die
/// Griffe des selektierten Elements, dann der Flächen-Test über alle
/// Elemente. Gesperrte Elemente bieten weder Griffe noch Move-Cursor.
pub fn hover_cursor(state: &AppState, pos: Vec2) -> egui::CursorIcon {
    if let Some(shape) = state.selected_shape() {
        if !shape.locked {
            match core::shape_handle_at(shape, pos) {
                Some(ShapeHandle::Rotate) => return egui::CursorIcon::Grab,
                Some(ShapeHandle::Resize(handle)) => return resize_cursor(handle),
                None => {}
            }
        }
    }

    if let Some(arrow) = state.selected_arrow() {
        if !arrow.locked {
            if let Some(handle) = core::arrow_handle_at(arrow, pos) {
                return arrow_cursor(handle);
            }
        }
    }

    match core::element_at(&state.board.shapes, &state.board.arrows, pos) {
        Some(ElementHit::Shape(id)) => {
            if state.board.find_shape(id).is_some_and(|s| s.locked) {
                egui::CursorIcon::Default
            } else {
                egui::CursorIcon::Move
            }
        }
        Some(ElementHit::Arrow { id, handle }) => {
            if state.board.find_arrow(id).is_some_and(|a| a.locked) {
                egui::CursorIcon::Default
            } else {
                arrow_cursor(handle)
            }
        }
        None => egui::CursorIcon::Default,
    }
}

fn arrow_cursor(handle: ArrowHandle) -> egui::CursorIcon {
    match handle {
        ArrowHandle::Line => egui::CursorIcon::Move,
        ArrowHandle::Start | ArrowHandle::End | ArrowHandle::Control => {
            egui::CursorIcon::PointingHand
        }
    }
}

fn resize_cursor(handle: ResizeHandle) -> egui::CursorIcon {
    match handle {
        ResizeHandle::TopLeft => egui::CursorIcon::ResizeNorthWest,
        ResizeHandle::TopMiddle => egui::CursorIcon::ResizeNorth,
        ResizeHandle::TopRight => egui::CursorIcon::ResizeNorthEast,
        ResizeHandle::MiddleRight => egui::CursorIcon::ResizeEast,
        ResizeHandle::BottomRight => egui::CursorIcon::ResizeSouthEast,
        ResizeHandle::BottomMiddle => egui::CursorIcon::ResizeSouth,
        ResizeHandle::BottomLeft => egui::CursorIcon::ResizeSouthWest,
        ResizeHandle::MiddleLeft => egui::CursorIcon::ResizeWest,
    }
}
