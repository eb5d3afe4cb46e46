//! Taktikboard-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ArrowPatch, Gesture, PaletteState, ShapePatch,
    ShapeTool, UiState,
};
pub use core::{
    Arrow, ArrowKind, Board, GlyphStyle, HeadStyle, Selection, Shape, ShapeKind, BOARD_HEIGHT,
    BOARD_WIDTH,
};
pub use shared::{EditorOptions, RenderScene};
