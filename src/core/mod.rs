//! Core-Domänentypen: Formen, Pfeile, Gruppen, Board, Hit-Testing.

pub mod arrow;
pub mod board;
pub mod hit_test;
pub mod selection;
pub mod shape;

pub use arrow::{Arrow, ArrowKind, HeadStyle, quadratic_point};
pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board, ElementGroup, clamp_to_board};
pub use hit_test::{
    ArrowHandle, ElementHit, ResizeHandle, ShapeHandle, arrow_handle_at, element_at,
    point_in_shape, rotation_handle_position, shape_handle_at,
};
pub use selection::Selection;
pub use shape::{GlyphStyle, Shape, ShapeKind};
