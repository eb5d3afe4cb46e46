//! Darstellung: Display-List-Aufbau und Painter-Backends.
//!
//! `draw_list` baut aus einer Render-Szene eine backend-neutrale
//! Operationsliste; `painter` zeichnet sie auf den Bildschirm, der
//! Rasterizer in `taktikboard_raster` in ein Pixelbild.

pub mod draw_list;
pub mod painter;

pub use crate::shared::RenderScene;
pub use draw_list::build_draw_list;
pub use painter::{paint_ops, ViewportMapping};
