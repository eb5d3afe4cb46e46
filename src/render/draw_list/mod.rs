//! Aufbau der Display-List aus einer Render-Szene.
//!
//! Reihenfolge: Spielfeld, dann alle Pfeile, dann alle Formen, jeweils
//! in Array-Reihenfolge. Bildschirm-Painter und Rasterizer konsumieren
//! dieselbe Liste; Export und Vorschaubilder zeigen deshalb exakt den
//! Bildschirminhalt samt Selektions-Overlay.

mod arrows;
mod field;
mod shapes;

use taktikboard_raster::{Color, DrawOp, rgb};

use crate::core::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::shared::RenderScene;

pub use field::push_field;

/// Deckende Farbe aus einem RGB-Tripel der Optionen.
pub(crate) fn solid(color: [u8; 3]) -> Color {
    rgb(color[0], color[1], color[2])
}

/// Baut die komplette Display-List eines Frames.
pub fn build_draw_list(scene: &RenderScene) -> Vec<DrawOp> {
    let mut ops =
        Vec::with_capacity(64 + 8 * (scene.board.arrows.len() + scene.board.shapes.len()));

    field::push_field(&mut ops, BOARD_WIDTH, BOARD_HEIGHT, scene.options);
    for arrow in &scene.board.arrows {
        let selected = scene.selection.arrow_id() == Some(arrow.id);
        arrows::push_arrow(
            &mut ops,
            arrow,
            selected,
            scene.selected_unlocked(arrow.id),
            scene.options,
        );
    }
    for shape in &scene.board.shapes {
        let selected = scene.selection.shape_id() == Some(shape.id);
        shapes::push_shape(
            &mut ops,
            shape,
            selected,
            scene.selected_unlocked(shape.id),
            scene.options,
        );
    }

    ops
}
