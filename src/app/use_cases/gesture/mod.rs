//! Use-Case-Funktionen für den Drag-Lifecycle auf dem Board.
//!
//! Aufgeteilt nach Phase:
//! - `begin` — Geste starten (selektiert das Element)
//! - `drag` — Bewegung anwenden (Verschieben, Skalieren, Rotieren, Pfeilpunkte)
//! - `release` — Geste beenden

mod begin;
mod drag;
mod release;

pub use begin::{begin_arrow_edit, begin_resize, begin_rotate, begin_shape_drag};
pub use drag::drag_move;
pub use release::end_drag;
