//! Use-Case-Funktionen für Element-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_element` — Formen und Pfeile aus der Palette einfügen
//! - `update_element` — Patches aus dem Eigenschaften-Panel anwenden
//! - `delete_element` — Elemente entfernen
//! - `grouping` — Einzelgruppen erstellen und auflösen
//! - `clear` — Board leeren

mod add_element;
mod clear;
mod delete_element;
mod grouping;
mod update_element;

pub use add_element::{add_arrow, add_shape};
pub use clear::clear_board;
pub use delete_element::delete_element;
pub use grouping::{group_element, ungroup_element};
pub use update_element::{update_arrow, update_shape};
