//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::{AppCommand, ArrowPatch, ShapePatch};
pub use intent::AppIntent;
