//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Board, Selection};

/// Read-only Daten für einen Render-Frame.
///
/// Die Render-Schicht sieht nur Dokument, Selektion und Optionen,
/// keine Gesten- oder Dialogzustände. Bildschirm und PNG-Export bauen
/// aus derselben Szene dieselbe Draw-Liste.
#[derive(Debug, Clone, Copy)]
pub struct RenderScene<'a> {
    /// Das darzustellende Dokument
    pub board: &'a Board,
    /// Aktuelle Selektion (bestimmt die Overlays)
    pub selection: Selection,
    /// Laufzeit-Optionen für Farben
    pub options: &'a EditorOptions,
}

impl RenderScene<'_> {
    /// Gibt zurück, ob das selektierte Element existiert und nicht
    /// gesperrt ist — nur dann werden Griffe gezeichnet.
    pub fn selected_unlocked(&self, id: u64) -> bool {
        match self.selection {
            Selection::Shape(sel) if sel == id => self
                .board
                .find_shape(id)
                .is_some_and(|s| !s.locked),
            Selection::Arrow(sel) if sel == id => self
                .board
                .find_arrow(id)
                .is_some_and(|a| !a.locked),
            _ => false,
        }
    }
}
