//! Das Board: flaches Dokument aus Formen, Pfeilen und Gruppen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arrow::Arrow;
use super::shape::Shape;

/// Feste logische Board-Breite in Einheiten.
pub const BOARD_WIDTH: f32 = 800.0;
/// Feste logische Board-Höhe in Einheiten.
pub const BOARD_HEIGHT: f32 = 500.0;

/// Klemmt eine Position auf die Board-Fläche.
pub fn clamp_to_board(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x.clamp(0.0, BOARD_WIDTH), pos.y.clamp(0.0, BOARD_HEIGHT))
}

/// Benannte Gruppe von Element-IDs.
///
/// Die Mitgliedschaft wird über `group_id` der Elemente bestimmt;
/// `element_ids` hält nur die Zusammensetzung zum Zeitpunkt der
/// Gruppierung fest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementGroup {
    /// Eindeutige ID innerhalb des Dokuments
    pub id: u64,
    /// IDs der Elemente bei Gruppierung
    pub element_ids: Vec<u64>,
    /// Anzeigename, z. B. "Gruppe 3"
    pub name: String,
}

/// Gesamtzustand eines Taktik-Dokuments.
///
/// Die Reihenfolge der Vektoren ist zugleich die Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub shapes: Vec<Shape>,
    pub arrows: Vec<Arrow>,
    #[serde(default)]
    pub groups: Vec<ElementGroup>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nächste freie ID über den gemeinsamen ID-Raum von Formen,
    /// Pfeilen und Gruppen.
    pub fn next_element_id(&self) -> u64 {
        let max_shape = self.shapes.iter().map(|s| s.id).max().unwrap_or(0);
        let max_arrow = self.arrows.iter().map(|a| a.id).max().unwrap_or(0);
        let max_group = self.groups.iter().map(|g| g.id).max().unwrap_or(0);
        max_shape.max(max_arrow).max(max_group) + 1
    }

    pub fn find_shape(&self, id: u64) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn find_shape_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn find_arrow(&self, id: u64) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.id == id)
    }

    pub fn find_arrow_mut(&mut self, id: u64) -> Option<&mut Arrow> {
        self.arrows.iter_mut().find(|a| a.id == id)
    }

    /// Entfernt ein Element (Form oder Pfeil). Gruppen bleiben bestehen.
    ///
    /// Gibt `true` zurück, wenn ein Element entfernt wurde.
    pub fn remove_element(&mut self, id: u64) -> bool {
        let before = self.shapes.len() + self.arrows.len();
        self.shapes.retain(|s| s.id != id);
        self.arrows.retain(|a| a.id != id);
        self.shapes.len() + self.arrows.len() < before
    }

    /// Entfernt Gruppen, auf die kein Element mehr verweist.
    pub fn prune_empty_groups(&mut self) {
        let shapes = &self.shapes;
        let arrows = &self.arrows;
        self.groups.retain(|g| {
            shapes.iter().any(|s| s.group_id == Some(g.id))
                || arrows.iter().any(|a| a.group_id == Some(g.id))
        });
    }

    /// Leert das Dokument vollständig.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.arrows.clear();
        self.groups.clear();
    }

    /// Anzahl aller Elemente (ohne Gruppen).
    pub fn element_count(&self) -> usize {
        self.shapes.len() + self.arrows.len()
    }
}
