//! Form-Elemente: Rechtecke, Kreise, Dreiecke, Sechsecke und
//! Richtungspfeil-Glyphen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linienführung eines Richtungspfeil-Glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphStyle {
    /// Gerade Linie entlang der Box-Mitte
    Straight,
    /// Quadratische Kurve über die Box-Oberkante
    Curved,
}

/// Art einer Form.
///
/// Nur Richtungspfeil-Glyphen tragen Stil, Bidirektional-Flag und
/// Linienbreite; andere Formen können sie nicht haben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    /// Regelmäßiges Sechseck, einbeschrieben in die Bounding-Box
    Polygon,
    /// Pfeil-Glyph quer durch die Bounding-Box
    DirectionalArrow {
        style: GlyphStyle,
        bidirectional: bool,
        line_width: f32,
    },
}

impl ShapeKind {
    /// Gibt `true` zurück für Richtungspfeil-Glyphen.
    pub fn is_directional(&self) -> bool {
        matches!(self, ShapeKind::DirectionalArrow { .. })
    }

    /// Anzeigename für Statusleiste und Panels.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rechteck",
            ShapeKind::Circle => "Kreis",
            ShapeKind::Triangle => "Dreieck",
            ShapeKind::Polygon => "Sechseck",
            ShapeKind::DirectionalArrow { .. } => "Richtungspfeil",
        }
    }
}

/// Ein platzierbares Form-Element auf dem Board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Eindeutige ID innerhalb des Dokuments
    pub id: u64,
    /// Art der Form
    pub kind: ShapeKind,
    /// Obere linke Ecke der Bounding-Box in Board-Koordinaten
    pub pos: Vec2,
    /// Breite und Höhe der Bounding-Box
    pub size: Vec2,
    /// Füllfarbe (RGB)
    pub color: [u8; 3],
    /// Zentrierte Beschriftung (leer = keine)
    pub text: String,
    /// Rotation in Grad um das Zentrum — wirkt nur auf die Darstellung,
    /// Hit-Testing bleibt achsenparallel
    pub rotation: f32,
    /// Gesperrte Elemente ignorieren Geometrie-Änderungen
    pub locked: bool,
    /// Zugehörige Gruppe, falls vorhanden
    pub group_id: Option<u64>,
}

impl Shape {
    /// Zentrum der Bounding-Box.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Ecken der Bounding-Box als (min, max).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.pos, self.pos + self.size)
    }
}
