//! Eigenständige Pfeil-Elemente mit frei platzierbaren Endpunkten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Verlaufsart eines Pfeils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKind {
    /// Gerade Strecke von Start nach Ende
    Straight,
    /// Quadratische Bézier-Kurve über den Kontrollpunkt
    Curved,
    /// Gerade Strecke mit Spitzen an beiden Enden
    Bidirectional,
}

impl ArrowKind {
    /// Anzeigename für das Eigenschaften-Panel.
    pub fn label(&self) -> &'static str {
        match self {
            ArrowKind::Straight => "Gerade",
            ArrowKind::Curved => "Gekrümmt",
            ArrowKind::Bidirectional => "Bidirektional",
        }
    }
}

/// Form der Pfeilspitze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadStyle {
    Triangle,
    Diamond,
    Circle,
}

impl HeadStyle {
    /// Anzeigename für das Eigenschaften-Panel.
    pub fn label(&self) -> &'static str {
        match self {
            HeadStyle::Triangle => "Dreieck",
            HeadStyle::Diamond => "Raute",
            HeadStyle::Circle => "Kreis",
        }
    }
}

/// Ein Pfeil zwischen zwei Punkten auf dem Board.
///
/// `curved` und `control` bestimmen gemeinsam den tatsächlichen Verlauf:
/// nur wenn beide gesetzt sind, folgt der Pfeil der Kurve. `kind` kann
/// davon abweichen, bis der Kontrollpunkt nachgezogen ist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Eindeutige ID innerhalb des Dokuments
    pub id: u64,
    /// Startpunkt in Board-Koordinaten
    pub start: Vec2,
    /// Endpunkt in Board-Koordinaten
    pub end: Vec2,
    /// Verlaufsart
    pub kind: ArrowKind,
    /// Form der Spitze(n)
    pub head_style: HeadStyle,
    /// Linienfarbe (RGB)
    pub color: [u8; 3],
    /// Gekrümmte Darstellung aktiv
    pub curved: bool,
    /// Kontrollpunkt der Kurve, falls gesetzt
    pub control: Option<Vec2>,
    /// Strichstärke in Board-Einheiten
    pub line_width: f32,
    /// Rotation in Grad (nur Darstellung)
    pub rotation: f32,
    /// Gesperrte Pfeile ignorieren Geometrie-Änderungen
    pub locked: bool,
    /// Zugehörige Gruppe, falls vorhanden
    pub group_id: Option<u64>,
    /// Nennlänge in Board-Einheiten (Metadatum, nicht aus den
    /// Endpunkten abgeleitet)
    pub length: f32,
    /// Nennbreite in Board-Einheiten (Metadatum)
    pub width: f32,
}

impl Arrow {
    /// Mittelpunkt der Strecke Start–Ende.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Punkt auf dem Pfeilverlauf bei Parameter `t` ∈ [0, 1].
    ///
    /// Gerade Pfeile interpolieren linear; gekrümmte folgen der
    /// Bézier-Kurve durch den Kontrollpunkt.
    pub fn point_at(&self, t: f32) -> Vec2 {
        match (self.curved, self.control) {
            (true, Some(control)) => quadratic_point(self.start, control, self.end, t),
            _ => self.start.lerp(self.end, t),
        }
    }
}

/// Punkt auf einer quadratischen Bézier-Kurve bei Parameter `t` ∈ [0, 1].
pub fn quadratic_point(start: Vec2, control: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    u * u * start + 2.0 * u * t * control + t * t * end
}
