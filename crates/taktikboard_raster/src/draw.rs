//! Backend-neutrale Display-List.
//!
//! `DrawOp` beschreibt eine Zeichenoperation in Board-Koordinaten,
//! ohne Kenntnis des Backends. Der Editor baut pro Frame eine
//! `Vec<DrawOp>` und reicht sie entweder an den Bildschirm-Painter
//! oder an [`crate::raster::render_ops`] weiter.
//!
//! Rotierte Rechtecke und Ellipsen tauchen hier nicht auf: der
//! Erzeuger flacht sie vor dem Einreihen zu Polygonen ab.

use glam::Vec2;

/// RGBA-Farbe, 8 Bit pro Kanal.
pub type Color = [u8; 4];

/// Deckende Farbe aus RGB-Komponenten.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r, g, b, 255]
}

/// Farbe mit explizitem Alpha.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    [r, g, b, a]
}

/// Eine Zeichenoperation der Display-List.
///
/// Reihenfolge in der Liste = Zeichenreihenfolge (Painter's Algorithm).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Achsenparalleles gefülltes Rechteck.
    FillRect { min: Vec2, max: Vec2, color: Color },
    /// Achsenparalleler Rechteck-Umriss, Strich zentriert auf der Kante.
    StrokeRect {
        min: Vec2,
        max: Vec2,
        width: f32,
        color: Color,
    },
    /// Gefüllter Kreis.
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Kreisring, Strich zentriert auf dem Radius.
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Gefüllte achsenparallele Ellipse.
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    /// Ellipsen-Umriss.
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        width: f32,
        color: Color,
    },
    /// Gefülltes Polygon (Even-Odd-Regel, auch konkav).
    FillPolygon { points: Vec<Vec2>, color: Color },
    /// Offener Linienzug mit runden Kappen und Übergängen.
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    /// Gestrichelter Linienzug; Strich- und Lückenlänge in Pixeln.
    ///
    /// Die Dash-Phase läuft über Segmentgrenzen hinweg weiter.
    DashedLine {
        points: Vec<Vec2>,
        width: f32,
        dash: f32,
        gap: f32,
        color: Color,
    },
    /// Zentrierter Text im eingebetteten Bitmap-Font.
    ///
    /// `size` ist die Zielhöhe in Pixeln (wird auf ganzzahlige
    /// Font-Skalierung gerundet), `angle` die Rotation in Radiant
    /// um das Zentrum.
    Text {
        center: Vec2,
        text: String,
        size: f32,
        angle: f32,
        color: Color,
    },
}
