use super::super::state::ShapeTool;
use crate::core::{ArrowHandle, ArrowKind, GlyphStyle, HeadStyle, ResizeHandle};
use crate::shared::EditorOptions;

/// Teiländerung an einer Form aus dem Eigenschaften-Panel.
/// `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePatch {
    pub pos: Option<glam::Vec2>,
    pub size: Option<glam::Vec2>,
    pub color: Option<[u8; 3]>,
    pub text: Option<String>,
    /// Rotation in Grad, vom Panel bereits auf 0..360 normalisiert.
    pub rotation: Option<f32>,
    pub locked: Option<bool>,
    /// Nur für Richtungspfeil-Formen: gerade oder gekrümmt.
    pub glyph_style: Option<GlyphStyle>,
    /// Nur für Richtungspfeil-Formen: Spitzen an beiden Enden.
    pub glyph_bidirectional: Option<bool>,
    /// Nur für Richtungspfeil-Formen: Strichstärke des Glyphen.
    pub glyph_line_width: Option<f32>,
}

/// Teiländerung an einem Pfeil aus dem Eigenschaften-Panel.
/// `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowPatch {
    pub start: Option<glam::Vec2>,
    pub end: Option<glam::Vec2>,
    /// Setzt den Kontrollpunkt; ein vorhandener Punkt wird nie entfernt.
    pub control: Option<glam::Vec2>,
    /// Pfeilart-Wechsel; zieht `curved`-Flag und Kontrollpunkt-Injektion nach.
    pub kind: Option<ArrowKind>,
    pub head_style: Option<HeadStyle>,
    pub color: Option<[u8; 3]>,
    /// Längen-Metadatum; wird nie aus der Geometrie zurückgerechnet.
    pub length: Option<f32>,
    pub line_width: Option<f32>,
    /// Rotation in Grad, vom Panel bereits auf 0..360 normalisiert.
    pub rotation: Option<f32>,
    pub locked: Option<bool>,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag-Verschieben einer Form beginnen (selektiert die Form)
    BeginShapeDrag { id: u64, grab_offset: glam::Vec2 },
    /// Resize über einen der acht Griffe beginnen
    BeginResize { id: u64, handle: ResizeHandle },
    /// Rotation über den Rotationsgriff beginnen
    BeginRotate { id: u64 },
    /// Pfeil-Editierung beginnen (Endpunkt, Kontrollpunkt oder Linie)
    BeginArrowEdit {
        id: u64,
        handle: ArrowHandle,
        pos: glam::Vec2,
    },
    /// Laufende Geste mit neuer Zeigerposition fortsetzen
    DragMove { pos: glam::Vec2 },
    /// Laufende Geste beenden
    EndDrag,
    /// Form selektieren, ohne eine Geste zu starten
    SelectShape { id: u64 },
    /// Pfeil selektieren, ohne eine Geste zu starten
    SelectArrow { id: u64 },
    /// Selektion aufheben
    ClearSelection,
    /// Neue Form aus der Palette einfügen
    AddShape,
    /// Neuen Pfeil aus der Palette einfügen
    AddArrow,
    /// Form per Patch ändern
    UpdateShape { id: u64, patch: ShapePatch },
    /// Pfeil per Patch ändern
    UpdateArrow { id: u64, patch: ArrowPatch },
    /// Element (Form oder Pfeil) löschen
    DeleteElement { id: u64 },
    /// Element in eine neue Einzelgruppe aufnehmen
    GroupElement { id: u64 },
    /// Element aus seiner Gruppe lösen
    UngroupElement { id: u64 },
    /// Alle Elemente vom Board entfernen
    ClearBoard,
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Formwerkzeug der Palette setzen
    SetShapeTool { tool: ShapeTool },
    /// Richtungspfeil-Stil der Palette setzen (gekrümmt/gerade)
    SetGlyphCurved { curved: bool },
    /// Richtungspfeil der Palette bidirektional schalten
    SetGlyphBidirectional { bidirectional: bool },
    /// Pfeilart der Palette setzen
    SetArrowKind { kind: ArrowKind },
    /// Pfeilspitzen-Stil der Palette setzen
    SetHeadStyle { style: HeadStyle },
    /// Palettenfarbe für neue Elemente setzen
    SetPaletteColor { color: [u8; 3] },
    /// Beschriftungstext für neue Formen setzen
    SetPaletteText { text: String },
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Board aus JSON-Datei laden
    LoadFile { path: String },
    /// Datei speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveFile { path: Option<String> },
    /// Speichern-unter-Dialog anfordern
    RequestSaveAsDialog,
    /// Export-Dialog anfordern
    RequestExportDialog,
    /// Board als PNG exportieren
    ExportPng { path: String },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
