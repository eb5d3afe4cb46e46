use super::super::state::ShapeTool;
use super::command::{ArrowPatch, ShapePatch};
use crate::core::{ArrowKind, HeadStyle};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Board als PNG exportieren (zeigt Dateidialog)
    ExportRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },

    /// Primärtaste auf dem Board gedrückt (Board-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger mit gedrückter Primärtaste bewegt
    PointerDragged { pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,

    /// Neue Form aus der Palette einfügen
    AddShapeRequested,
    /// Neuen Pfeil aus der Palette einfügen
    AddArrowRequested,
    /// Form über das Eigenschaften-Panel ändern
    UpdateShapeRequested { id: u64, patch: ShapePatch },
    /// Pfeil über das Eigenschaften-Panel ändern
    UpdateArrowRequested { id: u64, patch: ArrowPatch },
    /// Selektiertes Element löschen
    DeleteSelectedRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Board leeren (alle Elemente entfernen)
    ClearBoardRequested,
    /// Element in eine neue Einzelgruppe aufnehmen
    GroupElementRequested { id: u64 },
    /// Element aus seiner Gruppe lösen
    UngroupElementRequested { id: u64 },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,

    /// Formwerkzeug der Palette wechseln
    SetShapeToolRequested { tool: ShapeTool },
    /// Richtungspfeil-Stil der Palette ändern (gekrümmt/gerade)
    SetGlyphCurvedRequested { curved: bool },
    /// Richtungspfeil der Palette bidirektional schalten
    SetGlyphBidirectionalRequested { bidirectional: bool },
    /// Pfeilart der Palette wechseln
    SetArrowKindRequested { kind: ArrowKind },
    /// Pfeilspitzen-Stil der Palette wechseln
    SetHeadStyleRequested { style: HeadStyle },
    /// Palettenfarbe für neue Elemente ändern
    SetPaletteColorRequested { color: [u8; 3] },
    /// Beschriftungstext für neue Formen ändern
    SetPaletteTextRequested { text: String },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
