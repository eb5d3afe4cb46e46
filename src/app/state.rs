//! Application State — zentrale Datenhaltung.

use super::history::{DocumentHistory, Snapshot};
use super::CommandLog;
use crate::core::{Arrow, ArrowHandle, ArrowKind, Board, HeadStyle, ResizeHandle, Selection, Shape};
use crate::shared::{EditorOptions, DEFAULT_ELEMENT_COLOR};
use std::time::Instant;

/// Formwerkzeug der Palette — bestimmt, welche Form `AddShape` einfügt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeTool {
    /// Rechteck
    #[default]
    Rectangle,
    /// Kreis (Ellipse in der Bounding-Box)
    Circle,
    /// Gleichschenkliges Dreieck
    Triangle,
    /// Regelmäßiges Sechseck
    Polygon,
    /// Laufweg-Glyph mit fester Spitze
    DirectionalArrow,
}

impl ShapeTool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [ShapeTool; 5] = [
        ShapeTool::Rectangle,
        ShapeTool::Circle,
        ShapeTool::Triangle,
        ShapeTool::Polygon,
        ShapeTool::DirectionalArrow,
    ];

    /// Anzeigename für die Toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeTool::Rectangle => "Rechteck",
            ShapeTool::Circle => "Kreis",
            ShapeTool::Triangle => "Dreieck",
            ShapeTool::Polygon => "Sechseck",
            ShapeTool::DirectionalArrow => "Richtungspfeil",
        }
    }
}

/// Palette für neue Elemente (Werkzeug, Stile, Farbe, Beschriftung)
pub struct PaletteState {
    /// Aktives Formwerkzeug
    pub tool: ShapeTool,
    /// Richtungspfeil-Glyph gekrümmt statt gerade
    pub glyph_curved: bool,
    /// Richtungspfeil-Glyph mit Spitzen an beiden Enden
    pub glyph_bidirectional: bool,
    /// Pfeilart für neue Pfeile
    pub arrow_kind: ArrowKind,
    /// Spitzen-Stil für neue Pfeile
    pub head_style: HeadStyle,
    /// Farbe für neue Elemente
    pub color: [u8; 3],
    /// Beschriftungstext für neue Formen
    pub text: String,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteState {
    /// Erstellt die Standard-Palette (Rechteck, gerader Pfeil mit Dreiecksspitze).
    pub fn new() -> Self {
        Self {
            tool: ShapeTool::Rectangle,
            glyph_curved: false,
            glyph_bidirectional: false,
            arrow_kind: ArrowKind::Straight,
            head_style: HeadStyle::Triangle,
            color: DEFAULT_ELEMENT_COLOR,
            text: String::new(),
        }
    }
}

/// Aktive Zeiger-Geste auf dem Board
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Form wird verschoben (`grab_offset` = Zeiger minus Form-Position beim Start)
    DraggingShape { id: u64, grab_offset: glam::Vec2 },
    /// Form wird über einen der acht Griffe skaliert
    Resizing { id: u64, handle: ResizeHandle },
    /// Form wird um ihr Zentrum rotiert
    Rotating { id: u64 },
    /// Pfeilpunkt oder -linie wird gezogen (`last_pos` für Delta-Verschiebung)
    EditingArrowPoint {
        id: u64,
        handle: ArrowHandle,
        last_pos: glam::Vec2,
    },
}

impl Gesture {
    /// Gibt `true` zurück, solange eine Geste läuft.
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Speichern-unter-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der PNG-Export-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Export-Ergebnis)
    pub status_message: Option<String>,
    /// Zeigerposition in Board-Koordinaten (None = außerhalb des Boards)
    pub pointer_board_pos: Option<glam::Vec2>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            show_save_file_dialog: false,
            show_export_dialog: false,
            current_file_path: None,
            status_message: None,
            pointer_board_pos: None,
        }
    }
}

/// Zustand der entprellten Thumbnail-Erzeugung
pub struct ThumbnailState {
    /// Zuletzt beobachtete Dokument-Revision
    pub last_seen_revision: u64,
    /// Zeitpunkt der letzten beobachteten Änderung (None = nichts ausstehend)
    pub pending_since: Option<Instant>,
}

impl Default for ThumbnailState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailState {
    /// Erstellt den Ausgangszustand ohne ausstehende Erzeugung.
    pub fn new() -> Self {
        Self {
            last_seen_revision: 0,
            pending_since: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Board mit allen Elementen
    pub board: Board,
    /// Aktuell selektiertes Element
    pub selection: Selection,
    /// Palette für neue Elemente
    pub palette: PaletteState,
    /// Aktive Zeiger-Geste
    pub gesture: Gesture,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo-History (Snapshot-basiert)
    pub history: DocumentHistory,
    /// Laufzeit-Optionen (Farben, Thumbnail-Debounce)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Entprellte Thumbnail-Erzeugung
    pub thumbnail: ThumbnailState,
    /// Monoton wachsende Dokument-Revision (treibt den Thumbnail-Debounce)
    pub document_revision: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Board.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            selection: Selection::None,
            palette: PaletteState::new(),
            gesture: Gesture::Idle,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: DocumentHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            show_options_dialog: false,
            thumbnail: ThumbnailState::new(),
            document_revision: 0,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Formen zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.board.shapes.len()
    }

    /// Gibt die Anzahl der Pfeile zurück (für UI-Anzeige)
    pub fn arrow_count(&self) -> usize {
        self.board.arrows.len()
    }

    /// Aktuell selektierte Form, falls die Selektion eine Form ist.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection
            .shape_id()
            .and_then(|id| self.board.find_shape(id))
    }

    /// Aktuell selektierter Pfeil, falls die Selektion ein Pfeil ist.
    pub fn selected_arrow(&self) -> Option<&Arrow> {
        self.selection
            .arrow_id()
            .and_then(|id| self.board.find_arrow(id))
    }

    /// Undo helper
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Erhöht die Dokument-Revision ohne History-Eintrag (Undo, Laden).
    pub fn mark_document_changed(&mut self) {
        self.document_revision = self.document_revision.wrapping_add(1);
    }

    /// Hält den aktuellen Dokumentzustand in der History fest.
    /// Wird am Ende jedes mutierenden Use-Cases aufgerufen.
    pub fn record_document_snapshot(&mut self) {
        let snap = Snapshot::from_board(&self.board);
        self.history.record_snapshot(snap);
        self.mark_document_changed();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
