use crate::core::{Arrow, Board, Shape};

/// Snapshot des Dokumentzustands für Undo.
///
/// Hält nur die Element-Listen; Selektion, Palette und Optionen
/// bleiben vom Undo unberührt. Gruppen werden nicht mitgeschnitten —
/// nach dem Wiederherstellen bereinigt der Aufrufer verwaiste Gruppen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub shapes: Vec<Shape>,
    pub arrows: Vec<Arrow>,
}

impl Snapshot {
    /// Erstellt einen Snapshot aus dem aktuellen Board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            shapes: board.shapes.clone(),
            arrows: board.arrows.clone(),
        }
    }

    /// Schreibt die Element-Listen zurück ins Board.
    pub fn apply_to(self, board: &mut Board) {
        board.shapes = self.shapes;
        board.arrows = self.arrows;
    }
}

/// Undo-Verlauf als Snapshot-Liste mit Positionszeiger.
///
/// `entries[index]` ist immer der zuletzt festgehaltene Zustand; Undo
/// springt auf dessen Vorgänger. Es gibt kein Redo.
pub struct DocumentHistory {
    entries: Vec<Snapshot>,
    index: usize,
    max_depth: usize,
}

impl DocumentHistory {
    /// Erstellt einen Verlauf mit maximaler Tiefe, geseedet mit dem leeren Board.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            entries: vec![Snapshot::from_board(&Board::default())],
            index: 0,
            max_depth,
        }
    }

    /// Hält einen neuen Zustand fest. Nach einem Undo verworfene
    /// Folgezustände werden dabei abgeschnitten.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snap);
        self.index += 1;
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
            self.index -= 1;
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Springt einen Schritt zurück und liefert den wiederherzustellenden Zustand.
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Setzt den Verlauf auf einen einzelnen Ausgangszustand zurück (z.B. nach Laden).
    pub fn reset(&mut self, board: &Board) {
        self.entries.clear();
        self.entries.push(Snapshot::from_board(board));
        self.index = 0;
    }

    /// Anzahl der gehaltenen Snapshots (für Statusanzeige und Tests).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Snapshots vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
