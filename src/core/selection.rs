//! Selektion als Summen-Typ: nichts, eine Form oder ein Pfeil.

/// Aktuelle Selektion des Editors.
///
/// Höchstens ein Element ist selektiert; "Form und Pfeil gleichzeitig"
/// ist im Typ nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nichts selektiert
    #[default]
    None,
    /// Eine Form (per ID)
    Shape(u64),
    /// Ein Pfeil (per ID)
    Arrow(u64),
}

impl Selection {
    /// ID der selektierten Form, falls eine Form selektiert ist.
    pub fn shape_id(&self) -> Option<u64> {
        match self {
            Selection::Shape(id) => Some(*id),
            _ => None,
        }
    }

    /// ID des selektierten Pfeils, falls ein Pfeil selektiert ist.
    pub fn arrow_id(&self) -> Option<u64> {
        match self {
            Selection::Arrow(id) => Some(*id),
            _ => None,
        }
    }

    /// ID des selektierten Elements, egal welcher Art.
    pub fn element_id(&self) -> Option<u64> {
        match self {
            Selection::None => None,
            Selection::Shape(id) | Selection::Arrow(id) => Some(*id),
        }
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}
