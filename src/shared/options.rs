//! Zentrale Konfiguration für den Taktikboard-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Farbe für Selektions-Konturen und Griff-Ränder (RGB: Blau).
pub const SELECTION_COLOR: [u8; 3] = [37, 99, 235];
/// Füllfarbe der Griff-Flächen (RGB: Weiß).
pub const HANDLE_FILL_COLOR: [u8; 3] = [255, 255, 255];

// ── Spielfeld ───────────────────────────────────────────────────────

/// Grundfarbe des Rasens (RGB: Dunkelgrün).
pub const FIELD_GRASS_COLOR: [u8; 3] = [46, 139, 87];
/// Farbe der Spielfeldmarkierungen (RGB: Weiß).
pub const FIELD_LINE_COLOR: [u8; 3] = [255, 255, 255];
/// Farbe der Mährichtungs-Streifen (RGB: noch dunkleres Grün).
pub const FIELD_STRIPE_COLOR: [u8; 3] = [38, 115, 73];

// ── Palette ─────────────────────────────────────────────────────────

/// Standard-Elementfarbe neuer Formen und Pfeile (RGB: Grün).
pub const DEFAULT_ELEMENT_COLOR: [u8; 3] = [76, 175, 80];

// ── Thumbnails ──────────────────────────────────────────────────────

/// Wartezeit nach der letzten Dokument-Änderung, bevor ein Thumbnail
/// gerendert wird (Millisekunden).
pub const THUMBNAIL_DEBOUNCE_MS: u64 = 100;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `taktikboard_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Farbe für Selektions-Konturen und Griff-Ränder
    pub selection_color: [u8; 3],
    /// Füllfarbe der Griff-Flächen
    pub handle_fill_color: [u8; 3],

    // ── Spielfeld ───────────────────────────────────────────────
    /// Grundfarbe des Rasens
    pub field_grass_color: [u8; 3],
    /// Farbe der Spielfeldmarkierungen
    pub field_line_color: [u8; 3],
    /// Farbe der Mährichtungs-Streifen
    pub field_stripe_color: [u8; 3],

    // ── Thumbnails ──────────────────────────────────────────────
    /// Wartezeit nach der letzten Änderung bis zum Thumbnail (ms)
    #[serde(default = "default_thumbnail_debounce_ms")]
    pub thumbnail_debounce_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            selection_color: SELECTION_COLOR,
            handle_fill_color: HANDLE_FILL_COLOR,

            field_grass_color: FIELD_GRASS_COLOR,
            field_line_color: FIELD_LINE_COLOR,
            field_stripe_color: FIELD_STRIPE_COLOR,

            thumbnail_debounce_ms: THUMBNAIL_DEBOUNCE_MS,
        }
    }
}

/// Serde-Default für `thumbnail_debounce_ms` (Abwärtskompatibilität
/// bestehender TOML-Dateien).
fn default_thumbnail_debounce_ms() -> u64 {
    THUMBNAIL_DEBOUNCE_MS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("taktikboard_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("taktikboard_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_entsprechen_den_konstanten() {
        let opts = EditorOptions::default();
        assert_eq!(opts.selection_color, SELECTION_COLOR);
        assert_eq!(opts.field_grass_color, FIELD_GRASS_COLOR);
        assert_eq!(opts.thumbnail_debounce_ms, THUMBNAIL_DEBOUNCE_MS);
    }

    #[test]
    fn test_toml_roundtrip_und_fehlendes_feld() {
        let opts = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung");
        let restored: EditorOptions = toml::from_str(&toml_str).expect("Deserialisierung");
        assert_eq!(restored, opts);

        // Ältere Dateien ohne Debounce-Feld laden mit Default.
        let stripped: String = toml_str
            .lines()
            .filter(|l| !l.starts_with("thumbnail_debounce_ms"))
            .collect::<Vec<_>>()
            .join("\n");
        let restored: EditorOptions = toml::from_str(&stripped).expect("Alte Datei lesbar");
        assert_eq!(restored.thumbnail_debounce_ms, THUMBNAIL_DEBOUNCE_MS);
    }
}
