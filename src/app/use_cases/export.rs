//! Use-Case-Funktionen für PNG-Export und entprellte Thumbnails.

use crate::app::AppState;
use crate::core::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::render::draw_list::build_draw_list;
use crate::shared::RenderScene;
use std::time::{Duration, Instant};

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Rendert das Board in Originalauflösung und schreibt es als PNG.
///
/// Gerendert wird derselbe Display-List-Stand wie am Bildschirm —
/// inklusive Selektions-Overlay, falls gerade ein Element selektiert ist.
pub fn export_png(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let png = render_board_png(state)?;
    std::fs::write(&path, &png)?;
    log::info!("PNG exportiert: {} ({} Bytes)", path, png.len());
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    Ok(())
}

/// Rastert den aktuellen Board-Zustand zu PNG-Bytes.
pub fn render_board_png(state: &AppState) -> anyhow::Result<Vec<u8>> {
    let scene = RenderScene {
        board: &state.board,
        selection: state.selection,
        options: &state.options,
    };
    let ops = build_draw_list(&scene);
    let image = taktikboard_raster::render_ops(BOARD_WIDTH as u32, BOARD_HEIGHT as u32, &ops);
    taktikboard_raster::encode_png(&image)
}

/// Liefert ein frisches Thumbnail, sobald das Dokument für die
/// Debounce-Dauer unverändert geblieben ist.
///
/// Jede neue Revision startet die Wartezeit neu (trailing debounce);
/// ohne ausstehende Änderung kommt `None` zurück.
pub fn poll_thumbnail(state: &mut AppState, now: Instant) -> anyhow::Result<Option<Vec<u8>>> {
    if state.document_revision != state.thumbnail.last_seen_revision {
        state.thumbnail.last_seen_revision = state.document_revision;
        state.thumbnail.pending_since = Some(now);
        return Ok(None);
    }

    let Some(pending_since) = state.thumbnail.pending_since else {
        return Ok(None);
    };
    let debounce = Duration::from_millis(state.options.thumbnail_debounce_ms);
    if now.duration_since(pending_since) < debounce {
        return Ok(None);
    }

    state.thumbnail.pending_since = None;
    let png = render_board_png(state)?;
    log::debug!("Thumbnail erzeugt ({} Bytes)", png.len());
    Ok(Some(png))
}
