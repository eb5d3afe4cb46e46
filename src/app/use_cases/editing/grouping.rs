//! Use-Case: Einzelgruppen erstellen und auflösen.

use crate::app::AppState;
use crate::core::{Board, ElementGroup};

/// Nimmt ein Element in eine neue Einzelgruppe auf.
pub fn group_element(state: &mut AppState, id: u64) {
    let Some(current_group) = group_of(&state.board, id) else {
        log::warn!("Element {} nicht gefunden, keine Gruppe erstellt", id);
        return;
    };
    if current_group.is_some() {
        log::debug!("Element {} ist bereits gruppiert", id);
        return;
    }

    let group_id = state.board.next_element_id();
    let name = format!("Gruppe {}", state.board.groups.len() + 1);
    set_group_id(&mut state.board, id, Some(group_id));
    state.board.groups.push(ElementGroup {
        id: group_id,
        element_ids: vec![id],
        name: name.clone(),
    });
    state.record_document_snapshot();
    log::info!("{} erstellt (Element {})", name, id);
}

/// Löst ein Element aus seiner Gruppe; leere Gruppen verschwinden.
pub fn ungroup_element(state: &mut AppState, id: u64) {
    let Some(current_group) = group_of(&state.board, id) else {
        log::warn!("Element {} nicht gefunden, nichts aufgelöst", id);
        return;
    };
    if current_group.is_none() {
        log::debug!("Element {} ist nicht gruppiert", id);
        return;
    }

    set_group_id(&mut state.board, id, None);
    state.board.prune_empty_groups();
    state.record_document_snapshot();
    log::info!("Element {} aus Gruppe gelöst", id);
}

/// Gruppenzugehörigkeit eines Elements; äußeres None = Element fehlt.
fn group_of(board: &Board, id: u64) -> Option<Option<u64>> {
    board
        .find_shape(id)
        .map(|shape| shape.group_id)
        .or_else(|| board.find_arrow(id).map(|arrow| arrow.group_id))
}

fn set_group_id(board: &mut Board, id: u64, group_id: Option<u64>) {
    if let Some(shape) = board.find_shape_mut(id) {
        shape.group_id = group_id;
        return;
    }
    if let Some(arrow) = board.find_arrow_mut(id) {
        arrow.group_id = group_id;
    }
}
