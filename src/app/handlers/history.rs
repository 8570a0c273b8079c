//! Handler für Undo/Redo.

use crate::app::interaction::Interaction;
use crate::app::state::AppState;

/// Geht einen History-Schritt zurück. Während einer laufenden Geste
/// ein No-op, ebenso am Anfang der History.
pub fn undo(state: &mut AppState) {
    if !state.editor.interaction.is_idle() {
        return;
    }
    if let Some(snapshot) = state.history.undo() {
        state.scene = snapshot;
        after_jump(state);
        log::info!("Undo ({} Elemente live)", state.scene.live_count());
    }
}

/// Geht einen History-Schritt vor; No-op am Ende der History oder
/// während einer Geste.
pub fn redo(state: &mut AppState) {
    if !state.editor.interaction.is_idle() {
        return;
    }
    if let Some(snapshot) = state.history.redo() {
        state.scene = snapshot;
        after_jump(state);
        log::info!("Redo ({} Elemente live)", state.scene.live_count());
    }
}

/// Nach jedem History-Sprung: Selektion auf live Elemente beschneiden,
/// Pending und Text-Edit verwerfen.
fn after_jump(state: &mut AppState) {
    state.selection.prune_to_live(&state.scene);
    state.editor.pending = None;
    state.editor.text_editing = None;
    state.editor.interaction = Interaction::Idle;
}
