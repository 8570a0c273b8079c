//! Ableitung der Render-Szene aus dem Anwendungszustand.

use std::sync::Arc;

use crate::app::interaction::Interaction;
use crate::app::state::AppState;
use crate::core::Bounds;
use crate::shared::FrameScene;

/// Friert den für einen Frame relevanten Zustand ein.
/// Arc-Klone für Szene und Selektion, keine Tiefenkopien.
pub fn build(state: &AppState) -> FrameScene {
    let rubber_band = match &state.editor.interaction {
        Interaction::RubberBand {
            start_world,
            current_world,
        } => Some(Bounds::from_corners(*start_world, *current_world)),
        _ => None,
    };

    FrameScene {
        scene: Arc::clone(&state.scene),
        viewport: state.view.viewport,
        viewport_size: state.view.viewport_size,
        selected_ids: Arc::clone(&state.selection.selected_ids),
        pending: state.editor.pending.clone(),
        rubber_band,
        text_editing: state.editor.text_editing,
        show_grid: state.view.show_grid,
        options: state.options.clone(),
    }
}
