//! Handler für Selektionsbefehle jenseits der Pointer-Gesten.

use crate::app::state::AppState;

/// Selektiert alle nicht-gelöschten Elemente.
pub fn select_all(state: &mut AppState) {
    let live: Vec<_> = state.scene.live_elements().map(|e| e.id).collect();
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.extend(live);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::{Element, ElementKind, ElementStyle};
    use glam::Vec2;

    #[test]
    fn select_all_skips_deleted() {
        let mut state = AppState::new();
        for id in [1u64, 2, 3] {
            state.scene_mut().add(Element::new(
                id,
                Vec2::ZERO,
                ElementStyle::default(),
                ElementKind::Rectangle {
                    size: Vec2::new(10.0, 10.0),
                },
            ));
        }
        state.scene_mut().soft_delete(2);

        select_all(&mut state);
        assert_eq!(state.selection.len(), 2);
        assert!(!state.selection.contains(2));
    }
}
