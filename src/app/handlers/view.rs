//! Handler für Sicht und Viewport.

use glam::Vec2;

use crate::app::state::AppState;
use crate::core::Viewport;
use crate::shared::options::FIT_MARGIN_FACTOR;

/// Verschiebt die Sicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    state.view.viewport.pan_screen(delta_screen);
}

/// Multiplikativer Zoom um einen Bildschirmpunkt.
pub fn zoom_towards(state: &mut AppState, screen: Vec2, factor: f32) {
    let new_zoom = state.view.viewport.zoom * factor;
    state.view.viewport.zoom_around(screen, new_zoom);
}

/// Stufenweiser Zoom um den Mittelpunkt der Zeichenfläche.
pub fn zoom_step(state: &mut AppState, zoom_in: bool) {
    let factor = if zoom_in {
        state.options.zoom_step
    } else {
        1.0 / state.options.zoom_step
    };
    let center = state.view.screen_center();
    zoom_towards(state, center, factor);
}

/// Setzt die Sicht auf Zoom 1.0 und Scroll (0,0) zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.viewport = Viewport::new();
    log::info!("Sicht zurückgesetzt");
}

/// Zoomt so, dass der gesamte Inhalt mit Rand sichtbar ist.
/// Leere Szene: Reset.
pub fn zoom_to_fit(state: &mut AppState) {
    let Some(bounds) = state.scene.content_bounds() else {
        reset_view(state);
        return;
    };
    let size = bounds.size().max(Vec2::splat(1.0));
    let [vw, vh] = state.view.viewport_size;
    let zoom = ((vw / size.x).min(vh / size.y) * FIT_MARGIN_FACTOR)
        .clamp(Viewport::ZOOM_MIN, Viewport::ZOOM_MAX);

    let center = bounds.center();
    state.view.viewport.zoom = zoom;
    state.view.viewport.scroll = center - Vec2::new(vw, vh) * 0.5 / zoom;
}

pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

pub fn toggle_grid(state: &mut AppState) {
    state.view.show_grid = !state.view.show_grid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::{Element, ElementKind, ElementStyle};
    use approx::assert_relative_eq;

    #[test]
    fn zoom_to_fit_centers_content() {
        let mut state = AppState::new();
        state.view.viewport_size = [1000.0, 1000.0];
        state.scene_mut().add(Element::new(
            1,
            Vec2::new(100.0, 100.0),
            ElementStyle::default(),
            ElementKind::Rectangle {
                size: Vec2::new(100.0, 100.0),
            },
        ));

        zoom_to_fit(&mut state);

        // Inhaltsmitte (150,150) liegt danach in der Bildschirmmitte
        let screen = state.view.viewport.world_to_screen(Vec2::new(150.0, 150.0));
        assert_relative_eq!(screen.x, 500.0, epsilon = 1e-2);
        assert_relative_eq!(screen.y, 500.0, epsilon = 1e-2);
        assert_relative_eq!(state.view.viewport.zoom, 9.0, epsilon = 1e-3);
    }

    #[test]
    fn zoom_to_fit_on_empty_scene_resets() {
        let mut state = AppState::new();
        state.view.viewport.zoom = 5.0;
        state.view.viewport.scroll = Vec2::new(99.0, 99.0);

        zoom_to_fit(&mut state);
        assert_relative_eq!(state.view.viewport.zoom, 1.0);
        assert_eq!(state.view.viewport.scroll, Vec2::ZERO);
    }

    #[test]
    fn zoom_step_is_symmetric() {
        let mut state = AppState::new();
        zoom_step(&mut state, true);
        zoom_step(&mut state, false);
        assert_relative_eq!(state.view.viewport.zoom, 1.0, epsilon = 1e-4);
    }
}
