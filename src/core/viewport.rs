//! Viewport-Transform zwischen Bildschirm- und Weltkoordinaten.

use glam::Vec2;

/// Sichttransformation: Zoomfaktor plus Weltkoordinate der linken oberen
/// Bildschirmecke. Wird von Pan/Zoom-Gesten mutiert und ist nie Teil der
/// Undo-History.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Zoomfaktor (1.0 = eine Welteinheit pro Pixel)
    pub zoom: f32,
    /// Welt-Koordinate am linken/oberen Bildschirmrand
    pub scroll: Vec2,
}

impl Viewport {
    /// Minimaler Zoomfaktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoomfaktor.
    pub const ZOOM_MAX: f32 = 30.0;

    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            scroll: Vec2::ZERO,
        }
    }

    /// Welt → Bildschirm: `(p - scroll) * zoom`.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.scroll) * self.zoom
    }

    /// Bildschirm → Welt; exakte Inverse von [`Self::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.scroll
    }

    /// Setzt den Zoom geklemmt auf [`ZOOM_MIN`](Self::ZOOM_MIN)..[`ZOOM_MAX`](Self::ZOOM_MAX)
    /// und korrigiert den Scroll so, dass der Weltpunkt unter `screen`
    /// an derselben Bildschirmposition bleibt:
    /// `scroll' = scroll + screen * (1/zoom_alt - 1/zoom_neu)` pro Achse.
    pub fn zoom_around(&mut self, screen: Vec2, new_zoom: f32) {
        let old_zoom = self.zoom;
        let new_zoom = new_zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.scroll += screen * (1.0 / old_zoom - 1.0 / new_zoom);
        self.zoom = new_zoom;
    }

    /// Verschiebt die Sicht um ein Bildschirm-Delta: `scroll -= Δ/zoom`.
    /// Ändert nie den Zoom.
    pub fn pan_screen(&mut self, delta_screen: Vec2) {
        self.scroll -= delta_screen / self.zoom;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_screen_roundtrip() {
        let vp = Viewport {
            zoom: 2.5,
            scroll: Vec2::new(-120.0, 37.5),
        };
        let p = Vec2::new(13.25, -99.0);
        let back = vp.screen_to_world(vp.world_to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
    }

    #[test]
    fn zoom_around_keeps_cursor_world_point_stable() {
        let mut vp = Viewport {
            zoom: 1.0,
            scroll: Vec2::new(50.0, -20.0),
        };
        let cursor = Vec2::new(333.0, 111.0);
        let before = vp.screen_to_world(cursor);

        vp.zoom_around(cursor, 4.0);
        let after = vp.screen_to_world(cursor);

        assert_relative_eq!(after.x, before.x, epsilon = 1e-3);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-3);
        assert_relative_eq!(vp.zoom, 4.0);
    }

    #[test]
    fn zoom_around_clamps_to_bounds() {
        let mut vp = Viewport::new();
        vp.zoom_around(Vec2::ZERO, 1000.0);
        assert_relative_eq!(vp.zoom, Viewport::ZOOM_MAX);

        vp.zoom_around(Vec2::ZERO, 0.0001);
        assert_relative_eq!(vp.zoom, Viewport::ZOOM_MIN);
    }

    #[test]
    fn pan_updates_scroll_by_screen_delta_over_zoom() {
        let mut vp = Viewport {
            zoom: 2.0,
            scroll: Vec2::ZERO,
        };
        vp.pan_screen(Vec2::new(10.0, -4.0));
        assert_relative_eq!(vp.scroll.x, -5.0);
        assert_relative_eq!(vp.scroll.y, 2.0);
        assert_relative_eq!(vp.zoom, 2.0, epsilon = 1e-6);
    }
}
