use glam::Vec2;

use crate::core::Viewport;

/// Sichtbezogener Anwendungszustand. Bewusst außerhalb der Undo-History:
/// Pan und Zoom sind nie rückgängig machbar.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Sichttransformation
    pub viewport: Viewport,
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Raster anzeigen
    pub show_grid: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(),
            viewport_size: [1280.0, 720.0],
            show_grid: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bildschirmmittelpunkt der Zeichenfläche.
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.viewport_size[0] * 0.5, self.viewport_size[1] * 0.5)
    }
}
