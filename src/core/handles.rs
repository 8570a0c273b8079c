//! Selektions- und Resize-Mathematik: Selektions-Bounds, die acht
//! Anfasser und die Bounds-Transformation beim Ziehen eines Anfassers.

use glam::Vec2;

use super::element::{Bounds, ElementId, MIN_ELEMENT_SIZE};
use super::scene::Scene;
use super::viewport::Viewport;

/// Die acht Resize-Anfasser an Ecken und Kantenmitten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeHandle {
    /// Feste Prüf-Reihenfolge: nw, n, ne, e, se, s, sw, w.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::North,
        ResizeHandle::NorthEast,
        ResizeHandle::East,
        ResizeHandle::SouthEast,
        ResizeHandle::South,
        ResizeHandle::SouthWest,
        ResizeHandle::West,
    ];

    /// Ankerposition des Anfassers auf den (bereits gepaddeten) Bounds.
    pub fn anchor(self, b: &Bounds) -> Vec2 {
        let c = b.center();
        match self {
            ResizeHandle::NorthWest => b.min,
            ResizeHandle::North => Vec2::new(c.x, b.min.y),
            ResizeHandle::NorthEast => Vec2::new(b.max.x, b.min.y),
            ResizeHandle::East => Vec2::new(b.max.x, c.y),
            ResizeHandle::SouthEast => b.max,
            ResizeHandle::South => Vec2::new(c.x, b.max.y),
            ResizeHandle::SouthWest => Vec2::new(b.min.x, b.max.y),
            ResizeHandle::West => Vec2::new(b.min.x, c.y),
        }
    }

    fn moves_left_edge(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthWest | ResizeHandle::SouthWest | ResizeHandle::West
        )
    }

    fn moves_right_edge(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthEast | ResizeHandle::SouthEast | ResizeHandle::East
        )
    }

    fn moves_top_edge(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthWest | ResizeHandle::NorthEast | ResizeHandle::North
        )
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(
            self,
            ResizeHandle::SouthWest | ResizeHandle::SouthEast | ResizeHandle::South
        )
    }
}

/// Vereinigte Bounds der selektierten, nicht-gelöschten Elemente.
/// None bei leerer Selektion — dann gibt es keine Selektionsbox.
pub fn selection_bounds<I>(scene: &Scene, selected: I) -> Option<Bounds>
where
    I: IntoIterator<Item = ElementId>,
{
    selected
        .into_iter()
        .filter_map(|id| scene.get(id))
        .filter(|e| !e.deleted)
        .map(|e| e.bounds())
        .reduce(|a, b| a.union(&b))
}

/// Erster Anfasser (in fester nw..w-Reihenfolge) innerhalb des
/// Pixel-Trefferradius um den Bildschirmpunkt, oder None.
///
/// `padding` ist der Welt-Abstand der Anfasser von den Selektions-Bounds.
pub fn handle_at_screen_point(
    bounds: &Bounds,
    padding: f32,
    viewport: &Viewport,
    screen: Vec2,
    hit_radius_px: f32,
) -> Option<ResizeHandle> {
    let padded = bounds.expanded(padding);
    ResizeHandle::ALL.into_iter().find(|handle| {
        let anchor_screen = viewport.world_to_screen(handle.anchor(&padded));
        (anchor_screen - screen).length() <= hit_radius_px
    })
}

/// Wendet einen Anfasser-Drag auf die Original-Bounds an.
///
/// Eck-Anfasser bewegen beide zugehörigen Kanten, Kanten-Anfasser nur die
/// senkrechte Achse. Breite und Höhe werden bei [`MIN_ELEMENT_SIZE`]
/// gedeckelt — jenseits des Minimums blockiert die gezogene Kante,
/// statt das Element zu invertieren.
pub fn apply_resize(original: &Bounds, handle: ResizeHandle, delta: Vec2) -> Bounds {
    let mut min = original.min;
    let mut max = original.max;

    if handle.moves_left_edge() {
        min.x = (original.min.x + delta.x).min(original.max.x - MIN_ELEMENT_SIZE);
    }
    if handle.moves_right_edge() {
        max.x = (original.max.x + delta.x).max(original.min.x + MIN_ELEMENT_SIZE);
    }
    if handle.moves_top_edge() {
        min.y = (original.min.y + delta.y).min(original.max.y - MIN_ELEMENT_SIZE);
    }
    if handle.moves_bottom_edge() {
        max.y = (original.max.y + delta.y).max(original.min.y + MIN_ELEMENT_SIZE);
    }

    Bounds { min, max }
}
