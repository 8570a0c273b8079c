//! Core-Domänentypen: Elemente, Szene, Viewport, Resize-Mathematik.

pub mod element;
pub mod handles;
pub mod scene;
pub mod viewport;

pub use element::{
    distance_to_segment, Bounds, Element, ElementId, ElementKind, ElementStyle, FontFamily,
    StrokeStyle, TextAlign, MIN_ELEMENT_SIZE,
};
pub use handles::{apply_resize, handle_at_screen_point, selection_bounds, ResizeHandle};
pub use scene::{IdGenerator, Scene};
pub use viewport::Viewport;
