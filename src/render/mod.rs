//! Rendering: Backend-Vertrag, Orchestrator und egui-Referenz-Backend.

pub mod backend;
pub mod orchestrator;
pub mod painter;

pub use backend::{DrawBackend, ShapeStyle};
pub use orchestrator::render_frame;
pub use painter::{EguiBackend, EguiTextMeasurer};
