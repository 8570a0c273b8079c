//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod text;

pub use options::EditorOptions;
pub use render_scene::FrameScene;
pub use text::{FixedTextMeasurer, TextMeasurer};
