//! UI-Komponenten: Toolbar, Properties, Status, Input-Handling, Text-Overlay.

pub mod input;
pub mod keyboard;
pub mod properties;
pub mod status;
pub mod text_overlay;
pub mod toolbar;

pub use input::collect_pointer_intents;
pub use keyboard::collect_keyboard_intents;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use text_overlay::TextOverlay;
pub use toolbar::render_toolbar;
