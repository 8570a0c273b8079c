//! Application-Layer: Controller, State, Events und Gesten-Logik.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod interaction;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton, PointerModifiers, StyleUpdate};
pub use history::SceneHistory;
pub use interaction::Interaction;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, SelectionState, ViewState};
