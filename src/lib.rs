//! sketchboard Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, Interaction,
    PointerButton, PointerModifiers, SceneHistory, SelectionState, StyleUpdate, ViewState,
};
pub use core::{
    Bounds, Element, ElementId, ElementKind, ElementStyle, IdGenerator, ResizeHandle, Scene,
    Viewport,
};
pub use render::{DrawBackend, EguiBackend, EguiTextMeasurer, ShapeStyle};
pub use shared::{EditorOptions, FixedTextMeasurer, FrameScene, TextMeasurer};
