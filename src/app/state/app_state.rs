use std::sync::Arc;

use crate::app::command_log::CommandLog;
use crate::app::history::SceneHistory;
use crate::core::{IdGenerator, Scene};
use crate::shared::EditorOptions;

use super::editor::EditorToolState;
use super::selection::SelectionState;
use super::view::ViewState;

/// Gesamter Anwendungszustand.
///
/// Die Szene liegt hinter einem `Arc` und wird per Copy-on-Write mutiert;
/// History-Snapshots sind dadurch reine Arc-Klone. Sicht, Selektion und
/// Werkzeugzustand leben daneben und sind nie Teil der History.
pub struct AppState {
    /// Committete Szene (Copy-on-Write über [`AppState::scene_mut`])
    pub scene: Arc<Scene>,
    /// Monotone ID-Vergabe; bewusst außerhalb der Szene, damit IDs auch
    /// über Undo hinweg nie wiederverwendet werden
    pub ids: IdGenerator,
    /// Sichtzustand (Viewport, Fläche, Raster)
    pub view: ViewState,
    /// Selektionszustand
    pub selection: SelectionState,
    /// Werkzeug- und Gestenzustand
    pub editor: EditorToolState,
    /// Lineare Undo/Redo-History
    pub history: SceneHistory,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_options(EditorOptions::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Arc::new(Scene::new()),
            ids: IdGenerator::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(options.default_element_style()),
            history: SceneHistory::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Mutable Sicht auf die Szene; klont nur, wenn die Szene noch mit
    /// einem History-Snapshot geteilt ist.
    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        Arc::make_mut(&mut self.scene)
    }

    /// Legt den aktuellen Szenenzustand als neuen History-Snapshot ab.
    /// Genau ein Push pro abgeschlossener Benutzeroperation.
    pub fn commit_history(&mut self) {
        self.history.push(Arc::clone(&self.scene));
    }

    /// Treffer-Toleranz für Pfad-Elemente, von Pixeln in Welteinheiten
    /// umgerechnet. Bleibt auf dem Bildschirm zoomunabhängig konstant.
    pub fn hit_tolerance_world(&self) -> f32 {
        self.options.hit_tolerance_px / self.view.viewport.zoom
    }
}
