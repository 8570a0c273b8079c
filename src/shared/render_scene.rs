//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::{Bounds, Element, ElementId, Scene, Viewport};
use crate::shared::options::EditorOptions;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct FrameScene {
    /// Die committete Szene (Arc für O(1)-Clone pro Frame)
    pub scene: Arc<Scene>,
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// IDs der aktuell selektierten Elemente
    pub selected_ids: Arc<IndexSet<ElementId>>,
    /// In-Arbeit-Element der laufenden Geste (wird zuoberst gezeichnet)
    pub pending: Option<Element>,
    /// Gummiband-Rechteck der laufenden Selektionsgeste (Weltkoordinaten)
    pub rubber_band: Option<Bounds>,
    /// Element in externem Text-Edit-Overlay — wird komplett übersprungen
    pub text_editing: Option<ElementId>,
    /// Raster anzeigen
    pub show_grid: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl FrameScene {
    /// Gibt zurück, ob die Szene sichtbaren Inhalt hat.
    pub fn has_content(&self) -> bool {
        self.scene.live_count() > 0 || self.pending.is_some()
    }
}
