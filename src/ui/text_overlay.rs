//! Text-Edit-Overlay.
//!
//! Text wird nie auf der Zeichenfläche selbst editiert, sondern in einem
//! egui-Fenster über dem Element; der Orchestrator spart das Element
//! währenddessen aus. Das Overlay hält den Puffer lokal und schickt erst
//! beim Abschluss einen Intent.

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::{ElementId, ElementKind};

/// Lokaler Zustand des offenen Overlays.
pub struct TextOverlay {
    /// Bestehendes Element oder None bei Neuanlage
    target: Option<ElementId>,
    /// Weltposition des Textankers
    world: Vec2,
    buffer: String,
}

impl TextOverlay {
    /// Overlay für ein bestehendes Text-Element.
    pub fn for_element(state: &AppState, id: ElementId) -> Option<Self> {
        let element = state.scene.get(id).filter(|e| !e.deleted)?;
        let ElementKind::Text { content, .. } = &element.kind else {
            return None;
        };
        Some(Self {
            target: Some(id),
            world: element.position,
            buffer: content.clone(),
        })
    }

    /// Overlay für einen neuen Text an einer Weltposition.
    pub fn for_new_text(world: Vec2) -> Self {
        Self {
            target: None,
            world,
            buffer: String::new(),
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    /// Zeigt das Overlay. Gibt `(intents, finished)` zurück; bei
    /// `finished` schließt der Aufrufer das Overlay.
    pub fn show(&mut self, ctx: &egui::Context, state: &AppState) -> (Vec<AppIntent>, bool) {
        let mut intents = Vec::new();
        let mut finished = false;

        let screen = state.view.viewport.world_to_screen(self.world);
        egui::Window::new("Text")
            .collapsible(false)
            .resizable(false)
            .default_pos(egui::pos2(screen.x, screen.y))
            .show(ctx, |ui| {
                let edit = ui.add(
                    egui::TextEdit::multiline(&mut self.buffer)
                        .desired_rows(2)
                        .desired_width(240.0),
                );
                edit.request_focus();

                ui.horizontal(|ui| {
                    if ui.button("Fertig").clicked() {
                        intents.push(AppIntent::TextEditCommitted {
                            target: self.target,
                            content: self.buffer.clone(),
                            world: self.world,
                        });
                        finished = true;
                    }
                    if ui.button("Abbrechen").clicked()
                        || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        intents.push(AppIntent::TextEditCancelled);
                        finished = true;
                    }
                });
            });

        (intents, finished)
    }
}
