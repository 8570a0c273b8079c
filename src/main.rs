//! sketchboard.
//!
//! Interaktiver 2D-Szenen-Editor mit unendlicher Zeichenfläche,
//! Skizzen-Optik, Selektion und Undo/Redo.

use eframe::egui;
use glam::Vec2;
use sketchboard::render::{render_frame, EguiBackend, EguiTextMeasurer};
use sketchboard::ui::{self, TextOverlay};
use sketchboard::{AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("sketchboard v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("sketchboard"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "sketchboard",
            options,
            Box::new(|cc| Ok(Box::new(SketchboardApp::new(cc)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchboardApp {
    state: AppState,
    controller: AppController,
    /// Offenes Text-Edit-Overlay
    text_overlay: Option<TextOverlay>,
}

impl SketchboardApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_or_default(&config_path);

        let state = AppState::with_options(options);
        let controller =
            AppController::with_measurer(Box::new(EguiTextMeasurer::new(cc.egui_ctx.clone())));

        Self {
            state,
            controller,
            text_overlay: None,
        }
    }

    fn dispatch(&mut self, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(err) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {err:#}");
            }
        }
    }

    /// Synchronisiert das Overlay mit `state.editor.text_editing`:
    /// Doppelklick auf ein Text-Element öffnet es, Gestenabbruch oder
    /// Down daneben schließt es.
    fn sync_text_overlay(&mut self) {
        let overlay_target = self.text_overlay.as_ref().and_then(|o| o.target());
        match self.state.editor.text_editing {
            Some(id) if overlay_target != Some(id) => {
                self.text_overlay = TextOverlay::for_element(&self.state, id);
            }
            // Overlays für neue Texte (target None) verwaltet die UI selbst
            None if overlay_target.is_some() => {
                self.text_overlay = None;
            }
            _ => {}
        }
    }
}

impl eframe::App for SketchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        intents.extend(ui::render_toolbar(ctx, &self.state));
        intents.extend(ui::render_properties_panel(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

                let size = [response.rect.width(), response.rect.height()];
                if size != self.state.view.viewport_size {
                    intents.push(AppIntent::ViewportResized { size });
                }

                let editing = self.text_overlay.is_some();
                intents.extend(ui::collect_keyboard_intents(ui, editing));
                if !editing {
                    let pointer = ui::collect_pointer_intents(ui, &response);
                    // Doppelklick auf leere Fläche legt einen neuen Text an
                    let double = pointer
                        .iter()
                        .find_map(|i| match i {
                            AppIntent::PointerDoubleClicked { screen } => Some(*screen),
                            _ => None,
                        });
                    intents.extend(pointer);
                    self.dispatch(std::mem::take(&mut intents));

                    if let Some(screen) = double {
                        if self.state.editor.text_editing.is_none() {
                            let world = self.state.view.viewport.screen_to_world(screen);
                            self.text_overlay = Some(TextOverlay::for_new_text(world));
                        }
                    }
                } else {
                    self.dispatch(std::mem::take(&mut intents));
                }

                self.sync_text_overlay();

                let frame_scene = self.controller.build_frame_scene(&self.state);
                let origin = Vec2::new(response.rect.min.x, response.rect.min.y);
                let mut backend = EguiBackend::new(&painter, origin);
                render_frame(&mut backend, &frame_scene);
            });

        if let Some(mut overlay) = self.text_overlay.take() {
            let (overlay_intents, finished) = overlay.show(ctx, &self.state);
            if !finished {
                self.text_overlay = Some(overlay);
            }
            self.dispatch(overlay_intents);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let path = EditorOptions::config_path();
        if let Err(err) = self.state.options.save(&path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {err:#}");
        }
    }
}
