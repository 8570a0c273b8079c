//! Application Controller für zentrale Event-Verarbeitung.

use super::{interaction, render_scene};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{FixedTextMeasurer, FrameScene, TextMeasurer};

/// Orchestriert UI-Events über Intent → Command → Handler auf den
/// AppState. Hält den injizierten Textvermesser, da Text-Operationen
/// Backend-Wissen brauchen, das der Zustand selbst nicht hat.
pub struct AppController {
    measurer: Box<dyn TextMeasurer>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Controller mit deterministischem Fallback-Vermesser (Tests,
    /// headless). Die UI-Schicht injiziert ihren eigenen.
    pub fn new() -> Self {
        Self {
            measurer: Box::new(FixedTextMeasurer::default()),
        }
    }

    pub fn with_measurer(measurer: Box<dyn TextMeasurer>) -> Self {
        Self { measurer }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Gesten-Zustandsmaschine und die Feature-Handler.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Pointer-Gesten ===
            AppCommand::PointerDown {
                screen,
                button,
                modifiers,
                pressure,
            } => interaction::pointer_down(state, screen, button, modifiers, pressure),
            AppCommand::PointerDouble { screen } => interaction::double_click(state, screen),
            AppCommand::PointerDrag { screen, pressure } => {
                interaction::pointer_move(state, screen, pressure)
            }
            AppCommand::PointerUp { screen } => interaction::pointer_up(state, screen),
            AppCommand::CancelGesture => interaction::cancel(state),

            // === Sicht & Viewport ===
            AppCommand::PanView { delta_screen } => handlers::view::pan(state, delta_screen),
            AppCommand::ZoomView { screen, factor } => {
                handlers::view::zoom_towards(state, screen, factor)
            }
            AppCommand::ZoomStep { zoom_in } => handlers::view::zoom_step(state, zoom_in),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomToFit => handlers::view::zoom_to_fit(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),

            // === Werkzeuge & Bearbeiten ===
            AppCommand::SetTool { tool } => handlers::edit::set_tool(state, tool),
            AppCommand::DeleteSelected => handlers::edit::delete_selected(state),
            AppCommand::ApplyStyleUpdate { update } => {
                handlers::edit::apply_style_update(state, &update, self.measurer.as_ref())
            }
            AppCommand::AddElement { element } => {
                handlers::edit::add_element(state, element, self.measurer.as_ref())
            }
            AppCommand::SoftDeleteElements { ids } => {
                handlers::edit::soft_delete_by_ids(state, &ids)
            }
            AppCommand::CommitTextEdit {
                target,
                content,
                world,
            } => handlers::edit::commit_text_edit(
                state,
                target,
                content,
                world,
                self.measurer.as_ref(),
            ),
            AppCommand::CancelTextEdit => {
                state.editor.text_editing = None;
            }

            // === Selektion ===
            AppCommand::SelectAll => handlers::selection::select_all(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_frame_scene(&self, state: &AppState) -> FrameScene {
        render_scene::build(state)
    }
}
