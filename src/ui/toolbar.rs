//! Werkzeugleiste am oberen Rand.

use crate::app::{AppIntent, AppState, EditorTool};

const TOOLS: [(EditorTool, &str, &str); 9] = [
    (EditorTool::Select, "Auswahl", "V"),
    (EditorTool::Hand, "Hand", "H"),
    (EditorTool::Rectangle, "Rechteck", "R"),
    (EditorTool::Diamond, "Raute", "D"),
    (EditorTool::Ellipse, "Ellipse", "O"),
    (EditorTool::Arrow, "Pfeil", "A"),
    (EditorTool::Line, "Linie", "L"),
    (EditorTool::Freehand, "Stift", "P"),
    (EditorTool::Eraser, "Radierer", "E"),
];

/// Rendert die Toolbar und sammelt die ausgelösten Intents.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (tool, label, shortcut) in TOOLS {
                let selected = state.editor.active_tool == tool;
                if ui
                    .selectable_label(selected, label)
                    .on_hover_text(format!("{label} ({shortcut})"))
                    .clicked()
                {
                    intents.push(AppIntent::ToolSelected { tool });
                }
            }

            ui.separator();

            if ui
                .add_enabled(state.history.can_undo(), egui::Button::new("↩ Undo"))
                .clicked()
            {
                intents.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.history.can_redo(), egui::Button::new("↪ Redo"))
                .clicked()
            {
                intents.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui.button("−").on_hover_text("Rauszoomen").clicked() {
                intents.push(AppIntent::ZoomOutRequested);
            }
            if ui
                .button(format!("{:.0} %", state.view.viewport.zoom * 100.0))
                .on_hover_text("Zoom zurücksetzen")
                .clicked()
            {
                intents.push(AppIntent::ResetViewRequested);
            }
            if ui.button("+").on_hover_text("Reinzoomen").clicked() {
                intents.push(AppIntent::ZoomInRequested);
            }
            if ui.button("Einpassen").clicked() {
                intents.push(AppIntent::ZoomToFitRequested);
            }

            ui.separator();

            let mut show_grid = state.view.show_grid;
            if ui.checkbox(&mut show_grid, "Raster").changed() {
                intents.push(AppIntent::GridToggled);
            }
        });
    });

    intents
}
