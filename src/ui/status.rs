//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

fn tool_name(tool: EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Auswahl",
        EditorTool::Hand => "Hand",
        EditorTool::Rectangle => "Rechteck",
        EditorTool::Ellipse => "Ellipse",
        EditorTool::Diamond => "Raute",
        EditorTool::Arrow => "Pfeil",
        EditorTool::Line => "Linie",
        EditorTool::Freehand => "Stift",
        EditorTool::Eraser => "Radierer",
    }
}

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Elemente: {}", state.scene.live_count()));
            ui.separator();
            ui.label(format!("Selektiert: {}", state.selection.len()));
            ui.separator();
            ui.label(format!("Zoom: {:.0} %", state.view.viewport.zoom * 100.0));
            ui.separator();
            ui.label(format!("Werkzeug: {}", tool_name(state.editor.active_tool)));
        });
    });
}
