//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool};

/// Sammelt Keyboard-Shortcuts. Während ein Text-Overlay offen ist,
/// gehören alle Tasten dem Overlay.
pub fn collect_keyboard_intents(ui: &egui::Ui, text_editing: bool) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    if text_editing {
        return intents;
    }

    let (modifiers, key_z, key_y) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if modifiers.command && key_z && !modifiers.shift {
        intents.push(AppIntent::UndoRequested);
    }
    if modifiers.command && (key_y || (modifiers.shift && key_z)) {
        intents.push(AppIntent::RedoRequested);
    }

    let (key_a, key_del, key_escape) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_a {
        intents.push(AppIntent::SelectAllRequested);
    }
    if key_del && !modifiers.any() {
        intents.push(AppIntent::DeleteSelectedRequested);
    }
    if key_escape {
        intents.push(AppIntent::GestureAborted);
    }

    // Zoom & Sicht
    let (key_plus, key_minus, key_zero, key_one_shift) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
            i.modifiers.shift && i.key_pressed(egui::Key::Num1),
        )
    });
    if modifiers.command && key_plus {
        intents.push(AppIntent::ZoomInRequested);
    }
    if modifiers.command && key_minus {
        intents.push(AppIntent::ZoomOutRequested);
    }
    if modifiers.command && key_zero {
        intents.push(AppIntent::ResetViewRequested);
    }
    if key_one_shift && !modifiers.command {
        intents.push(AppIntent::ZoomToFitRequested);
    }

    // Werkzeugwahl ohne Modifier
    if !modifiers.any() {
        let tool = ui.input(|i| {
            if i.key_pressed(egui::Key::V) || i.key_pressed(egui::Key::Num1) {
                Some(EditorTool::Select)
            } else if i.key_pressed(egui::Key::H) {
                Some(EditorTool::Hand)
            } else if i.key_pressed(egui::Key::R) || i.key_pressed(egui::Key::Num2) {
                Some(EditorTool::Rectangle)
            } else if i.key_pressed(egui::Key::D) || i.key_pressed(egui::Key::Num3) {
                Some(EditorTool::Diamond)
            } else if i.key_pressed(egui::Key::O) || i.key_pressed(egui::Key::Num4) {
                Some(EditorTool::Ellipse)
            } else if i.key_pressed(egui::Key::A) || i.key_pressed(egui::Key::Num5) {
                Some(EditorTool::Arrow)
            } else if i.key_pressed(egui::Key::L) || i.key_pressed(egui::Key::Num6) {
                Some(EditorTool::Line)
            } else if i.key_pressed(egui::Key::P) || i.key_pressed(egui::Key::Num7) {
                Some(EditorTool::Freehand)
            } else if i.key_pressed(egui::Key::E) || i.key_pressed(egui::Key::Num0) {
                Some(EditorTool::Eraser)
            } else {
                None
            }
        });
        if let Some(tool) = tool {
            intents.push(AppIntent::ToolSelected { tool });
        }
        if ui.input(|i| i.key_pressed(egui::Key::G)) {
            intents.push(AppIntent::GridToggled);
        }
    }

    intents
}
