//! Eigenschaften-Panel: Stil der Selektion bzw. neuer Elemente.
//!
//! Das Panel editiert eine lokale Kopie des Stils und schickt nur die
//! tatsächlich geänderten Felder als `StyleUpdate` zurück.

use crate::app::{AppIntent, AppState, StyleUpdate};
use crate::core::StrokeStyle;

/// Rendert das Stil-Panel und sammelt die ausgelösten Intents.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::SidePanel::right("properties")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Stil");
            if state.selection.is_empty() {
                ui.label("Gilt für neue Elemente");
            } else {
                ui.label(format!("{} Element(e) selektiert", state.selection.len()));
            }
            ui.separator();

            let style = &state.editor.current_style;
            let mut update = StyleUpdate::default();

            // Kontur
            let mut stroke_color = style.stroke_color;
            ui.horizontal(|ui| {
                ui.label("Kontur");
                if ui
                    .color_edit_button_rgba_unmultiplied(&mut stroke_color)
                    .changed()
                {
                    update.stroke_color = Some(stroke_color);
                }
            });

            // Füllung
            let mut filled = style.fill_color.is_some();
            let mut fill_color = style.fill_color.unwrap_or([0.9, 0.9, 0.9, 1.0]);
            ui.horizontal(|ui| {
                if ui.checkbox(&mut filled, "Füllung").changed() {
                    update.fill_color = Some(filled.then_some(fill_color));
                }
                if filled
                    && ui
                        .color_edit_button_rgba_unmultiplied(&mut fill_color)
                        .changed()
                {
                    update.fill_color = Some(Some(fill_color));
                }
            });

            // Konturbreite
            let mut stroke_width = style.stroke_width;
            if ui
                .add(egui::Slider::new(&mut stroke_width, 0.5..=8.0).text("Breite"))
                .changed()
            {
                update.stroke_width = Some(stroke_width);
            }

            // Strichart
            let mut stroke_style = style.stroke_style;
            egui::ComboBox::from_label("Strichart")
                .selected_text(match stroke_style {
                    StrokeStyle::Solid => "Durchgezogen",
                    StrokeStyle::Dashed => "Gestrichelt",
                    StrokeStyle::Dotted => "Gepunktet",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut stroke_style, StrokeStyle::Solid, "Durchgezogen");
                    ui.selectable_value(&mut stroke_style, StrokeStyle::Dashed, "Gestrichelt");
                    ui.selectable_value(&mut stroke_style, StrokeStyle::Dotted, "Gepunktet");
                });
            if stroke_style != style.stroke_style {
                update.stroke_style = Some(stroke_style);
            }

            // Rauheit & Deckkraft
            let mut roughness = style.roughness;
            if ui
                .add(egui::Slider::new(&mut roughness, 0.0..=3.0).text("Rauheit"))
                .changed()
            {
                update.roughness = Some(roughness);
            }
            let mut opacity = style.opacity;
            if ui
                .add(egui::Slider::new(&mut opacity, 0.0..=100.0).text("Deckkraft"))
                .changed()
            {
                update.opacity = Some(opacity);
            }

            if !update.is_empty() {
                intents.push(AppIntent::StyleUpdateRequested { update });
            }
        });

    intents
}
