//! Viewport-Input-Handling: Pointer- und Scroll-Events → AppIntent.
//!
//! Die UI-Schicht bleibt bewusst dumm: sie übersetzt rohe egui-Events in
//! Intents und überlässt jede Gesten-Entscheidung der App-Schicht.

use glam::Vec2;

use crate::app::{AppIntent, PointerButton, PointerModifiers};

/// egui liefert keinen Stiftdruck; Freihandstriche bekommen ein
/// konstantes mittleres Drucksample.
const DEFAULT_PRESSURE: f32 = 0.5;

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Sammelt Pointer-, Scroll- und Fokus-Events der Zeichenfläche.
///
/// Alle Positionen werden in Zeichenflächen-Pixel (Ursprung links oben
/// im Canvas) umgerechnet.
pub fn collect_pointer_intents(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    let origin = response.rect.min;
    let to_canvas = |pos: egui::Pos2| Vec2::new(pos.x - origin.x, pos.y - origin.y);

    let (events, space_down, scroll, modifiers) = ui.input(|i| {
        (
            i.events.clone(),
            i.key_down(egui::Key::Space),
            i.smooth_scroll_delta,
            i.modifiers,
        )
    });

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
            } => {
                let Some(button) = map_button(button) else {
                    continue;
                };
                if pressed {
                    // Downs außerhalb der Zeichenfläche gehören den Panels
                    if !response.rect.contains(pos) {
                        continue;
                    }
                    intents.push(AppIntent::PointerPressed {
                        screen: to_canvas(pos),
                        button,
                        modifiers: PointerModifiers {
                            shift: modifiers.shift,
                            command: modifiers.command,
                            space: space_down,
                        },
                        pressure: DEFAULT_PRESSURE,
                    });
                } else {
                    // Ups immer durchreichen, auch außerhalb: eine laufende
                    // Geste muss abgeschlossen werden
                    intents.push(AppIntent::PointerReleased {
                        screen: to_canvas(pos),
                    });
                }
            }
            egui::Event::PointerMoved(pos) => {
                intents.push(AppIntent::PointerMoved {
                    screen: to_canvas(pos),
                    pressure: DEFAULT_PRESSURE,
                });
            }
            // Fensterfokus weg: Geste vollständig abbrechen
            egui::Event::WindowFocused(false) => {
                intents.push(AppIntent::GestureAborted);
            }
            _ => {}
        }
    }

    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            intents.push(AppIntent::PointerDoubleClicked {
                screen: to_canvas(pos),
            });
        }
    }

    if response.hovered() && scroll != egui::Vec2::ZERO {
        if let Some(pos) = response.hover_pos() {
            intents.push(AppIntent::WheelScrolled {
                screen: to_canvas(pos),
                delta: Vec2::new(scroll.x, scroll.y),
                zoom: modifiers.command,
            });
        }
    }

    intents
}
