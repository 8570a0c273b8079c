//! Handler für Werkzeugwahl, Löschen, Stil-Patches und die
//! programmatische Mutationsfläche.

use crate::app::events::StyleUpdate;
use crate::app::interaction;
use crate::app::state::{AppState, EditorTool};
use crate::core::{Element, ElementId, ElementKind};
use crate::shared::TextMeasurer;

/// Wechselt das aktive Werkzeug. Eine laufende Geste wird vollständig
/// abgebrochen (inklusive Wiederherstellung verschobener Geometrie);
/// der Wechsel auf ein erzeugendes Werkzeug leert die Selektion.
pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    if !state.editor.interaction.is_idle() {
        interaction::cancel(state);
    }
    if tool.creates_elements() {
        state.selection.ids_mut().clear();
    }
    state.editor.active_tool = tool;
}

/// Soft-löscht die Selektion. Nur im Idle-Zustand; während einer Geste
/// ist Löschen ein No-op.
pub fn delete_selected(state: &mut AppState) {
    if !state.editor.interaction.is_idle() {
        return;
    }
    let ids: Vec<ElementId> = state.selection.iter().collect();
    soft_delete_by_ids(state, &ids);
}

/// Soft-löscht die angegebenen Elemente (Mutationsfläche und
/// Delete-Shortcut). Genau ein History-Push, wenn sich etwas ändert.
pub fn soft_delete_by_ids(state: &mut AppState, ids: &[ElementId]) {
    let mut changed = false;
    {
        let scene = state.scene_mut();
        for id in ids {
            if scene.soft_delete(*id) {
                changed = true;
            }
        }
    }
    if changed {
        state
            .selection
            .ids_mut()
            .retain(|id| !ids.contains(id));
        state.commit_history();
        log::info!("{} Element(e) gelöscht", ids.len());
    }
}

/// Fügt ein fertiges Element ein (Mutationsfläche, z. B. Text aus dem
/// Edit-Overlay). Die ID wird neu vergeben, damit die Eindeutigkeit
/// nicht vom Aufrufer abhängt; Text-Größen werden hier vermessen.
pub fn add_element(state: &mut AppState, mut element: Element, measurer: &dyn TextMeasurer) {
    element.id = state.ids.allocate();
    element.deleted = false;
    if let ElementKind::Text {
        content,
        font_size,
        font_family,
        size,
        ..
    } = &mut element.kind
    {
        *size = measurer.measure(content, *font_size, *font_family);
    }

    let id = element.id;
    state.scene_mut().add(element);
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.insert(id);
    state.commit_history();
    log::info!("Element {id} eingefügt");
}

/// Schließt das Text-Edit-Overlay ab.
///
/// Mit `target` wird der Inhalt eines bestehenden Text-Elements ersetzt;
/// ohne `target` entsteht ein neues Text-Element an `world`. Leerer Inhalt
/// verwirft neue Elemente und soft-löscht bestehende — leere Textblöcke
/// bleiben nie in der Szene.
pub fn commit_text_edit(
    state: &mut AppState,
    target: Option<ElementId>,
    content: String,
    world: glam::Vec2,
    measurer: &dyn TextMeasurer,
) {
    state.editor.text_editing = None;

    if content.trim().is_empty() {
        if let Some(id) = target {
            soft_delete_by_ids(state, &[id]);
        }
        return;
    }

    match target {
        Some(id) => {
            let mut changed = false;
            {
                let scene = state.scene_mut();
                if let Some(element) = scene.get_mut(id) {
                    if let ElementKind::Text {
                        content: existing,
                        font_size,
                        font_family,
                        size,
                        ..
                    } = &mut element.kind
                    {
                        if *existing != content {
                            *size = measurer.measure(&content, *font_size, *font_family);
                            *existing = content;
                            changed = true;
                        }
                    }
                }
            }
            if changed {
                state.commit_history();
            }
        }
        None => {
            let style = state.editor.current_style.clone();
            let element = Element::new(
                0, // wird in add_element neu vergeben
                world,
                style,
                ElementKind::Text {
                    content,
                    font_size: 20.0,
                    font_family: Default::default(),
                    align: Default::default(),
                    size: glam::Vec2::ZERO,
                },
            );
            add_element(state, element, measurer);
        }
    }
}

/// Wendet einen Stil-Patch auf die Selektion und auf den Stil für neue
/// Elemente an. Font-Größen-Patches vermessen Text-Elemente neu.
pub fn apply_style_update(state: &mut AppState, update: &StyleUpdate, measurer: &dyn TextMeasurer) {
    update.apply_to(&mut state.editor.current_style);

    let ids: Vec<ElementId> = state.selection.iter().collect();
    if ids.is_empty() {
        return;
    }

    let mut changed = false;
    {
        let scene = state.scene_mut();
        for id in ids {
            let Some(element) = scene.get_mut(id) else {
                continue;
            };
            if element.deleted {
                continue;
            }
            if update.apply_to(&mut element.style) {
                changed = true;
            }
            if let Some(new_font_size) = update.font_size {
                if let ElementKind::Text {
                    content,
                    font_size,
                    font_family,
                    size,
                    ..
                } = &mut element.kind
                {
                    if (*font_size - new_font_size).abs() > f32::EPSILON {
                        *font_size = new_font_size;
                        *size = measurer.measure(content, new_font_size, *font_family);
                        changed = true;
                    }
                }
            }
        }
    }
    if changed {
        state.commit_history();
    }
}
