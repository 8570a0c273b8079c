//! Pointer-Gesten-Zustandsmaschine.
//!
//! Es läuft höchstens eine Geste gleichzeitig; jede Variante trägt den
//! beim Down eingefrorenen Startzustand. Move-Ereignisse rechnen immer
//! aus diesem Startzustand neu, nie inkrementell — dadurch ist jede
//! Zwischenposition exakt und driftfrei, egal wie viele Move-Ereignisse
//! eintreffen.

use glam::Vec2;

use crate::app::events::{PointerButton, PointerModifiers};
use crate::app::state::{AppState, EditorTool};
use crate::core::{
    apply_resize, handle_at_screen_point, Bounds, Element, ElementId, ElementKind, ResizeHandle,
    MIN_ELEMENT_SIZE,
};

/// Zustand der laufenden Pointer-Geste.
#[derive(Clone, Default)]
pub enum Interaction {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Box- oder Linienelement wird aufgezogen
    Drawing { start_world: Vec2 },
    /// Freihandstrich wird aufgezeichnet; Punkte stehen im Pending-Element
    Freedrawing,
    /// Gummiband-Selektion
    RubberBand {
        start_world: Vec2,
        current_world: Vec2,
    },
    /// Selektion wird verschoben; `origins` friert die Startpositionen ein
    Moving {
        start_world: Vec2,
        origins: Vec<(ElementId, Vec2)>,
    },
    /// Ein Anfasser wird gezogen; Originalgeometrie eingefroren
    Resizing {
        handle: ResizeHandle,
        start_world: Vec2,
        original_bounds: Bounds,
        original_element: Box<Element>,
    },
    /// Sicht wird verschoben
    Panning {
        start_screen: Vec2,
        original_scroll: Vec2,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}

/// Beginnt eine Geste. Läuft bereits eine (z. B. zweite Taste während
/// eines Drags), wird das Ereignis ignoriert.
pub fn pointer_down(
    state: &mut AppState,
    screen: Vec2,
    button: PointerButton,
    modifiers: PointerModifiers,
    pressure: f32,
) {
    if !state.editor.interaction.is_idle() {
        return;
    }
    // Jeder neue Down beendet einen laufenden Text-Edit
    state.editor.text_editing = None;

    let world = state.view.viewport.screen_to_world(screen);

    // Pan hat Vorrang: Hand-Werkzeug, mittlere Taste oder Space+Primär
    let pan = state.editor.active_tool == EditorTool::Hand
        || button == PointerButton::Middle
        || (modifiers.space && button == PointerButton::Primary);
    if pan {
        state.editor.interaction = Interaction::Panning {
            start_screen: screen,
            original_scroll: state.view.viewport.scroll,
        };
        return;
    }
    if button != PointerButton::Primary {
        return;
    }

    match state.editor.active_tool {
        EditorTool::Hand => {}
        EditorTool::Select => pointer_down_select(state, screen, world, modifiers),
        EditorTool::Eraser => erase_at(state, world),
        EditorTool::Freehand => begin_freedraw(state, world, pressure),
        tool => begin_draw(state, tool, world),
    }
}

fn pointer_down_select(
    state: &mut AppState,
    screen: Vec2,
    world: Vec2,
    modifiers: PointerModifiers,
) {
    // Anfasser werden nur bei genau einem selektierten Element angeboten
    // und vor dem Element-Hit-Test geprüft
    if let Some(id) = state.selection.single() {
        if let Some(element) = state.scene.get(id).filter(|e| !e.deleted) {
            let bounds = element.bounds();
            if let Some(handle) = handle_at_screen_point(
                &bounds,
                state.options.selection_padding_world,
                &state.view.viewport,
                screen,
                state.options.handle_hit_radius_px,
            ) {
                state.editor.interaction = Interaction::Resizing {
                    handle,
                    start_world: world,
                    original_bounds: bounds,
                    original_element: Box::new(element.clone()),
                };
                return;
            }
        }
    }

    let tolerance = state.hit_tolerance_world();
    if let Some(hit) = state.scene.element_at_point(world, tolerance).map(|e| e.id) {
        if modifiers.shift {
            // Shift: Element in der Selektion togglen
            let ids = state.selection.ids_mut();
            if !ids.shift_remove(&hit) {
                ids.insert(hit);
            }
        } else if !state.selection.contains(hit) {
            // Klick auf unselektiertes Element ersetzt die Selektion;
            // Klick auf bereits selektiertes lässt sie unverändert
            let ids = state.selection.ids_mut();
            ids.clear();
            ids.insert(hit);
        }

        let origins: Vec<(ElementId, Vec2)> = state
            .selection
            .iter()
            .filter_map(|id| {
                state
                    .scene
                    .get(id)
                    .filter(|e| !e.deleted)
                    .map(|e| (id, e.position))
            })
            .collect();
        if origins.is_empty() {
            // Shift-Klick hat das letzte Element abgewählt
            return;
        }
        state.editor.interaction = Interaction::Moving {
            start_world: world,
            origins,
        };
    } else {
        // Leerer Raum: Selektion sofort leeren und Gummiband starten
        state.selection.ids_mut().clear();
        state.editor.interaction = Interaction::RubberBand {
            start_world: world,
            current_world: world,
        };
    }
}

fn erase_at(state: &mut AppState, world: Vec2) {
    let tolerance = state.hit_tolerance_world();
    let Some(id) = state.scene.element_at_point(world, tolerance).map(|e| e.id) else {
        return;
    };
    if state.scene_mut().soft_delete(id) {
        state.selection.ids_mut().shift_remove(&id);
        state.commit_history();
        log::debug!("Element {id} radiert");
    }
}

fn begin_draw(state: &mut AppState, tool: EditorTool, world: Vec2) {
    let kind = match tool {
        EditorTool::Rectangle => ElementKind::Rectangle { size: Vec2::ZERO },
        EditorTool::Ellipse => ElementKind::Ellipse { size: Vec2::ZERO },
        EditorTool::Diamond => ElementKind::Diamond { size: Vec2::ZERO },
        // Einzelner Punkt bis zum ersten Move; ein reiner Klick bleibt
        // damit unter der Mindestpunktzahl und wird verworfen
        EditorTool::Line => ElementKind::Line {
            points: vec![Vec2::ZERO],
        },
        EditorTool::Arrow => ElementKind::Arrow {
            points: vec![Vec2::ZERO],
        },
        _ => return,
    };
    let id = state.ids.allocate();
    state.editor.pending = Some(Element::new(
        id,
        world,
        state.editor.current_style.clone(),
        kind,
    ));
    state.editor.interaction = Interaction::Drawing { start_world: world };
}

fn begin_freedraw(state: &mut AppState, world: Vec2, pressure: f32) {
    let id = state.ids.allocate();
    state.editor.pending = Some(Element::new(
        id,
        world,
        state.editor.current_style.clone(),
        ElementKind::Freehand {
            points: vec![Vec2::ZERO],
            pressures: vec![pressure],
        },
    ));
    state.editor.interaction = Interaction::Freedrawing;
}

/// Verarbeitet eine Pointer-Bewegung während einer laufenden Geste.
/// Ohne aktive Geste ein No-op.
pub fn pointer_move(state: &mut AppState, screen: Vec2, pressure: f32) {
    let interaction = state.editor.interaction.clone();
    match interaction {
        Interaction::Idle => {}
        Interaction::Panning {
            start_screen,
            original_scroll,
        } => {
            // Aus dem eingefrorenen Scroll neu rechnen, nicht inkrementell
            let zoom = state.view.viewport.zoom;
            state.view.viewport.scroll = original_scroll - (screen - start_screen) / zoom;
        }
        Interaction::Drawing { start_world } => {
            let world = state.view.viewport.screen_to_world(screen);
            if let Some(pending) = state.editor.pending.as_mut() {
                match &mut pending.kind {
                    ElementKind::Rectangle { size }
                    | ElementKind::Ellipse { size }
                    | ElementKind::Diamond { size } => {
                        // Normalisiert: Anker ist immer die Min-Ecke
                        let b = Bounds::from_corners(start_world, world);
                        pending.position = b.min;
                        *size = b.size();
                    }
                    ElementKind::Line { points } | ElementKind::Arrow { points } => {
                        pending.position = start_world;
                        *points = vec![Vec2::ZERO, world - start_world];
                    }
                    _ => {}
                }
            }
        }
        Interaction::Freedrawing => {
            let world = state.view.viewport.screen_to_world(screen);
            if let Some(pending) = state.editor.pending.as_mut() {
                let anchor = pending.position;
                if let ElementKind::Freehand { points, pressures } = &mut pending.kind {
                    points.push(world - anchor);
                    pressures.push(pressure);
                }
            }
        }
        Interaction::RubberBand { start_world, .. } => {
            let world = state.view.viewport.screen_to_world(screen);
            state.editor.interaction = Interaction::RubberBand {
                start_world,
                current_world: world,
            };
            // Selektion wird bei jedem Move aus dem Rechteck neu berechnet
            let rect = Bounds::from_corners(start_world, world);
            let hits = state.scene.elements_in_rect(&rect);
            let ids = state.selection.ids_mut();
            ids.clear();
            ids.extend(hits);
        }
        Interaction::Moving {
            start_world,
            origins,
        } => {
            let world = state.view.viewport.screen_to_world(screen);
            let delta = world - start_world;
            let scene = state.scene_mut();
            for (id, origin) in &origins {
                if let Some(element) = scene.get_mut(*id) {
                    element.position = *origin + delta;
                }
            }
        }
        Interaction::Resizing {
            handle,
            start_world,
            original_bounds,
            original_element,
        } => {
            let world = state.view.viewport.screen_to_world(screen);
            let delta = world - start_world;
            let new_bounds = apply_resize(&original_bounds, handle, delta);
            let scene = state.scene_mut();
            if let Some(element) = scene.get_mut(original_element.id) {
                // Geometrie komplett aus dem eingefrorenen Original ableiten,
                // damit Pfadpunkte keinen Skalierungsfehler akkumulieren
                *element = (*original_element).clone();
                element.apply_bounds(&original_bounds, &new_bounds);
            }
        }
    }
}

/// Beendet die laufende Geste und committet ihr Ergebnis.
pub fn pointer_up(state: &mut AppState, screen: Vec2) {
    let interaction = std::mem::take(&mut state.editor.interaction);
    match interaction {
        Interaction::Idle => {}
        // Sichtänderungen sind nie Teil der History
        Interaction::Panning { .. } => {}
        // Selektion steht bereits so, wie der letzte Move sie berechnet hat
        Interaction::RubberBand { .. } => {}
        Interaction::Drawing { .. } | Interaction::Freedrawing => commit_pending(state),
        Interaction::Moving {
            start_world,
            origins,
        } => {
            let world = state.view.viewport.screen_to_world(screen);
            let delta = world - start_world;
            if !origins.is_empty() && delta.length_squared() > 0.0 {
                state.commit_history();
                log::debug!("{} Element(e) verschoben", origins.len());
            }
        }
        Interaction::Resizing {
            original_bounds,
            original_element,
            ..
        } => {
            let changed = state
                .scene
                .get(original_element.id)
                .is_some_and(|e| e.bounds() != original_bounds);
            if changed {
                state.commit_history();
                log::debug!("Element {} resized", original_element.id);
            }
        }
    }
}

fn commit_pending(state: &mut AppState) {
    let Some(pending) = state.editor.pending.take() else {
        return;
    };
    let valid = match &pending.kind {
        ElementKind::Rectangle { size }
        | ElementKind::Ellipse { size }
        | ElementKind::Diamond { size }
        | ElementKind::Text { size, .. } => {
            size.x.abs() > MIN_ELEMENT_SIZE || size.y.abs() > MIN_ELEMENT_SIZE
        }
        ElementKind::Line { points } | ElementKind::Arrow { points } => points.len() >= 2,
        ElementKind::Freehand { points, .. } => points.len() >= 2,
    };
    if !valid {
        log::debug!("Degeneriertes Element {} verworfen", pending.id);
        return;
    }

    let id = pending.id;
    state.scene_mut().add(pending);
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.insert(id);
    state.commit_history();
    log::debug!("Element {id} committet");
}

/// Doppelklick: öffnet den Text-Edit-Modus auf einem Text-Element.
pub fn double_click(state: &mut AppState, screen: Vec2) {
    if state.editor.active_tool != EditorTool::Select {
        return;
    }
    let world = state.view.viewport.screen_to_world(screen);
    let tolerance = state.hit_tolerance_world();
    let hit = state
        .scene
        .element_at_point(world, tolerance)
        .filter(|e| matches!(e.kind, ElementKind::Text { .. }))
        .map(|e| e.id);
    if let Some(id) = hit {
        state.editor.interaction = Interaction::Idle;
        let ids = state.selection.ids_mut();
        ids.clear();
        ids.insert(id);
        state.editor.text_editing = Some(id);
    }
}

/// Totalabbruch (Escape oder Fokusverlust): verwirft das Pending-Element,
/// stellt von laufendem Move/Resize betroffene Geometrie wieder her,
/// leert die Selektion und kehrt nach Idle zurück. Kein History-Push.
pub fn cancel(state: &mut AppState) {
    let interaction = std::mem::take(&mut state.editor.interaction);
    match interaction {
        Interaction::Moving { origins, .. } => {
            let scene = state.scene_mut();
            for (id, origin) in &origins {
                if let Some(element) = scene.get_mut(*id) {
                    element.position = *origin;
                }
            }
        }
        Interaction::Resizing {
            original_element, ..
        } => {
            let scene = state.scene_mut();
            if let Some(element) = scene.get_mut(original_element.id) {
                *element = *original_element;
            }
        }
        _ => {}
    }
    state.editor.pending = None;
    state.editor.text_editing = None;
    state.selection.ids_mut().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::ElementStyle;
    use approx::assert_relative_eq;

    fn press(state: &mut AppState, x: f32, y: f32) {
        pointer_down(
            state,
            Vec2::new(x, y),
            PointerButton::Primary,
            PointerModifiers::default(),
            0.5,
        );
    }

    fn drag(state: &mut AppState, x: f32, y: f32) {
        pointer_move(state, Vec2::new(x, y), 0.5);
    }

    fn release(state: &mut AppState, x: f32, y: f32) {
        pointer_up(state, Vec2::new(x, y));
    }

    fn add_rect(state: &mut AppState, pos: Vec2, size: Vec2) -> ElementId {
        let id = state.ids.allocate();
        state.scene_mut().add(Element::new(
            id,
            pos,
            ElementStyle::default(),
            ElementKind::Rectangle { size },
        ));
        state.commit_history();
        id
    }

    #[test]
    fn drawing_up_left_normalizes_bounds() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Rectangle;

        press(&mut state, 50.0, 50.0);
        drag(&mut state, 10.0, 10.0);
        release(&mut state, 10.0, 10.0);

        let element = state.scene.live_elements().next().unwrap();
        assert_eq!(element.position, Vec2::new(10.0, 10.0));
        assert_eq!(element.box_size().unwrap(), Vec2::new(40.0, 40.0));
        assert!(state.selection.contains(element.id), "neues Element ist selektiert");
    }

    #[test]
    fn tiny_drag_is_discarded_without_history_push() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Rectangle;

        press(&mut state, 100.0, 100.0);
        drag(&mut state, 101.0, 101.0);
        release(&mut state, 101.0, 101.0);

        assert_eq!(state.scene.live_count(), 0);
        assert!(!state.history.can_undo());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn line_click_without_move_is_discarded() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Line;

        press(&mut state, 30.0, 30.0);
        release(&mut state, 30.0, 30.0);

        assert_eq!(state.scene.live_count(), 0);
    }

    #[test]
    fn freehand_records_anchored_points_with_pressure() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Freehand;

        press(&mut state, 10.0, 10.0);
        drag(&mut state, 15.0, 12.0);
        drag(&mut state, 20.0, 14.0);
        release(&mut state, 20.0, 14.0);

        let element = state.scene.live_elements().next().unwrap();
        assert_eq!(element.position, Vec2::new(10.0, 10.0));
        match &element.kind {
            ElementKind::Freehand { points, pressures } => {
                assert_eq!(points.len(), 3);
                assert_eq!(pressures.len(), 3);
                assert_eq!(points[0], Vec2::ZERO);
                assert_eq!(points[2], Vec2::new(10.0, 4.0));
            }
            other => panic!("erwartet Freehand, war {other:?}"),
        }
    }

    #[test]
    fn move_is_idempotent_under_repeated_moves() {
        let mut state = AppState::new();
        let id = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));

        press(&mut state, 10.0, 10.0);
        // Mehrere Moves auf dieselbe Position dürfen nichts aufaddieren
        drag(&mut state, 40.0, 10.0);
        drag(&mut state, 40.0, 10.0);
        drag(&mut state, 40.0, 10.0);
        release(&mut state, 40.0, 10.0);

        let element = state.scene.get(id).unwrap();
        assert_relative_eq!(element.position.x, 30.0);
        assert_relative_eq!(element.position.y, 0.0);
    }

    #[test]
    fn click_on_selected_element_preserves_multi_selection() {
        let mut state = AppState::new();
        let a = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = add_rect(&mut state, Vec2::new(100.0, 0.0), Vec2::new(20.0, 20.0));
        state.selection.ids_mut().extend([a, b]);

        // Klick auf a (bereits selektiert): Selektion bleibt, beide bewegen sich
        press(&mut state, 10.0, 10.0);
        drag(&mut state, 10.0, 60.0);
        release(&mut state, 10.0, 60.0);

        assert_eq!(state.selection.len(), 2);
        assert_relative_eq!(state.scene.get(a).unwrap().position.y, 50.0);
        assert_relative_eq!(state.scene.get(b).unwrap().position.y, 50.0);
    }

    #[test]
    fn click_on_unselected_element_replaces_selection() {
        let mut state = AppState::new();
        let a = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = add_rect(&mut state, Vec2::new(100.0, 0.0), Vec2::new(20.0, 20.0));
        state.selection.ids_mut().insert(a);

        press(&mut state, 110.0, 10.0);
        release(&mut state, 110.0, 10.0);

        assert!(state.selection.contains(b));
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn shift_click_toggles_membership() {
        let mut state = AppState::new();
        let a = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let shift = PointerModifiers {
            shift: true,
            ..Default::default()
        };

        pointer_down(&mut state, Vec2::new(10.0, 10.0), PointerButton::Primary, shift, 0.5);
        release(&mut state, 10.0, 10.0);
        assert!(state.selection.contains(a));

        pointer_down(&mut state, Vec2::new(10.0, 10.0), PointerButton::Primary, shift, 0.5);
        release(&mut state, 10.0, 10.0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn rubber_band_selects_only_fully_contained() {
        let mut state = AppState::new();
        let a = add_rect(&mut state, Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        let _b = add_rect(&mut state, Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0));

        press(&mut state, 0.0, 0.0);
        drag(&mut state, 120.0, 120.0);

        // a liegt ganz im Band, b nur teilweise
        assert!(state.selection.contains(a));
        assert_eq!(state.selection.len(), 1);

        release(&mut state, 120.0, 120.0);
        assert_eq!(state.selection.len(), 1);
        assert!(!state.history.can_redo());
    }

    #[test]
    fn resize_from_handle_recomputes_from_original() {
        let mut state = AppState::new();
        let id = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        state.selection.ids_mut().insert(id);

        // se-Anfasser liegt (mit Padding 8) bei Welt (108,108), Zoom 1
        press(&mut state, 108.0, 108.0);
        assert!(matches!(
            state.editor.interaction,
            Interaction::Resizing { .. }
        ));

        drag(&mut state, 118.0, 118.0);
        drag(&mut state, 118.0, 118.0);
        release(&mut state, 118.0, 118.0);

        let b = state.scene.get(id).unwrap().bounds();
        assert_eq!(b.min, Vec2::ZERO);
        assert_relative_eq!(b.size().x, 110.0);
        assert_relative_eq!(b.size().y, 110.0);
    }

    #[test]
    fn resize_requires_single_selection() {
        let mut state = AppState::new();
        let a = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let b = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        state.selection.ids_mut().extend([a, b]);

        press(&mut state, 108.0, 108.0);
        assert!(
            !matches!(state.editor.interaction, Interaction::Resizing { .. }),
            "bei Mehrfachselektion gibt es keine Anfasser"
        );
        release(&mut state, 108.0, 108.0);
    }

    #[test]
    fn middle_button_pans_regardless_of_tool() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Rectangle;

        pointer_down(
            &mut state,
            Vec2::new(100.0, 100.0),
            PointerButton::Middle,
            PointerModifiers::default(),
            0.5,
        );
        drag(&mut state, 150.0, 100.0);
        release(&mut state, 150.0, 100.0);

        assert_relative_eq!(state.view.viewport.scroll.x, -50.0);
        assert_eq!(state.scene.live_count(), 0, "kein Element gezeichnet");
        assert!(!state.history.can_undo(), "Pan landet nie in der History");
    }

    #[test]
    fn eraser_soft_deletes_topmost_hit() {
        let mut state = AppState::new();
        let id = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        state.editor.active_tool = EditorTool::Eraser;

        press(&mut state, 10.0, 10.0);
        release(&mut state, 10.0, 10.0);

        assert!(!state.scene.is_live(id));
        assert_eq!(state.scene.elements().len(), 1, "Soft-Delete, kein Entfernen");
        assert!(state.history.can_undo());
    }

    #[test]
    fn cancel_reverts_running_move_and_clears_selection() {
        let mut state = AppState::new();
        let id = add_rect(&mut state, Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));

        press(&mut state, 10.0, 10.0);
        drag(&mut state, 80.0, 10.0);
        cancel(&mut state);

        let element = state.scene.get(id).unwrap();
        assert_relative_eq!(element.position.x, 0.0);
        assert!(state.selection.is_empty());
        assert!(state.editor.interaction.is_idle());
    }

    #[test]
    fn cancel_discards_pending_element() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Ellipse;

        press(&mut state, 0.0, 0.0);
        drag(&mut state, 50.0, 50.0);
        cancel(&mut state);

        assert!(state.editor.pending.is_none());
        assert_eq!(state.scene.live_count(), 0);
    }

    #[test]
    fn second_button_during_gesture_is_ignored() {
        let mut state = AppState::new();
        state.editor.active_tool = EditorTool::Rectangle;

        press(&mut state, 0.0, 0.0);
        pointer_down(
            &mut state,
            Vec2::new(5.0, 5.0),
            PointerButton::Middle,
            PointerModifiers::default(),
            0.5,
        );
        assert!(
            matches!(state.editor.interaction, Interaction::Drawing { .. }),
            "laufende Geste bleibt bestehen"
        );
        drag(&mut state, 50.0, 50.0);
        release(&mut state, 50.0, 50.0);
        assert_eq!(state.scene.live_count(), 1);
    }

    #[test]
    fn double_click_enters_text_editing_on_text_elements() {
        let mut state = AppState::new();
        let id = state.ids.allocate();
        state.scene_mut().add(Element::new(
            id,
            Vec2::ZERO,
            ElementStyle::default(),
            ElementKind::Text {
                content: "hallo".into(),
                font_size: 20.0,
                font_family: Default::default(),
                align: Default::default(),
                size: Vec2::new(60.0, 25.0),
            },
        ));
        state.commit_history();

        double_click(&mut state, Vec2::new(10.0, 10.0));
        assert_eq!(state.editor.text_editing, Some(id));
        assert!(state.selection.contains(id));

        // Nächster Down beendet den Text-Edit
        press(&mut state, 500.0, 500.0);
        assert_eq!(state.editor.text_editing, None);
        release(&mut state, 500.0, 500.0);
    }
}
