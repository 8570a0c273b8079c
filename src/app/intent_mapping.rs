//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Die meisten Intents mappen 1:1; Mausrad-Ereignisse werden hier anhand
/// des Modifier-Zustands und der Optionen in Pan oder Zoom aufgelöst.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen,
            button,
            modifiers,
            pressure,
        } => vec![AppCommand::PointerDown {
            screen,
            button,
            modifiers,
            pressure,
        }],
        AppIntent::PointerDoubleClicked { screen } => vec![AppCommand::PointerDouble { screen }],
        AppIntent::PointerMoved { screen, pressure } => {
            vec![AppCommand::PointerDrag { screen, pressure }]
        }
        AppIntent::PointerReleased { screen } => vec![AppCommand::PointerUp { screen }],
        AppIntent::GestureAborted => vec![AppCommand::CancelGesture],
        AppIntent::WheelScrolled {
            screen,
            delta,
            zoom,
        } => {
            if zoom {
                // Eine Mausrad-Raste liefert grob 50 px vertikales Delta;
                // daraus wird ein multiplikativer Zoomfaktor
                let notches = delta.y / 50.0;
                let factor = state.options.scroll_zoom_step.powf(notches);
                vec![AppCommand::ZoomView { screen, factor }]
            } else {
                vec![AppCommand::PanView {
                    delta_screen: delta,
                }]
            }
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ToolSelected { tool } => vec![AppCommand::SetTool { tool }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomStep { zoom_in: true }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomStep { zoom_in: false }],
        AppIntent::ZoomToFitRequested => vec![AppCommand::ZoomToFit],
        AppIntent::StyleUpdateRequested { update } => {
            if update.is_empty() {
                vec![]
            } else {
                vec![AppCommand::ApplyStyleUpdate { update }]
            }
        }
        AppIntent::AddElementRequested { element } => vec![AppCommand::AddElement { element }],
        AppIntent::SoftDeleteRequested { ids } => {
            if ids.is_empty() {
                vec![]
            } else {
                vec![AppCommand::SoftDeleteElements { ids }]
            }
        }
        AppIntent::TextEditCommitted {
            target,
            content,
            world,
        } => vec![AppCommand::CommitTextEdit {
            target,
            content,
            world,
        }],
        AppIntent::TextEditCancelled => vec![AppCommand::CancelTextEdit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::StyleUpdate;
    use glam::Vec2;

    #[test]
    fn wheel_maps_to_pan_or_zoom_by_modifier() {
        let state = AppState::new();
        let pan = map_intent_to_commands(
            &state,
            AppIntent::WheelScrolled {
                screen: Vec2::new(100.0, 100.0),
                delta: Vec2::new(0.0, -50.0),
                zoom: false,
            },
        );
        assert!(matches!(pan[0], AppCommand::PanView { .. }));

        let zoom = map_intent_to_commands(
            &state,
            AppIntent::WheelScrolled {
                screen: Vec2::new(100.0, 100.0),
                delta: Vec2::new(0.0, 50.0),
                zoom: true,
            },
        );
        match &zoom[0] {
            AppCommand::ZoomView { factor, .. } => {
                assert!((*factor - state.options.scroll_zoom_step).abs() < 1e-4);
            }
            other => panic!("erwartet ZoomView, war {other:?}"),
        }
    }

    #[test]
    fn empty_style_update_maps_to_nothing() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::StyleUpdateRequested {
                update: StyleUpdate::default(),
            },
        );
        assert!(commands.is_empty());
    }
}
