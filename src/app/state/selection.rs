use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::{ElementId, Scene};

/// Auswahlbezogener Anwendungszustand.
///
/// Immer eine Teilmenge der nicht-gelöschten Element-IDs; die
/// Einfüge-Reihenfolge ist semantisch irrelevant, bleibt aber für
/// deterministisches Overlay-Rendering erhalten.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Menge der selektierten Element-IDs (Arc für O(1)-Clone in FrameScene)
    pub selected_ids: Arc<IndexSet<ElementId>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf das IndexSet zurück (CoW: klont nur
    /// wenn nötig). Alle Mutationen der Selektion gehen über diese Methode,
    /// damit der Arc-Klon in `FrameScene` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<ElementId> {
        Arc::make_mut(&mut self.selected_ids)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.selected_ids.iter().copied()
    }

    /// Die eine selektierte ID, falls genau ein Element selektiert ist.
    pub fn single(&self) -> Option<ElementId> {
        if self.selected_ids.len() == 1 {
            self.selected_ids.iter().next().copied()
        } else {
            None
        }
    }

    /// Entfernt IDs, die in der Szene nicht (mehr) live sind.
    /// Wird nach Undo/Redo aufgerufen, um die Teilmengen-Invariante zu halten.
    pub fn prune_to_live(&mut self, scene: &Scene) {
        if self.selected_ids.iter().any(|id| !scene.is_live(*id)) {
            self.ids_mut().retain(|id| scene.is_live(*id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::{Element, ElementKind, ElementStyle};
    use glam::Vec2;

    #[test]
    fn prune_removes_deleted_and_unknown_ids() {
        let mut scene = Scene::new();
        scene.add(Element::new(
            1,
            Vec2::ZERO,
            ElementStyle::default(),
            ElementKind::Rectangle {
                size: Vec2::new(10.0, 10.0),
            },
        ));
        scene.add(Element::new(
            2,
            Vec2::ZERO,
            ElementStyle::default(),
            ElementKind::Rectangle {
                size: Vec2::new(10.0, 10.0),
            },
        ));
        scene.soft_delete(2);

        let mut selection = SelectionState::new();
        selection.ids_mut().extend([1, 2, 99]);

        selection.prune_to_live(&scene);

        assert!(selection.contains(1));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn single_requires_exactly_one_id() {
        let mut selection = SelectionState::new();
        assert_eq!(selection.single(), None);
        selection.ids_mut().insert(7);
        assert_eq!(selection.single(), Some(7));
        selection.ids_mut().insert(8);
        assert_eq!(selection.single(), None);
    }
}
