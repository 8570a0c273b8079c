//! Szenen-Container: Elemente in Z-Reihenfolge mit Hit-Test-Abfragen.

use glam::Vec2;

use super::element::{Bounds, Element, ElementId};

/// Geordnete Elementfolge; spätere Elemente liegen oben und werden
/// zuerst getroffen. Soft-gelöschte Elemente bleiben (für Undo) in der
/// Folge, sind aber von allen Abfragen ausgeschlossen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Elemente in Z-Reihenfolge, inklusive soft-gelöschter.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Nicht-gelöschte Elemente in Z-Reihenfolge.
    pub fn live_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.deleted)
    }

    /// Anzahl nicht-gelöschter Elemente.
    pub fn live_count(&self) -> usize {
        self.live_elements().count()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// True wenn das Element existiert und nicht soft-gelöscht ist.
    pub fn is_live(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(|e| !e.deleted)
    }

    /// Hängt ein Element oben auf den Z-Stapel.
    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Markiert ein Element als gelöscht. Gibt zurück, ob sich etwas
    /// geändert hat.
    pub fn soft_delete(&mut self, id: ElementId) -> bool {
        match self.get_mut(id) {
            Some(e) if !e.deleted => {
                e.deleted = true;
                true
            }
            _ => false,
        }
    }

    /// Oberstes nicht-gelöschtes Element unter dem Weltpunkt.
    ///
    /// Iteriert in umgekehrter Z-Reihenfolge — das zuletzt gezeichnete
    /// Element gewinnt.
    pub fn element_at_point(&self, world: Vec2, tolerance: f32) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .filter(|e| !e.deleted)
            .find(|e| e.contains_point(world, tolerance))
    }

    /// IDs aller nicht-gelöschten Elemente, deren Bounds VOLLSTÄNDIG im
    /// Rechteck liegen. Teilüberlappung genügt bewusst nicht: die
    /// Gummiband-Selektion erfasst nur ganz eingeschlossene Elemente.
    pub fn elements_in_rect(&self, rect: &Bounds) -> Vec<ElementId> {
        self.live_elements()
            .filter(|e| rect.contains_bounds(&e.bounds()))
            .map(|e| e.id)
            .collect()
    }

    /// Vereinigte Bounds aller nicht-gelöschten Elemente;
    /// None bei leerer (oder vollständig gelöschter) Szene.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.live_elements()
            .map(|e| e.bounds())
            .reduce(|a, b| a.union(&b))
    }
}

/// Monoton zählender ID-Generator.
///
/// Lebt außerhalb der Szene (und damit außerhalb der History), damit IDs
/// auch über Undo/Redo hinweg nie wiederverwendet werden.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: ElementId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ElementId {
        let id = self.next;
        self.next += 1;
        id
    }
}
