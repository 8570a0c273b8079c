//! Element-Datenmodell: geschlossener Summentyp über alle Formvarianten
//! mit Geometrie-Operationen (Bounds, Punkt-Treffer, Segmentabstand).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eindeutige, lebenszeitstabile Element-ID.
///
/// IDs werden pro Session monoton vergeben und nie wiederverwendet,
/// auch nicht nach Undo.
pub type ElementId = u64;

/// Minimale Kantenlänge eines Elements in Welteinheiten.
/// Kleinere Resize-Ergebnisse werden auf diesen Wert geklemmt,
/// kleinere gezeichnete Elemente verworfen.
pub const MIN_ELEMENT_SIZE: f32 = 2.0;

/// Strichart für Element-Konturen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Schriftfamilie für Text-Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Handschrift-artige Schrift (Standard der Skizzen-Optik)
    #[default]
    Hand,
    Normal,
    Code,
}

/// Horizontale Ausrichtung für Text-Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Darstellungsattribute, die jedes Element trägt.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    /// Konturfarbe (RGBA, 0.0–1.0)
    pub stroke_color: [f32; 4],
    /// Füllfarbe; None = ungefüllt
    pub fill_color: Option<[f32; 4]>,
    /// Konturbreite in Welteinheiten
    pub stroke_width: f32,
    /// Strichart der Kontur
    pub stroke_style: StrokeStyle,
    /// Rauheitsfaktor für den skizzenhaften Renderer
    pub roughness: f32,
    /// Deckkraft in Prozent (0–100)
    pub opacity: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: [0.1, 0.1, 0.1, 1.0],
            fill_color: None,
            stroke_width: 1.0,
            stroke_style: StrokeStyle::Solid,
            roughness: 1.0,
            opacity: 100.0,
        }
    }
}

/// Variantenspezifische Geometrie.
///
/// Box-artige Varianten (Rectangle, Ellipse, Diamond, Text) sind durch
/// Position + Größe beschrieben; pfadartige Varianten (Line, Arrow,
/// Freehand) durch eine Punktfolge relativ zum Element-Anker.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Rectangle {
        size: Vec2,
    },
    Ellipse {
        size: Vec2,
    },
    Diamond {
        size: Vec2,
    },
    Line {
        points: Vec<Vec2>,
    },
    Arrow {
        points: Vec<Vec2>,
    },
    Freehand {
        points: Vec<Vec2>,
        /// Ein Drucksample pro Punkt (parallel zu `points`)
        pressures: Vec<f32>,
    },
    Text {
        content: String,
        font_size: f32,
        font_family: FontFamily,
        align: TextAlign,
        /// Abgeleitet aus der Textvermessung, nicht interaktiv gezeichnet
        size: Vec2,
    },
}

/// Achsenparallele Bounding-Box in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Baut eine normalisierte Box aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True wenn `other` vollständig in `self` liegt (inkl. Rand).
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Vereinigung zweier Boxen (min der Minima, max der Maxima).
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box um `padding` Welteinheiten in alle Richtungen erweitert.
    pub fn expanded(&self, padding: f32) -> Bounds {
        Bounds {
            min: self.min - Vec2::splat(padding),
            max: self.max + Vec2::splat(padding),
        }
    }
}

/// Ein Szenen-Element: gemeinsame Attribute + Variantengeometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    /// Welt-Anker: Top-Left für box-artige, Pfad-Ursprung für pfadartige Varianten
    pub position: Vec2,
    /// Rotationswinkel in Radiant
    pub angle: f32,
    pub style: ElementStyle,
    /// Einmalig bei Erstellung erzeugt; treibt das stabile, organische
    /// Rendering des Skizzen-Backends und ändert sich nie
    pub seed: u64,
    /// Soft-Delete: bleibt für Undo erhalten, wird aber von Hit-Tests,
    /// Bounds und Rendering ausgeschlossen
    pub deleted: bool,
    pub kind: ElementKind,
}

impl Element {
    /// Erstellt ein neues Element mit frischem Seed.
    pub fn new(id: ElementId, position: Vec2, style: ElementStyle, kind: ElementKind) -> Self {
        Self {
            id,
            position,
            angle: 0.0,
            style,
            seed: rand::random::<u64>(),
            deleted: false,
            kind,
        }
    }

    /// True für Varianten, deren Geometrie durch Position + Größe
    /// vollständig beschrieben ist.
    pub fn is_box_like(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Rectangle { .. }
                | ElementKind::Ellipse { .. }
                | ElementKind::Diamond { .. }
                | ElementKind::Text { .. }
        )
    }

    /// Größe box-artiger Varianten; None für pfadartige.
    pub fn box_size(&self) -> Option<Vec2> {
        match &self.kind {
            ElementKind::Rectangle { size }
            | ElementKind::Ellipse { size }
            | ElementKind::Diamond { size }
            | ElementKind::Text { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Lokale Pfadpunkte; None für box-artige Varianten.
    pub fn path_points(&self) -> Option<&[Vec2]> {
        match &self.kind {
            ElementKind::Line { points }
            | ElementKind::Arrow { points }
            | ElementKind::Freehand { points, .. } => Some(points),
            _ => None,
        }
    }

    /// Bounding-Box in Weltkoordinaten.
    ///
    /// Box-artig: Position + Größe. Pfadartig: min/max über `anker + punkt`;
    /// Breite/Höhe können bei degenerierten Pfaden null sein.
    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            ElementKind::Rectangle { size }
            | ElementKind::Ellipse { size }
            | ElementKind::Diamond { size }
            | ElementKind::Text { size, .. } => Bounds {
                min: self.position,
                max: self.position + *size,
            },
            ElementKind::Line { points }
            | ElementKind::Arrow { points }
            | ElementKind::Freehand { points, .. } => {
                let mut min = self.position;
                let mut max = self.position;
                for p in points {
                    let w = self.position + *p;
                    min = min.min(w);
                    max = max.max(w);
                }
                Bounds { min, max }
            }
        }
    }

    /// Punkt-Treffer-Test in Weltkoordinaten.
    ///
    /// Box-artig: einfacher Rechteck-Test. Line/Arrow: Abstand zu einem der
    /// Segmente unter `tolerance`. Freehand: gleicher Test mit halber
    /// Toleranz, da Striche visuell dünn sind.
    pub fn contains_point(&self, world: Vec2, tolerance: f32) -> bool {
        match &self.kind {
            ElementKind::Rectangle { .. }
            | ElementKind::Ellipse { .. }
            | ElementKind::Diamond { .. }
            | ElementKind::Text { .. } => self.bounds().contains(world),
            ElementKind::Line { points } | ElementKind::Arrow { points } => {
                self.point_near_path(world, points, tolerance)
            }
            ElementKind::Freehand { points, .. } => {
                self.point_near_path(world, points, tolerance * 0.5)
            }
        }
    }

    fn point_near_path(&self, world: Vec2, points: &[Vec2], tolerance: f32) -> bool {
        points.windows(2).any(|pair| {
            let a = self.position + pair[0];
            let b = self.position + pair[1];
            distance_to_segment(world, a, b) <= tolerance
        })
    }

    /// Verschiebt das Element um ein Welt-Delta.
    /// Pfadpunkte sind lokal und bleiben unberührt.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Schreibt neue Bounds auf das Element.
    ///
    /// Box-artig: Position und Größe werden direkt gesetzt. Pfadartig:
    /// lokale Punkte werden komponentenweise von `old` auf `new` skaliert
    /// (Achsen mit Ausdehnung null bleiben unskaliert).
    pub fn apply_bounds(&mut self, old: &Bounds, new: &Bounds) {
        let old_size = old.size();
        let scale = Vec2::new(
            if old_size.x > f32::EPSILON {
                new.size().x / old_size.x
            } else {
                1.0
            },
            if old_size.y > f32::EPSILON {
                new.size().y / old_size.y
            } else {
                1.0
            },
        );

        match &mut self.kind {
            ElementKind::Rectangle { size }
            | ElementKind::Ellipse { size }
            | ElementKind::Diamond { size }
            | ElementKind::Text { size, .. } => {
                self.position = new.min;
                *size = new.size();
            }
            ElementKind::Line { points }
            | ElementKind::Arrow { points }
            | ElementKind::Freehand { points, .. } => {
                self.position = new.min + (self.position - old.min) * scale;
                for p in points.iter_mut() {
                    *p *= scale;
                }
            }
        }
    }
}

/// Euklidischer Abstand von `p` zum Segment `a`–`b`.
///
/// Projektion auf das Segment, Skalar auf [0,1] geklemmt, dann Abstand
/// zum geklemmten Punkt.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect_at(pos: Vec2, size: Vec2) -> Element {
        Element::new(
            1,
            pos,
            ElementStyle::default(),
            ElementKind::Rectangle { size },
        )
    }

    #[test]
    fn distance_to_segment_projects_and_clamps() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Mitten über dem Segment
        assert_relative_eq!(distance_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        // Jenseits des Endpunkts: Abstand zum Endpunkt
        assert_relative_eq!(distance_to_segment(Vec2::new(14.0, 3.0), a, b), 5.0);
        // Degeneriertes Segment
        assert_relative_eq!(distance_to_segment(Vec2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn bounds_of_box_like_is_position_plus_size() {
        let el = rect_at(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        let b = el.bounds();
        assert_eq!(b.min, Vec2::new(10.0, 20.0));
        assert_eq!(b.max, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn bounds_of_path_like_spans_anchor_and_points() {
        let el = Element::new(
            2,
            Vec2::new(100.0, 100.0),
            ElementStyle::default(),
            ElementKind::Line {
                points: vec![Vec2::ZERO, Vec2::new(-20.0, 35.0)],
            },
        );
        let b = el.bounds();
        assert_eq!(b.min, Vec2::new(80.0, 100.0));
        assert_eq!(b.max, Vec2::new(100.0, 135.0));
    }

    #[test]
    fn bounds_never_has_negative_extent() {
        let el = Element::new(
            3,
            Vec2::new(5.0, 5.0),
            ElementStyle::default(),
            ElementKind::Freehand {
                points: vec![Vec2::new(-3.0, 7.0)],
                pressures: vec![0.5],
            },
        );
        let size = el.bounds().size();
        assert!(size.x >= 0.0 && size.y >= 0.0);
    }

    #[test]
    fn contains_point_hits_center_of_box_like() {
        let el = rect_at(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(el.contains_point(Vec2::new(5.0, 5.0), 1.0));
        assert!(!el.contains_point(Vec2::new(50.0, 50.0), 1.0));
    }

    #[test]
    fn contains_point_respects_segment_tolerance() {
        let el = Element::new(
            4,
            Vec2::ZERO,
            ElementStyle::default(),
            ElementKind::Line {
                points: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
            },
        );
        assert!(el.contains_point(Vec2::new(5.0, 0.8), 1.0));
        assert!(!el.contains_point(Vec2::new(5.0, 1.2), 1.0));
    }

    #[test]
    fn freehand_uses_half_tolerance() {
        let el = Element::new(
            5,
            Vec2::ZERO,
            ElementStyle::default(),
            ElementKind::Freehand {
                points: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
                pressures: vec![0.5, 0.5],
            },
        );
        assert!(el.contains_point(Vec2::new(5.0, 0.4), 1.0));
        assert!(!el.contains_point(Vec2::new(5.0, 0.8), 1.0));
    }

    #[test]
    fn apply_bounds_scales_path_points() {
        let mut el = Element::new(
            6,
            Vec2::new(10.0, 10.0),
            ElementStyle::default(),
            ElementKind::Line {
                points: vec![Vec2::ZERO, Vec2::new(10.0, 20.0)],
            },
        );
        let old = el.bounds();
        let new = Bounds {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::new(30.0, 50.0),
        };
        el.apply_bounds(&old, &new);

        let b = el.bounds();
        assert_relative_eq!(b.min.x, 10.0);
        assert_relative_eq!(b.max.x, 30.0);
        assert_relative_eq!(b.max.y, 50.0);
    }

    #[test]
    fn seed_is_stable_after_mutation() {
        let mut el = rect_at(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let seed = el.seed;
        el.translate(Vec2::new(5.0, 5.0));
        el.apply_bounds(
            &Bounds::from_corners(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0)),
            &Bounds::from_corners(Vec2::ZERO, Vec2::new(20.0, 20.0)),
        );
        assert_eq!(el.seed, seed);
    }
}
