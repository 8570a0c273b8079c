//! Zeichen-Backend-Vertrag.
//!
//! Der Orchestrator übersetzt Elemente in Bildschirm-Primitive und ruft
//! dieses Trait; das Backend entscheidet über die Optik. Ein skizzenhaftes
//! Backend nutzt `seed` und `roughness` für stabiles, organisches Zittern,
//! das Referenz-Backend zeichnet glatt und ignoriert beide.

use glam::Vec2;

use crate::core::{FontFamily, StrokeStyle, TextAlign};

/// Stilparameter eines Element-Primitivs, bereits in Bildschirmgrößen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub stroke_color: [f32; 4],
    pub fill_color: Option<[f32; 4]>,
    /// Konturbreite in Pixeln (bereits zoom-skaliert)
    pub stroke_width: f32,
    pub stroke_style: StrokeStyle,
    /// Durchgereicht an skizzenhafte Backends; hier nie interpretiert
    pub roughness: f32,
    /// Durchgereicht an skizzenhafte Backends; pro Element stabil
    pub seed: u64,
    /// Deckkraft 0.0–1.0, multiplikativ auf alle Farben
    pub opacity: f32,
}

/// Zeichenoperationen in Bildschirmkoordinaten.
///
/// `ui_*`-Methoden zeichnen Editor-Chrome (Selektionsbox, Anfasser,
/// Gummiband, Raster) und sind nie skizzenhaft.
pub trait DrawBackend {
    /// Füllt die gesamte Zeichenfläche.
    fn clear(&mut self, color: [f32; 4]);

    /// Achsenparalleles Rechteck.
    fn rect(&mut self, min: Vec2, size: Vec2, style: &ShapeStyle);

    /// Ellipse über Mittelpunkt und Halbachsen.
    fn ellipse(&mut self, center: Vec2, radii: Vec2, style: &ShapeStyle);

    /// Geschlossenes konvexes Polygon.
    fn polygon(&mut self, points: &[Vec2], style: &ShapeStyle);

    /// Offener Linienzug.
    fn polyline(&mut self, points: &[Vec2], style: &ShapeStyle);

    /// Freihandstrich; `pressures` ist parallel zu `points` und darf vom
    /// Backend für variable Strichbreite genutzt oder ignoriert werden.
    fn freehand(&mut self, points: &[Vec2], pressures: &[f32], style: &ShapeStyle);

    /// Textblock; `font_size` in Pixeln.
    fn text(
        &mut self,
        pos: Vec2,
        content: &str,
        font_size: f32,
        family: FontFamily,
        align: TextAlign,
        color: [f32; 4],
        opacity: f32,
    );

    /// Chrome-Rechteck (Selektionsbox, Anfasser, Gummiband).
    fn ui_rect(&mut self, min: Vec2, size: Vec2, fill: Option<[f32; 4]>, stroke: Option<([f32; 4], f32)>);

    /// Chrome-Linie (Raster).
    fn ui_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4], width: f32);
}
