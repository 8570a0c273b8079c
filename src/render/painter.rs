//! Referenz-Backend auf `egui::Painter`.
//!
//! Zeichnet glatt und deterministisch; `seed` und `roughness` werden
//! bewusst nicht interpretiert, sie sind Vertragsbestandteil für
//! skizzenhafte Backends.

use egui::{Align2, Color32, FontId, Pos2, Shape, Stroke, StrokeKind};
use glam::Vec2;

use crate::core::{FontFamily, StrokeStyle, TextAlign};
use crate::shared::TextMeasurer;

use super::backend::{DrawBackend, ShapeStyle};

/// Segmentanzahl der Ellipsen-Tessellierung.
const ELLIPSE_SEGMENTS: usize = 64;

pub struct EguiBackend<'a> {
    painter: &'a egui::Painter,
    /// Pixel-Offset der Zeichenfläche im Fenster
    origin: Vec2,
}

impl<'a> EguiBackend<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Vec2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, p: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }

    fn stroke(&self, style: &ShapeStyle) -> Stroke {
        Stroke::new(
            style.stroke_width.max(0.5),
            color(style.stroke_color, style.opacity),
        )
    }

    /// Zeichnet einen Linienzug unter Beachtung der Strichart.
    fn stroke_path(&mut self, points: Vec<Pos2>, closed: bool, style: &ShapeStyle) {
        if points.len() < 2 {
            return;
        }
        let stroke = self.stroke(style);
        match style.stroke_style {
            StrokeStyle::Solid => {
                let shape = if closed {
                    Shape::closed_line(points, stroke)
                } else {
                    Shape::line(points, stroke)
                };
                self.painter.add(shape);
            }
            StrokeStyle::Dashed | StrokeStyle::Dotted => {
                let (dash, gap) = match style.stroke_style {
                    StrokeStyle::Dashed => (style.stroke_width * 4.0 + 4.0, 6.0),
                    _ => (style.stroke_width.max(1.0), 4.0),
                };
                let mut points = points;
                if closed {
                    if let Some(first) = points.first().copied() {
                        points.push(first);
                    }
                }
                self.painter
                    .extend(Shape::dashed_line(&points, stroke, dash, gap));
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Pos2], style: &ShapeStyle) {
        if let Some(fill) = style.fill_color {
            self.painter.add(Shape::convex_polygon(
                points.to_vec(),
                color(fill, style.opacity),
                Stroke::NONE,
            ));
        }
    }

    fn ellipse_points(&self, center: Vec2, radii: Vec2) -> Vec<Pos2> {
        (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                self.pos(center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin()))
            })
            .collect()
    }
}

fn color(rgba: [f32; 4], opacity: f32) -> Color32 {
    let a = (rgba[3] * opacity).clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (a * 255.0) as u8,
    )
}

fn font_id(size: f32, family: FontFamily) -> FontId {
    match family {
        FontFamily::Hand | FontFamily::Normal => FontId::proportional(size),
        FontFamily::Code => FontId::monospace(size),
    }
}

impl DrawBackend for EguiBackend<'_> {
    fn clear(&mut self, c: [f32; 4]) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, color(c, 1.0));
    }

    fn rect(&mut self, min: Vec2, size: Vec2, style: &ShapeStyle) {
        let points = vec![
            self.pos(min),
            self.pos(min + Vec2::new(size.x, 0.0)),
            self.pos(min + size),
            self.pos(min + Vec2::new(0.0, size.y)),
        ];
        self.fill_polygon(&points, style);
        self.stroke_path(points, true, style);
    }

    fn ellipse(&mut self, center: Vec2, radii: Vec2, style: &ShapeStyle) {
        let points = self.ellipse_points(center, radii);
        self.fill_polygon(&points, style);
        self.stroke_path(points, true, style);
    }

    fn polygon(&mut self, points: &[Vec2], style: &ShapeStyle) {
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.fill_polygon(&points, style);
        self.stroke_path(points, true, style);
    }

    fn polyline(&mut self, points: &[Vec2], style: &ShapeStyle) {
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.stroke_path(points, false, style);
    }

    fn freehand(&mut self, points: &[Vec2], _pressures: &[f32], style: &ShapeStyle) {
        // Druckdaten werden hier nicht genutzt; ein skizzenhaftes Backend
        // moduliert damit die Strichbreite
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.stroke_path(points, false, style);
    }

    fn text(
        &mut self,
        pos: Vec2,
        content: &str,
        font_size: f32,
        family: FontFamily,
        align: TextAlign,
        c: [f32; 4],
        opacity: f32,
    ) {
        let anchor = match align {
            TextAlign::Left => Align2::LEFT_TOP,
            TextAlign::Center => Align2::CENTER_TOP,
            TextAlign::Right => Align2::RIGHT_TOP,
        };
        self.painter.text(
            self.pos(pos),
            anchor,
            content,
            font_id(font_size, family),
            color(c, opacity),
        );
    }

    fn ui_rect(
        &mut self,
        min: Vec2,
        size: Vec2,
        fill: Option<[f32; 4]>,
        stroke: Option<([f32; 4], f32)>,
    ) {
        let rect = egui::Rect::from_min_size(self.pos(min), egui::vec2(size.x, size.y));
        if let Some(fill) = fill {
            self.painter.rect_filled(rect, 0.0, color(fill, 1.0));
        }
        if let Some((c, width)) = stroke {
            self.painter
                .rect_stroke(rect, 0.0, Stroke::new(width, color(c, 1.0)), StrokeKind::Middle);
        }
    }

    fn ui_line(&mut self, a: Vec2, b: Vec2, c: [f32; 4], width: f32) {
        self.painter
            .line_segment([self.pos(a), self.pos(b)], Stroke::new(width, color(c, 1.0)));
    }
}

/// Textvermessung über den egui-Font-Stack.
pub struct EguiTextMeasurer {
    ctx: egui::Context,
}

impl EguiTextMeasurer {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, content: &str, font_size: f32, family: FontFamily) -> Vec2 {
        let galley = self.ctx.fonts_mut(|fonts| {
            fonts.layout_no_wrap(
                content.to_owned(),
                font_id(font_size, family),
                Color32::WHITE,
            )
        });
        Vec2::new(galley.size().x, galley.size().y)
    }
}
