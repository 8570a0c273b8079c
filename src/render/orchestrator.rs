//! Render-Orchestrator: feste Zeichenreihenfolge über dem Backend.
//!
//! Reihenfolge pro Frame: Hintergrund, Raster, Szene in Z-Reihenfolge,
//! Pending-Element, Gummiband, Selektions-Overlay. Der Orchestrator
//! rechnet Welt → Bildschirm; das Backend bekommt nur noch Pixel.

use glam::Vec2;

use crate::core::{selection_bounds, Element, ElementKind, ResizeHandle, Viewport};
use crate::shared::FrameScene;

use super::backend::{DrawBackend, ShapeStyle};

/// Kantenlänge der Anfasser-Quadrate in Pixeln.
const HANDLE_SIZE_PX: f32 = 8.0;
/// Unter dieser Bildschirm-Rasterweite wird das Raster ausgeblendet.
const GRID_MIN_STEP_PX: f32 = 4.0;
/// Länge der Pfeilspitzen-Schenkel relativ zur Konturbreite.
const ARROW_HEAD_BASE_PX: f32 = 12.0;

/// Zeichnet einen kompletten Frame.
pub fn render_frame(backend: &mut dyn DrawBackend, frame: &FrameScene) {
    backend.clear(frame.options.background_color);

    if frame.show_grid {
        draw_grid(backend, frame);
    }

    for element in frame.scene.live_elements() {
        // Element im Text-Edit-Overlay wird komplett ausgespart,
        // damit es nicht doppelt erscheint
        if frame.text_editing == Some(element.id) {
            continue;
        }
        draw_element(backend, &frame.viewport, element);
    }

    if let Some(pending) = &frame.pending {
        draw_element(backend, &frame.viewport, pending);
    }

    if let Some(band) = &frame.rubber_band {
        let min = frame.viewport.world_to_screen(band.min);
        let size = band.size() * frame.viewport.zoom;
        backend.ui_rect(
            min,
            size,
            Some(frame.options.rubber_band_fill),
            Some((frame.options.selection_color, 1.0)),
        );
    }

    draw_selection_overlay(backend, frame);
}

fn shape_style(element: &Element, zoom: f32) -> ShapeStyle {
    ShapeStyle {
        stroke_color: element.style.stroke_color,
        fill_color: element.style.fill_color,
        stroke_width: element.style.stroke_width * zoom,
        stroke_style: element.style.stroke_style,
        roughness: element.style.roughness,
        seed: element.seed,
        opacity: (element.style.opacity / 100.0).clamp(0.0, 1.0),
    }
}

fn draw_element(backend: &mut dyn DrawBackend, viewport: &Viewport, element: &Element) {
    let zoom = viewport.zoom;
    let style = shape_style(element, zoom);

    match &element.kind {
        ElementKind::Rectangle { size } => {
            let min = viewport.world_to_screen(element.position);
            backend.rect(min, *size * zoom, &style);
        }
        ElementKind::Ellipse { size } => {
            let center = viewport.world_to_screen(element.position + *size * 0.5);
            backend.ellipse(center, *size * 0.5 * zoom, &style);
        }
        ElementKind::Diamond { size } => {
            let min = viewport.world_to_screen(element.position);
            let s = *size * zoom;
            // Raute über die vier Kantenmitten der Bounding-Box
            let points = [
                min + Vec2::new(s.x * 0.5, 0.0),
                min + Vec2::new(s.x, s.y * 0.5),
                min + Vec2::new(s.x * 0.5, s.y),
                min + Vec2::new(0.0, s.y * 0.5),
            ];
            backend.polygon(&points, &style);
        }
        ElementKind::Line { points } => {
            let screen = to_screen(viewport, element.position, points);
            backend.polyline(&screen, &style);
        }
        ElementKind::Arrow { points } => {
            let screen = to_screen(viewport, element.position, points);
            backend.polyline(&screen, &style);
            draw_arrow_head(backend, &screen, &style);
        }
        ElementKind::Freehand { points, pressures } => {
            let screen = to_screen(viewport, element.position, points);
            backend.freehand(&screen, pressures, &style);
        }
        ElementKind::Text {
            content,
            font_size,
            font_family,
            align,
            ..
        } => {
            let pos = viewport.world_to_screen(element.position);
            backend.text(
                pos,
                content,
                font_size * zoom,
                *font_family,
                *align,
                element.style.stroke_color,
                style.opacity,
            );
        }
    }
}

fn to_screen(viewport: &Viewport, anchor: Vec2, points: &[Vec2]) -> Vec<Vec2> {
    points
        .iter()
        .map(|p| viewport.world_to_screen(anchor + *p))
        .collect()
}

/// Zwei Schenkel am letzten Segment, je 30° zur Strichrichtung.
fn draw_arrow_head(backend: &mut dyn DrawBackend, screen: &[Vec2], style: &ShapeStyle) {
    let Some([a, b]) = screen.windows(2).last().map(|w| [w[0], w[1]]) else {
        return;
    };
    let dir = b - a;
    let len = dir.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = dir / len;
    let head = (ARROW_HEAD_BASE_PX + style.stroke_width * 2.0).min(len);
    let rotate = |v: Vec2, angle: f32| {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    };
    let back = -dir * head;
    let left = b + rotate(back, 0.5);
    let right = b + rotate(back, -0.5);
    backend.polyline(&[left, b, right], style);
}

fn draw_grid(backend: &mut dyn DrawBackend, frame: &FrameScene) {
    let step_screen = frame.options.grid_step_world * frame.viewport.zoom;
    if step_screen < GRID_MIN_STEP_PX {
        return;
    }
    let [w, h] = frame.viewport_size;
    let world_min = frame.viewport.screen_to_world(Vec2::ZERO);
    let step = frame.options.grid_step_world;
    let color = frame.options.grid_color;

    let mut x = (world_min.x / step).floor() * step;
    loop {
        let sx = frame.viewport.world_to_screen(Vec2::new(x, 0.0)).x;
        if sx > w {
            break;
        }
        backend.ui_line(Vec2::new(sx, 0.0), Vec2::new(sx, h), color, 1.0);
        x += step;
    }
    let mut y = (world_min.y / step).floor() * step;
    loop {
        let sy = frame.viewport.world_to_screen(Vec2::new(0.0, y)).y;
        if sy > h {
            break;
        }
        backend.ui_line(Vec2::new(0.0, sy), Vec2::new(w, sy), color, 1.0);
        y += step;
    }
}

fn draw_selection_overlay(backend: &mut dyn DrawBackend, frame: &FrameScene) {
    let Some(bounds) = selection_bounds(&frame.scene, frame.selected_ids.iter().copied()) else {
        return;
    };
    let padded = bounds.expanded(frame.options.selection_padding_world);
    let min = frame.viewport.world_to_screen(padded.min);
    let size = padded.size() * frame.viewport.zoom;
    backend.ui_rect(min, size, None, Some((frame.options.selection_color, 1.5)));

    // Anfasser nur bei genau einem selektierten Element
    if frame.selected_ids.len() != 1 {
        return;
    }
    let half = Vec2::splat(HANDLE_SIZE_PX * 0.5);
    for handle in ResizeHandle::ALL {
        let center = frame.viewport.world_to_screen(handle.anchor(&padded));
        backend.ui_rect(
            center - half,
            half * 2.0,
            Some([1.0, 1.0, 1.0, 1.0]),
            Some((frame.options.selection_color, 1.0)),
        );
    }
}
