//! Textvermessung als austauschbarer Vertrag.
//!
//! Text-Elemente zeichnen ihre Größe nicht interaktiv, sondern leiten sie
//! aus Inhalt und Schrift ab. Die eigentliche Vermessung hängt vom
//! UI-Backend ab und wird deshalb hinter einem Trait injiziert.

use glam::Vec2;

use crate::core::FontFamily;

/// Vermisst Textinhalt zu einer Weltgröße (Breite, Höhe).
pub trait TextMeasurer {
    fn measure(&self, content: &str, font_size: f32, family: FontFamily) -> Vec2;
}

/// Deterministische Näherung ohne Font-Stack: feste Vorschubbreite pro
/// Zeichen, feste Zeilenhöhe. Dient Tests und als Fallback ohne UI.
#[derive(Debug, Clone, Copy)]
pub struct FixedTextMeasurer {
    /// Zeichenbreite als Anteil der Schriftgröße
    pub advance_factor: f32,
    /// Zeilenhöhe als Anteil der Schriftgröße
    pub line_factor: f32,
}

impl Default for FixedTextMeasurer {
    fn default() -> Self {
        Self {
            advance_factor: 0.6,
            line_factor: 1.25,
        }
    }
}

impl TextMeasurer for FixedTextMeasurer {
    fn measure(&self, content: &str, font_size: f32, _family: FontFamily) -> Vec2 {
        let lines: Vec<&str> = content.split('\n').collect();
        let widest = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        Vec2::new(
            widest as f32 * font_size * self.advance_factor,
            lines.len().max(1) as f32 * font_size * self.line_factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_measurer_uses_widest_line_and_line_count() {
        let m = FixedTextMeasurer::default();
        let size = m.measure("ab\nabcd", 10.0, FontFamily::Hand);
        assert_relative_eq!(size.x, 4.0 * 10.0 * 0.6);
        assert_relative_eq!(size.y, 2.0 * 10.0 * 1.25);
    }

    #[test]
    fn empty_text_still_has_one_line_of_height() {
        let m = FixedTextMeasurer::default();
        let size = m.measure("", 20.0, FontFamily::Normal);
        assert_relative_eq!(size.x, 0.0);
        assert_relative_eq!(size.y, 25.0);
    }
}
