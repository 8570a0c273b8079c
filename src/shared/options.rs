//! Zentrale Konfiguration für sketchboard.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::element::{ElementStyle, StrokeStyle};

// ── Zoom & Navigation ───────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Toolbar / Shortcuts).
pub const ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Rand-Anteil beim Zoom-to-Fit (0.9 = 10 % Luft um den Inhalt).
pub const FIT_MARGIN_FACTOR: f32 = 0.9;

// ── Hit-Testing & Selektion ─────────────────────────────────────────

/// Treffer-Toleranz für Pfad-Elemente in Screen-Pixeln.
pub const HIT_TOLERANCE_PX: f32 = 10.0;
/// Trefferradius der Resize-Anfasser in Screen-Pixeln.
pub const HANDLE_HIT_RADIUS_PX: f32 = 8.0;
/// Welt-Abstand der Selektionsbox/Anfasser von den Element-Bounds.
pub const SELECTION_PADDING_WORLD: f32 = 8.0;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite in Welteinheiten; die Dichte auf dem Bildschirm skaliert
/// damit automatisch mit dem Zoom.
pub const GRID_STEP_WORLD: f32 = 20.0;

// ── Farben (RGBA 0.0–1.0) ───────────────────────────────────────────

/// Hintergrund der Zeichenfläche.
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Rasterlinien.
pub const GRID_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.08];
/// Selektionsumriss und Anfasser-Kontur.
pub const SELECTION_COLOR: [f32; 4] = [0.42, 0.35, 0.85, 1.0];
/// Füllung des Gummiband-Rechtecks.
pub const RUBBER_BAND_FILL: [f32; 4] = [0.42, 0.35, 0.85, 0.12];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `sketchboard.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Navigation ──────────────────────────────────────────────
    /// Zoom-Schritt bei stufenweisem Zoom
    pub zoom_step: f32,
    /// Zoom-Schritt pro Mausrad-Raste
    pub scroll_zoom_step: f32,

    // ── Hit-Testing & Selektion ─────────────────────────────────
    /// Treffer-Toleranz für Pfad-Elemente (Screen-Pixel)
    pub hit_tolerance_px: f32,
    /// Trefferradius der Resize-Anfasser (Screen-Pixel)
    pub handle_hit_radius_px: f32,
    /// Welt-Padding der Selektionsbox
    pub selection_padding_world: f32,

    // ── Raster & Farben ─────────────────────────────────────────
    /// Rasterweite in Welteinheiten
    pub grid_step_world: f32,
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
    /// Farbe der Rasterlinien
    pub grid_color: [f32; 4],
    /// Farbe von Selektionsumriss und Anfassern
    pub selection_color: [f32; 4],
    /// Füllfarbe des Gummiband-Rechtecks
    pub rubber_band_fill: [f32; 4],

    // ── Stil-Defaults für neue Elemente ─────────────────────────
    /// Konturfarbe neuer Elemente
    pub default_stroke_color: [f32; 4],
    /// Füllfarbe neuer Elemente (None = ungefüllt)
    pub default_fill_color: Option<[f32; 4]>,
    /// Konturbreite neuer Elemente
    pub default_stroke_width: f32,
    /// Strichart neuer Elemente
    pub default_stroke_style: StrokeStyle,
    /// Rauheit neuer Elemente
    pub default_roughness: f32,
    /// Deckkraft neuer Elemente (0–100)
    pub default_opacity: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        let style = ElementStyle::default();
        Self {
            zoom_step: ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            handle_hit_radius_px: HANDLE_HIT_RADIUS_PX,
            selection_padding_world: SELECTION_PADDING_WORLD,
            grid_step_world: GRID_STEP_WORLD,
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            selection_color: SELECTION_COLOR,
            rubber_band_fill: RUBBER_BAND_FILL,
            default_stroke_color: style.stroke_color,
            default_fill_color: style.fill_color,
            default_stroke_width: style.stroke_width,
            default_stroke_style: style.stroke_style,
            default_roughness: style.roughness,
            default_opacity: style.opacity,
        }
    }
}

impl EditorOptions {
    /// Stil für neu erstellte Elemente aus den Defaults.
    pub fn default_element_style(&self) -> ElementStyle {
        ElementStyle {
            stroke_color: self.default_stroke_color,
            fill_color: self.default_fill_color,
            stroke_width: self.default_stroke_width,
            stroke_style: self.default_stroke_style,
            roughness: self.default_roughness,
            opacity: self.default_opacity,
        }
    }

    /// Pfad der Optionsdatei neben der Binary; Fallback: Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sketchboard.toml")
    }

    /// Lädt Optionen von `path`; bei Fehlern (fehlende Datei, Parse)
    /// werden die Defaults verwendet und der Grund geloggt.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(options) => {
                    log::info!("Optionen geladen aus {}", path.display());
                    options
                }
                Err(err) => {
                    log::warn!("Optionsdatei unlesbar ({err}), verwende Defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        log::info!("Optionen gespeichert nach {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_roundtrip_through_toml() {
        let mut options = EditorOptions::default();
        options.grid_step_world = 50.0;
        options.default_fill_color = Some([0.5, 0.2, 0.2, 1.0]);

        let raw = toml::to_string_pretty(&options).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&raw).expect("parsebar");
        assert_eq!(back, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: EditorOptions = toml::from_str("zoom_step = 2.0").expect("parsebar");
        assert_eq!(back.zoom_step, 2.0);
        assert_eq!(back.grid_step_world, GRID_STEP_WORLD);
    }
}
