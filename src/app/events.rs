//! Intents und Commands der Anwendungsschicht.
//!
//! Intents sind rohe UI-Absichten (Pointer, Tastatur, Toolbar), Commands
//! die daraus abgeleiteten Anwendungsbefehle. Die Trennung hält die
//! UI-Schicht dumm und macht die Befehlskette testbar.

use glam::Vec2;

use crate::app::state::EditorTool;
use crate::core::element::{Element, ElementId, ElementStyle, StrokeStyle};

/// Pointer-Taste; Secondary ist reserviert für Kontextmenüs und startet
/// keine Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Modifier-Zustand zum Zeitpunkt eines Pointer-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    /// Shift gedrückt (Toggle-Selektion)
    pub shift: bool,
    /// Ctrl bzw. Cmd gedrückt (Zoom am Mausrad)
    pub command: bool,
    /// Leertaste gehalten (temporäres Pan)
    pub space: bool,
}

/// Partieller Stil-Patch; nur gesetzte Felder werden angewendet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleUpdate {
    pub stroke_color: Option<[f32; 4]>,
    /// Äußeres Option: Feld gesetzt? Inneres: Füllung oder ungefüllt
    pub fill_color: Option<Option<[f32; 4]>>,
    pub stroke_width: Option<f32>,
    pub stroke_style: Option<StrokeStyle>,
    pub roughness: Option<f32>,
    pub opacity: Option<f32>,
    /// Nur für Text-Elemente; löst eine Neuvermessung aus
    pub font_size: Option<f32>,
}

impl StyleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Wendet den Patch auf einen Stil an. Gibt zurück, ob sich etwas
    /// geändert hat.
    pub fn apply_to(&self, style: &mut ElementStyle) -> bool {
        let before = style.clone();
        if let Some(v) = self.stroke_color {
            style.stroke_color = v;
        }
        if let Some(v) = self.fill_color {
            style.fill_color = v;
        }
        if let Some(v) = self.stroke_width {
            style.stroke_width = v;
        }
        if let Some(v) = self.stroke_style {
            style.stroke_style = v;
        }
        if let Some(v) = self.roughness {
            style.roughness = v;
        }
        if let Some(v) = self.opacity {
            style.opacity = v;
        }
        *style != before
    }
}

/// Rohe Absicht aus der UI-Schicht.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    PointerPressed {
        screen: Vec2,
        button: PointerButton,
        modifiers: PointerModifiers,
        pressure: f32,
    },
    PointerDoubleClicked {
        screen: Vec2,
    },
    PointerMoved {
        screen: Vec2,
        pressure: f32,
    },
    PointerReleased {
        screen: Vec2,
    },
    /// Escape oder Fokusverlust: Geste vollständig abbrechen
    GestureAborted,
    WheelScrolled {
        screen: Vec2,
        delta: Vec2,
        /// True bei Ctrl/Cmd: Zoom statt Pan
        zoom: bool,
    },
    ViewportResized {
        size: [f32; 2],
    },
    ToolSelected {
        tool: EditorTool,
    },
    UndoRequested,
    RedoRequested,
    SelectAllRequested,
    DeleteSelectedRequested,
    GridToggled,
    ResetViewRequested,
    ZoomInRequested,
    ZoomOutRequested,
    ZoomToFitRequested,
    /// Stil-Patch auf die Selektion (und den Stil neuer Elemente)
    StyleUpdateRequested {
        update: StyleUpdate,
    },
    /// Programmatische Mutationsfläche: fertiges Element einfügen
    AddElementRequested {
        element: Element,
    },
    /// Programmatische Mutationsfläche: Elemente soft-löschen
    SoftDeleteRequested {
        ids: Vec<ElementId>,
    },
    /// Text-Overlay abgeschlossen: bestehendes Element (`target`)
    /// aktualisieren oder neues an `world` anlegen
    TextEditCommitted {
        target: Option<ElementId>,
        content: String,
        world: Vec2,
    },
    /// Text-Overlay verworfen
    TextEditCancelled,
}

/// Anwendungsbefehl; aus genau einem Intent abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    PointerDown {
        screen: Vec2,
        button: PointerButton,
        modifiers: PointerModifiers,
        pressure: f32,
    },
    PointerDouble {
        screen: Vec2,
    },
    PointerDrag {
        screen: Vec2,
        pressure: f32,
    },
    PointerUp {
        screen: Vec2,
    },
    CancelGesture,
    PanView {
        delta_screen: Vec2,
    },
    ZoomView {
        screen: Vec2,
        factor: f32,
    },
    ZoomStep {
        zoom_in: bool,
    },
    ResetView,
    ZoomToFit,
    SetViewportSize {
        size: [f32; 2],
    },
    SetTool {
        tool: EditorTool,
    },
    Undo,
    Redo,
    SelectAll,
    DeleteSelected,
    ToggleGrid,
    ApplyStyleUpdate {
        update: StyleUpdate,
    },
    AddElement {
        element: Element,
    },
    SoftDeleteElements {
        ids: Vec<ElementId>,
    },
    CommitTextEdit {
        target: Option<ElementId>,
        content: String,
        world: Vec2,
    },
    CancelTextEdit,
}
