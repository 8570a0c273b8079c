use crate::app::interaction::Interaction;
use crate::core::{Element, ElementId, ElementStyle};

/// Aktives Werkzeug der Toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Selektieren, Verschieben, Resizen (Standard)
    #[default]
    Select,
    /// Sicht verschieben
    Hand,
    Rectangle,
    Ellipse,
    Diamond,
    Arrow,
    Line,
    Freehand,
    /// Soft-Delete per Klick
    Eraser,
}

impl EditorTool {
    /// True für Werkzeuge, die per Geste neue Elemente erzeugen.
    /// Ein Wechsel auf eines davon leert die Selektion.
    pub fn creates_elements(self) -> bool {
        matches!(
            self,
            EditorTool::Rectangle
                | EditorTool::Ellipse
                | EditorTool::Diamond
                | EditorTool::Arrow
                | EditorTool::Line
                | EditorTool::Freehand
        )
    }
}

/// Werkzeug- und Gestenzustand des Editors.
#[derive(Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Zustand der laufenden Pointer-Geste; höchstens eine gleichzeitig
    pub interaction: Interaction,
    /// In-Arbeit-Element der laufenden Zeichengeste; noch nicht Teil
    /// der Szene und nie in der History
    pub pending: Option<Element>,
    /// Element, das gerade in einem externen Text-Overlay editiert wird
    pub text_editing: Option<ElementId>,
    /// Stil, den neu erstellte Elemente erhalten
    pub current_style: ElementStyle,
}

impl EditorToolState {
    pub fn new(current_style: ElementStyle) -> Self {
        Self {
            current_style,
            ..Self::default()
        }
    }
}
