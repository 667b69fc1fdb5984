use crate::shape::{ShapeId, ShapeKind};
use crate::state::EditorMode;

/// Things the editing engine reports to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ModeChanged {
        old: EditorMode,
        new: EditorMode,
    },
    ImageReset {
        width: u32,
        height: u32,
    },
    CalibrationStarted,
    CalibrationPointPlaced,
    /// Second point placed; `factor` is `None` for a degenerate calibration.
    ScaleDefined {
        factor: Option<f32>,
    },
    DrawingStarted {
        kind: ShapeKind,
    },
    ShapeAdded {
        id: ShapeId,
        kind: ShapeKind,
    },
    ShapeTooSmall,
    PolygonNeedsMoreVertices {
        count: usize,
    },
    ShapeDeleted {
        id: ShapeId,
    },
    SelectionChanged {
        id: Option<ShapeId>,
    },
    GestureCancelled {
        mode: EditorMode,
    },
}

impl EditorEvent {
    /// Text for the status bar, if the event is worth telling the user about.
    pub fn status_message(&self) -> Option<String> {
        let message = match self {
            EditorEvent::ImageReset { .. } => "Image loaded. Set Scale first.".to_owned(),
            EditorEvent::CalibrationStarted => "Click first point for scale bar.".to_owned(),
            EditorEvent::CalibrationPointPlaced => "Click second point.".to_owned(),
            EditorEvent::ScaleDefined { factor: Some(_) } => {
                "Scale set. Click 'Add Shape' to draw.".to_owned()
            }
            EditorEvent::ScaleDefined { factor: None } => {
                "Scale points coincide. Set Scale again.".to_owned()
            }
            EditorEvent::DrawingStarted { kind: ShapeKind::Polygon } => {
                "Click to add polygon vertices. Double-click to close.".to_owned()
            }
            EditorEvent::DrawingStarted { kind } => {
                format!("Click & drag to draw {}.", kind.label().to_lowercase())
            }
            EditorEvent::ShapeAdded { kind, .. } => format!("{} added.", kind.label()),
            EditorEvent::ShapeTooSmall => "Shape too small. Try again.".to_owned(),
            EditorEvent::PolygonNeedsMoreVertices { count } => {
                format!("A polygon needs at least 3 vertices ({count} placed).")
            }
            EditorEvent::ShapeDeleted { .. } => "Shape deleted.".to_owned(),
            EditorEvent::ModeChanged { .. }
            | EditorEvent::SelectionChanged { .. }
            | EditorEvent::GestureCancelled { .. } => return None,
        };
        Some(message)
    }
}
