use crate::gizmo::GizmoHandle;

/// The interaction modes of the measurement editor.
///
/// Exactly one gesture can be in flight at a time because the editor holds a
/// single mode value and only interprets a pointer-down as "start a gesture"
/// from `Idle` or from an armed drawing/calibration mode.
///
/// # State Transitions
///
/// ```text
///          begin calibration          click               click
///   Idle ─────────────────► SettingScale1 ───► SettingScale2 ───► Idle
///    │
///    │ add shape (ellipse/rectangle)        release
///    ├────────────────────────────► Drawing ───────► Idle
///    │
///    │ add shape (polygon)              double-click (>= 3 vertices)
///    ├────────────────────────────► DrawingPolygon ───────────────► Idle
///    │
///    │ press on handle / shape          release
///    └───► DraggingShape | ResizingHandle | DraggingVertex | Rotating ───► Idle
/// ```
///
/// Escape returns every mode to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    SettingScale1,
    SettingScale2,
    Drawing,
    DrawingPolygon,
    DraggingShape,
    ResizingHandle,
    DraggingVertex,
    Rotating,
}

impl EditorMode {
    /// Validates whether a transition to the new mode is allowed
    pub fn can_transition_to(&self, new_mode: &EditorMode) -> bool {
        match (self, new_mode) {
            // Every mode can finish or be cancelled
            (_, EditorMode::Idle) => true,

            // From Idle, we can start anything
            (EditorMode::Idle, _) => true,

            (EditorMode::SettingScale1, EditorMode::SettingScale2) => true,

            _ => false,
        }
    }

    /// The gesture started by pressing on `handle`.
    pub fn for_handle(handle: GizmoHandle) -> EditorMode {
        match handle {
            GizmoHandle::Center => EditorMode::DraggingShape,
            GizmoHandle::Rotation => EditorMode::Rotating,
            GizmoHandle::Vertex(_) => EditorMode::DraggingVertex,
            GizmoHandle::AxisRight
            | GizmoHandle::AxisLeft
            | GizmoHandle::AxisBottom
            | GizmoHandle::AxisTop => EditorMode::ResizingHandle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorMode::Idle)
    }

    /// Capturing calibration points
    pub fn is_calibrating(&self) -> bool {
        matches!(self, EditorMode::SettingScale1 | EditorMode::SettingScale2)
    }

    /// Armed to create a new shape
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorMode::Drawing | EditorMode::DrawingPolygon)
    }

    /// Manipulating an existing shape
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            EditorMode::DraggingShape
                | EditorMode::ResizingHandle
                | EditorMode::DraggingVertex
                | EditorMode::Rotating
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::Idle => "Idle",
            EditorMode::SettingScale1 => "SettingScale1",
            EditorMode::SettingScale2 => "SettingScale2",
            EditorMode::Drawing => "Drawing",
            EditorMode::DrawingPolygon => "DrawingPolygon",
            EditorMode::DraggingShape => "DraggingShape",
            EditorMode::ResizingHandle => "ResizingHandle",
            EditorMode::DraggingVertex => "DraggingVertex",
            EditorMode::Rotating => "Rotating",
        }
    }
}
