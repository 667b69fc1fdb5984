use egui::Pos2;

use crate::gizmo::GizmoHandle;
use crate::shape::{Shape, ShapeId};

/// What the cursor is over while no gesture is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Handle { shape: ShapeId, handle: GizmoHandle },
    Shape(ShapeId),
}

/// Transient context of the gesture in progress.
///
/// `snapshot` is a full copy of the target shape taken when the gesture
/// started; every move is computed from it rather than from the live shape.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub(crate) drag_origin: Option<Pos2>,
    pub(crate) target: Option<ShapeId>,
    pub(crate) active_handle: Option<GizmoHandle>,
    pub(crate) snapshot: Option<Shape>,
    pub(crate) poly_points: Vec<Pos2>,
    pub(crate) hover: Option<HoverTarget>,
}

impl Interaction {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn drag_origin(&self) -> Option<Pos2> {
        self.drag_origin
    }

    /// Shape being manipulated by the current gesture.
    pub fn target(&self) -> Option<ShapeId> {
        self.target
    }

    pub fn active_handle(&self) -> Option<GizmoHandle> {
        self.active_handle
    }

    pub fn snapshot(&self) -> Option<&Shape> {
        self.snapshot.as_ref()
    }

    /// Vertices placed so far while drawing a polygon.
    pub fn poly_points(&self) -> &[Pos2] {
        &self.poly_points
    }

    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    pub fn is_empty(&self) -> bool {
        self.drag_origin.is_none()
            && self.target.is_none()
            && self.active_handle.is_none()
            && self.snapshot.is_none()
            && self.poly_points.is_empty()
            && self.hover.is_none()
    }
}
