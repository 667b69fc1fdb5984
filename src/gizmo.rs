//! Manipulation handles derived from a shape's current geometry.

use egui::{CursorIcon, Pos2, Vec2};

use crate::config::EditorConfig;
use crate::geometry::{rotate_around, within_pick_radius};
use crate::shape::{Axis, ShapeGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoHandle {
    Center,
    AxisRight,
    AxisLeft,
    AxisBottom,
    AxisTop,
    Rotation,
    Vertex(usize),
}

impl GizmoHandle {
    /// Stable name, e.g. `axis-right` or `vertex-2`.
    pub fn name(&self) -> String {
        match self {
            GizmoHandle::Center => "center".to_owned(),
            GizmoHandle::AxisRight => "axis-right".to_owned(),
            GizmoHandle::AxisLeft => "axis-left".to_owned(),
            GizmoHandle::AxisBottom => "axis-bottom".to_owned(),
            GizmoHandle::AxisTop => "axis-top".to_owned(),
            GizmoHandle::Rotation => "rotation".to_owned(),
            GizmoHandle::Vertex(i) => format!("vertex-{i}"),
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            GizmoHandle::AxisRight | GizmoHandle::AxisLeft => Some(Axis::Horizontal),
            GizmoHandle::AxisBottom | GizmoHandle::AxisTop => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            GizmoHandle::Rotation => CursorIcon::Grab,
            GizmoHandle::Center => CursorIcon::Move,
            _ => CursorIcon::PointingHand,
        }
    }
}

/// A handle placed in image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub kind: GizmoHandle,
    pub pos: Pos2,
}

/// Handles of `geometry` in priority order.
///
/// Ellipses and rectangles yield center, the four axis handles and the
/// rotation handle, all rotated with the shape. Polygons yield one handle
/// per vertex.
pub fn handles_for(geometry: &ShapeGeometry, rotation_handle_distance: f32) -> Vec<Handle> {
    match geometry {
        ShapeGeometry::Polygon { vertices, .. } => vertices
            .iter()
            .enumerate()
            .map(|(i, v)| Handle {
                kind: GizmoHandle::Vertex(i),
                pos: *v,
            })
            .collect(),
        ShapeGeometry::Ellipse { center, rotation, .. }
        | ShapeGeometry::Rectangle { center, rotation, .. } => {
            let half = geometry.half_extents().unwrap_or(Vec2::ZERO);
            let place = |offset: Vec2| rotate_around(*center + offset, *center, *rotation);

            vec![
                Handle { kind: GizmoHandle::Center, pos: *center },
                Handle { kind: GizmoHandle::AxisRight, pos: place(Vec2::new(half.x, 0.0)) },
                Handle { kind: GizmoHandle::AxisLeft, pos: place(Vec2::new(-half.x, 0.0)) },
                Handle { kind: GizmoHandle::AxisBottom, pos: place(Vec2::new(0.0, half.y)) },
                Handle { kind: GizmoHandle::AxisTop, pos: place(Vec2::new(0.0, -half.y)) },
                Handle {
                    kind: GizmoHandle::Rotation,
                    pos: place(Vec2::new(0.0, -half.y - rotation_handle_distance)),
                },
            ]
        }
    }
}

/// First handle of `geometry` within the pick radius of `pos`.
///
/// Declaration order breaks ties: center, axes, rotation, then vertices
/// by index.
pub fn handle_at(pos: Pos2, geometry: &ShapeGeometry, config: &EditorConfig) -> Option<Handle> {
    let radius = config.pick_radius();
    handles_for(geometry, config.rotation_handle_distance)
        .into_iter()
        .find(|handle| within_pick_radius(pos, handle.pos, radius))
}

/// Segment from the top extent to the rotation handle, for drawing the leader.
pub fn rotation_leader(geometry: &ShapeGeometry, rotation_handle_distance: f32) -> Option<[Pos2; 2]> {
    let center = geometry.center()?;
    let half = geometry.half_extents()?;
    let rotation = geometry.rotation();
    let top = rotate_around(center + Vec2::new(0.0, -half.y), center, rotation);
    let tip = rotate_around(
        center + Vec2::new(0.0, -half.y - rotation_handle_distance),
        center,
        rotation,
    );
    Some([top, tip])
}
