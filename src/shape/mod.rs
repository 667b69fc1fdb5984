use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod common;

pub use common::{
    palette_index, MIN_DRAW_EXTENT, MIN_ELLIPSE_RADIUS, MIN_POLYGON_VERTICES, MIN_RECT_EXTENT,
    PALETTE,
};

use crate::geometry::{self, point_in_ellipse, point_in_polygon, point_in_rectangle};

/// Identity of a shape within the current image. Assigned from 1 upwards.
pub type ShapeId = usize;

/// Local axis of an ellipse or rectangle, before rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The three kinds of region the editor can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Ellipse,
    Rectangle,
    Polygon,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Polygon => "Polygon",
        }
    }

    /// Short instruction shown next to the type selector.
    pub fn draw_hint(&self) -> &'static str {
        match self {
            ShapeKind::Ellipse => "Click & drag on image to draw ellipse",
            ShapeKind::Rectangle => "Click & drag on image to draw rectangle",
            ShapeKind::Polygon => "Click to add vertices, double-click to close",
        }
    }

    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Ellipse, ShapeKind::Rectangle, ShapeKind::Polygon]
    }
}

/// Geometry of a shape in image-pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Ellipse {
        center: Pos2,
        rx: f32,
        ry: f32,
        rotation: f32,
    },
    Rectangle {
        center: Pos2,
        w: f32,
        h: f32,
        rotation: f32,
    },
    Polygon {
        vertices: Vec<Pos2>,
        closed: bool,
    },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Containment test in image space. Open polygons contain nothing.
    pub fn contains(&self, pos: Pos2) -> bool {
        match self {
            ShapeGeometry::Ellipse { center, rx, ry, rotation } => {
                point_in_ellipse(pos, *center, *rx, *ry, *rotation)
            }
            ShapeGeometry::Rectangle { center, w, h, rotation } => {
                point_in_rectangle(pos, *center, Vec2::new(*w, *h), *rotation)
            }
            ShapeGeometry::Polygon { vertices, closed } => {
                *closed && point_in_polygon(pos, vertices)
            }
        }
    }

    /// Area in physical units squared for a calibration `factor`
    /// (physical units per pixel). Open polygons have no area.
    pub fn area(&self, factor: f32) -> Option<f32> {
        match self {
            ShapeGeometry::Ellipse { rx, ry, .. } => {
                Some(std::f32::consts::PI * (rx * factor) * (ry * factor))
            }
            ShapeGeometry::Rectangle { w, h, .. } => Some((w * factor) * (h * factor)),
            ShapeGeometry::Polygon { vertices, closed } => {
                if *closed && vertices.len() >= MIN_POLYGON_VERTICES {
                    Some(geometry::scaled_polygon_area(vertices, factor))
                } else {
                    None
                }
            }
        }
    }

    /// Center for ellipses and rectangles. Polygons have no rotation pivot.
    pub fn center(&self) -> Option<Pos2> {
        match self {
            ShapeGeometry::Ellipse { center, .. } | ShapeGeometry::Rectangle { center, .. } => {
                Some(*center)
            }
            ShapeGeometry::Polygon { .. } => None,
        }
    }

    pub fn rotation(&self) -> f32 {
        match self {
            ShapeGeometry::Ellipse { rotation, .. } | ShapeGeometry::Rectangle { rotation, .. } => {
                *rotation
            }
            ShapeGeometry::Polygon { .. } => 0.0,
        }
    }

    /// Unrotated half extents along the local x and y axes.
    pub fn half_extents(&self) -> Option<Vec2> {
        match self {
            ShapeGeometry::Ellipse { rx, ry, .. } => Some(Vec2::new(*rx, *ry)),
            ShapeGeometry::Rectangle { w, h, .. } => Some(Vec2::new(w / 2.0, h / 2.0)),
            ShapeGeometry::Polygon { .. } => None,
        }
    }

    /// Axis-aligned bounds of the shape as it appears on the image.
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeGeometry::Polygon { vertices, .. } => Rect::from_points(vertices),
            ShapeGeometry::Ellipse { center, rx, ry, rotation } => {
                // Exact extents of a rotated ellipse.
                let (sin, cos) = rotation.sin_cos();
                let half_w = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
                let half_h = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
                Rect::from_center_size(*center, Vec2::new(half_w, half_h) * 2.0)
            }
            ShapeGeometry::Rectangle { .. } => Rect::from_points(&self.outline(4)),
        }
    }

    /// Outline points in image space. `segments` applies to ellipses only.
    pub fn outline(&self, segments: usize) -> Vec<Pos2> {
        match self {
            ShapeGeometry::Ellipse { center, rx, ry, rotation } => {
                let n = segments.max(8);
                (0..n)
                    .map(|i| {
                        let t = i as f32 / n as f32 * std::f32::consts::TAU;
                        let local = *center + Vec2::new(rx * t.cos(), ry * t.sin());
                        geometry::rotate_around(local, *center, *rotation)
                    })
                    .collect()
            }
            ShapeGeometry::Rectangle { center, w, h, rotation } => {
                let (hw, hh) = (w / 2.0, h / 2.0);
                [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
                    .into_iter()
                    .map(|(dx, dy)| {
                        geometry::rotate_around(*center + Vec2::new(dx, dy), *center, *rotation)
                    })
                    .collect()
            }
            ShapeGeometry::Polygon { vertices, .. } => vertices.clone(),
        }
    }

    /// Move the whole shape by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            ShapeGeometry::Ellipse { center, .. } | ShapeGeometry::Rectangle { center, .. } => {
                *center += delta;
            }
            ShapeGeometry::Polygon { vertices, .. } => {
                for v in vertices.iter_mut() {
                    *v += delta;
                }
            }
        }
    }

    /// Set the extent along `axis` from a local-frame cursor offset,
    /// clamped to the minimum size. The center stays put.
    pub fn set_extent(&mut self, axis: Axis, local: Vec2) {
        match self {
            ShapeGeometry::Ellipse { rx, ry, .. } => match axis {
                Axis::Horizontal => *rx = local.x.abs().max(MIN_ELLIPSE_RADIUS),
                Axis::Vertical => *ry = local.y.abs().max(MIN_ELLIPSE_RADIUS),
            },
            ShapeGeometry::Rectangle { w, h, .. } => match axis {
                Axis::Horizontal => *w = (local.x.abs() * 2.0).max(MIN_RECT_EXTENT),
                Axis::Vertical => *h = (local.y.abs() * 2.0).max(MIN_RECT_EXTENT),
            },
            ShapeGeometry::Polygon { .. } => {
                log::debug!("Ignoring extent change on a polygon");
            }
        }
    }

    pub fn set_rotation(&mut self, angle: f32) {
        match self {
            ShapeGeometry::Ellipse { rotation, .. } | ShapeGeometry::Rectangle { rotation, .. } => {
                *rotation = angle;
            }
            ShapeGeometry::Polygon { .. } => {
                log::debug!("Ignoring rotation on a polygon");
            }
        }
    }

    /// Move vertex `index` of a polygon. Out-of-range indices are ignored.
    pub fn set_vertex(&mut self, index: usize, pos: Pos2) {
        if let ShapeGeometry::Polygon { vertices, .. } = self {
            if let Some(v) = vertices.get_mut(index) {
                *v = pos;
            }
        }
    }

    pub fn vertex(&self, index: usize) -> Option<Pos2> {
        match self {
            ShapeGeometry::Polygon { vertices, .. } => vertices.get(index).copied(),
            _ => None,
        }
    }
}

/// A region of interest on the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    color_index: usize,
    geometry: ShapeGeometry,
}

impl Shape {
    /// Creates a shape whose color follows its creation order.
    pub fn new(id: ShapeId, geometry: ShapeGeometry) -> Self {
        Self {
            id,
            color_index: palette_index(id),
            geometry,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn color(&self) -> Color32 {
        PALETTE[self.color_index % PALETTE.len()]
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        &mut self.geometry
    }

    /// Replace the geometry wholesale, e.g. from a drag snapshot.
    pub fn set_geometry(&mut self, geometry: ShapeGeometry) {
        self.geometry = geometry;
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.geometry.contains(pos)
    }

    /// Calibrated area, or `None` while the calibration factor is undefined.
    pub fn area(&self, factor: Option<f32>) -> Option<f32> {
        factor.and_then(|f| self.geometry.area(f))
    }

    /// List label such as `Rectangle #3`.
    pub fn display_name(&self) -> String {
        format!("{} #{}", self.kind().label(), self.id)
    }
}

/// Constructors that enforce the creation policies.
pub mod factory {
    use super::*;

    /// Geometry for an ellipse or rectangle dragged from `start` to `end`.
    ///
    /// Returns `None` when either side of the drag box is not larger than
    /// [`MIN_DRAW_EXTENT`], or when `kind` is a polygon.
    pub fn from_drag(kind: ShapeKind, start: Pos2, end: Pos2) -> Option<ShapeGeometry> {
        let rect = geometry::drag_rect(start, end);
        if rect.width() <= MIN_DRAW_EXTENT || rect.height() <= MIN_DRAW_EXTENT {
            return None;
        }

        let center = rect.center();
        match kind {
            ShapeKind::Ellipse => Some(ShapeGeometry::Ellipse {
                center,
                rx: rect.width() / 2.0,
                ry: rect.height() / 2.0,
                rotation: 0.0,
            }),
            ShapeKind::Rectangle => Some(ShapeGeometry::Rectangle {
                center,
                w: rect.width(),
                h: rect.height(),
                rotation: 0.0,
            }),
            ShapeKind::Polygon => None,
        }
    }

    /// A closed polygon from accumulated vertices, or `None` if there are
    /// fewer than [`MIN_POLYGON_VERTICES`].
    pub fn closed_polygon(vertices: &[Pos2]) -> Option<ShapeGeometry> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        Some(ShapeGeometry::Polygon {
            vertices: vertices.to_vec(),
            closed: true,
        })
    }
}
