use egui::{Pos2, Vec2};

use super::to_local;

/// Whether `point` lies inside (or on) the ellipse centred at `center` with
/// semi-axes `rx`, `ry`, rotated by `rotation` radians.
pub fn point_in_ellipse(point: Pos2, center: Pos2, rx: f32, ry: f32, rotation: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let local = to_local(point, center, rotation);
    let nx = local.x / rx;
    let ny = local.y / ry;
    nx * nx + ny * ny <= 1.0
}

/// Whether `point` lies inside (or on) the `w` x `h` rectangle centred at
/// `center` and rotated by `rotation` radians.
pub fn point_in_rectangle(point: Pos2, center: Pos2, size: Vec2, rotation: f32) -> bool {
    let local = to_local(point, center, rotation);
    local.x.abs() <= size.x / 2.0 && local.y.abs() <= size.y / 2.0
}

/// Even-odd crossing test against the closed ring `vertices`.
///
/// The last-to-first edge is included. Fewer than three vertices never
/// contain anything.
pub fn point_in_polygon(point: Pos2, vertices: &[Pos2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        // Horizontal edges never straddle the ray, so the division is safe.
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Boundary-inclusive pick test used for handles.
pub fn within_pick_radius(point: Pos2, target: Pos2, radius: f32) -> bool {
    point.distance(target) <= radius
}
