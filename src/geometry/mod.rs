//! Pure geometry used by hit-testing, handle placement and measurement.
//!
//! Everything here works in image-pixel space with the y axis pointing down
//! and takes its geometry explicitly; nothing reaches into editor state.

pub mod area;
pub mod hit_testing;

use egui::{Pos2, Rect, Vec2};

pub use area::{polygon_area, scaled_polygon_area, signed_polygon_area};
pub use hit_testing::{
    point_in_ellipse, point_in_polygon, point_in_rectangle, within_pick_radius,
};

/// Rotate `point` by `angle` radians about `center`.
///
/// Positive angles turn clockwise on screen because y grows downwards.
pub fn rotate_around(point: Pos2, center: Pos2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Pos2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Offset of `point` from `center` expressed in a frame rotated by `rotation`.
///
/// This is the inverse of placing a local offset with [`rotate_around`].
pub fn to_local(point: Pos2, center: Pos2, rotation: f32) -> Vec2 {
    rotate_around(point, center, -rotation) - center
}

/// Axis-aligned box spanned by two drag corners, in any order.
pub fn drag_rect(a: Pos2, b: Pos2) -> Rect {
    Rect::from_two_pos(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn quarter_turn_about_origin() {
        let p = rotate_around(Pos2::new(1.0, 0.0), Pos2::ZERO, FRAC_PI_2);
        assert!(close(p, Pos2::new(0.0, 1.0)));
    }

    #[test]
    fn rotation_about_offset_center() {
        let c = Pos2::new(10.0, 10.0);
        let p = rotate_around(Pos2::new(20.0, 10.0), c, PI);
        assert!(close(p, Pos2::new(0.0, 10.0)));
    }

    #[test]
    fn to_local_undoes_rotation() {
        let c = Pos2::new(3.0, -7.0);
        let placed = rotate_around(c + Vec2::new(4.0, 2.0), c, 0.9);
        let local = to_local(placed, c, 0.9);
        assert!((local - Vec2::new(4.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn drag_rect_normalizes_corners() {
        let r = drag_rect(Pos2::new(110.0, 60.0), Pos2::new(10.0, 10.0));
        assert_eq!(r.min, Pos2::new(10.0, 10.0));
        assert_eq!(r.max, Pos2::new(110.0, 60.0));
    }
}
