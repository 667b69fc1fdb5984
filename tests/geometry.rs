use egui::{Pos2, Vec2};
use shape_area_calc::geometry::{
    drag_rect, point_in_ellipse, point_in_polygon, point_in_rectangle, polygon_area,
    rotate_around, scaled_polygon_area, signed_polygon_area, within_pick_radius,
};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn square() -> Vec<Pos2> {
    vec![
        Pos2::new(0.0, 0.0),
        Pos2::new(10.0, 0.0),
        Pos2::new(10.0, 10.0),
        Pos2::new(0.0, 10.0),
    ]
}

#[test]
fn test_ellipse_boundary_is_inside() {
    let c = Pos2::new(50.0, 50.0);

    assert!(point_in_ellipse(Pos2::new(70.0, 50.0), c, 20.0, 10.0, 0.0));
    assert!(point_in_ellipse(Pos2::new(50.0, 40.0), c, 20.0, 10.0, 0.0));
    assert!(!point_in_ellipse(Pos2::new(70.5, 50.0), c, 20.0, 10.0, 0.0));
    assert!(!point_in_ellipse(Pos2::new(65.0, 58.0), c, 20.0, 10.0, 0.0));
}

#[test]
fn test_degenerate_ellipse_contains_nothing() {
    let c = Pos2::new(0.0, 0.0);
    assert!(!point_in_ellipse(c, c, 0.0, 10.0, 0.0));
    assert!(!point_in_ellipse(c, c, 10.0, -1.0, 0.0));
}

#[test]
fn test_containment_is_rotation_invariant() {
    let center = Pos2::new(100.0, 80.0);
    let probes = [
        Pos2::new(115.0, 80.0),
        Pos2::new(100.0, 88.0),
        Pos2::new(118.0, 86.0),
        Pos2::new(90.0, 75.0),
        Pos2::new(125.0, 80.0),
    ];

    for angle in [0.3, FRAC_PI_4, 2.0, -1.2, 7.0] {
        for p in probes {
            let turned = rotate_around(p, center, angle);
            assert_eq!(
                point_in_ellipse(p, center, 20.0, 10.0, 0.0),
                point_in_ellipse(turned, center, 20.0, 10.0, angle),
                "ellipse probe {p:?} at angle {angle}"
            );
            assert_eq!(
                point_in_rectangle(p, center, Vec2::new(40.0, 20.0), 0.0),
                point_in_rectangle(turned, center, Vec2::new(40.0, 20.0), angle),
                "rectangle probe {p:?} at angle {angle}"
            );
        }
    }
}

#[test]
fn test_rotated_rectangle() {
    let center = Pos2::new(0.0, 0.0);
    let size = Vec2::new(40.0, 10.0);

    // Lying flat the long side runs along x.
    assert!(point_in_rectangle(Pos2::new(18.0, 0.0), center, size, 0.0));
    // A quarter turn swings it onto the y axis.
    assert!(!point_in_rectangle(Pos2::new(18.0, 0.0), center, size, FRAC_PI_2));
    assert!(point_in_rectangle(Pos2::new(0.0, 18.0), center, size, FRAC_PI_2));
}

#[test]
fn test_point_in_polygon_concave() {
    // An L shape.
    let l_shape = [
        Pos2::new(0.0, 0.0),
        Pos2::new(10.0, 0.0),
        Pos2::new(10.0, 4.0),
        Pos2::new(4.0, 4.0),
        Pos2::new(4.0, 10.0),
        Pos2::new(0.0, 10.0),
    ];

    assert!(point_in_polygon(Pos2::new(2.0, 8.0), &l_shape));
    assert!(point_in_polygon(Pos2::new(8.0, 2.0), &l_shape));
    assert!(!point_in_polygon(Pos2::new(8.0, 8.0), &l_shape));
    assert!(!point_in_polygon(Pos2::new(-1.0, 5.0), &l_shape));
}

#[test]
fn test_polygon_needs_three_vertices() {
    let two = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0)];
    assert!(!point_in_polygon(Pos2::new(5.0, 0.0), &two));
    assert_eq!(signed_polygon_area(&two), 0.0);
    assert_eq!(polygon_area(&[]), 0.0);
}

#[test]
fn test_shoelace_is_invariant_under_cyclic_shift() {
    let ring = vec![
        Pos2::new(3.0, 1.0),
        Pos2::new(12.0, 4.0),
        Pos2::new(9.0, 11.0),
        Pos2::new(2.0, 8.0),
    ];
    let base = signed_polygon_area(&ring);

    for shift in 1..ring.len() {
        let mut shifted = ring.clone();
        shifted.rotate_left(shift);
        assert!((signed_polygon_area(&shifted) - base).abs() < 1e-4);
    }
}

#[test]
fn test_shoelace_reversal_flips_sign() {
    let mut ring = square();
    let forward = signed_polygon_area(&ring);
    ring.reverse();

    assert_eq!(forward, 100.0);
    assert_eq!(signed_polygon_area(&ring), -forward);
    assert_eq!(polygon_area(&ring), 100.0);
}

#[test]
fn test_scaled_area_is_factor_squared() {
    let ring = square();
    assert!((scaled_polygon_area(&ring, 0.5) - 25.0).abs() < 1e-5);
    assert!((scaled_polygon_area(&ring, 3.0) - polygon_area(&ring) * 9.0).abs() < 1e-3);
}

#[test]
fn test_self_intersecting_ring_sums_lobes() {
    // Bow tie: two triangles of opposite winding cancel out.
    let bow_tie = [
        Pos2::new(0.0, 0.0),
        Pos2::new(10.0, 10.0),
        Pos2::new(10.0, 0.0),
        Pos2::new(0.0, 10.0),
    ];
    assert!(signed_polygon_area(&bow_tie).abs() < 1e-5);
}

#[test]
fn test_rotate_quarter_turn() {
    let p = rotate_around(Pos2::new(10.0, 0.0), Pos2::ZERO, FRAC_PI_2);
    assert!((p - Pos2::new(0.0, 10.0)).length() < 1e-5);

    let back = rotate_around(p, Pos2::ZERO, -FRAC_PI_2);
    assert!((back - Pos2::new(10.0, 0.0)).length() < 1e-5);

    let half = rotate_around(Pos2::new(5.0, 5.0), Pos2::new(4.0, 4.0), PI);
    assert!((half - Pos2::new(3.0, 3.0)).length() < 1e-5);
}

#[test]
fn test_pick_radius_is_inclusive() {
    let target = Pos2::new(0.0, 0.0);
    assert!(within_pick_radius(Pos2::new(12.0, 0.0), target, 12.0));
    assert!(!within_pick_radius(Pos2::new(12.01, 0.0), target, 12.0));
}

#[test]
fn test_drag_rect_normalizes_corners() {
    let rect = drag_rect(Pos2::new(110.0, 60.0), Pos2::new(10.0, 10.0));
    assert_eq!(rect.min, Pos2::new(10.0, 10.0));
    assert_eq!(rect.max, Pos2::new(110.0, 60.0));
}
