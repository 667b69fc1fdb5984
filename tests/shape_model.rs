use egui::{Pos2, Vec2};
use shape_area_calc::shape::{factory, Axis, Shape, ShapeGeometry, ShapeKind, PALETTE};
use std::f32::consts::{FRAC_PI_2, PI};

fn rect(center: Pos2, w: f32, h: f32) -> ShapeGeometry {
    ShapeGeometry::Rectangle { center, w, h, rotation: 0.0 }
}

#[test]
fn test_drag_creates_centered_rectangle() {
    let geometry =
        factory::from_drag(ShapeKind::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(110.0, 60.0))
            .expect("drag is large enough");

    assert_eq!(geometry, rect(Pos2::new(60.0, 35.0), 100.0, 50.0));
}

#[test]
fn test_drag_direction_does_not_matter() {
    let geometry =
        factory::from_drag(ShapeKind::Ellipse, Pos2::new(110.0, 60.0), Pos2::new(10.0, 10.0))
            .expect("drag is large enough");

    assert_eq!(
        geometry,
        ShapeGeometry::Ellipse {
            center: Pos2::new(60.0, 35.0),
            rx: 50.0,
            ry: 25.0,
            rotation: 0.0
        }
    );
}

#[test]
fn test_small_drags_are_rejected() {
    let start = Pos2::new(10.0, 10.0);

    // Both sides must be strictly larger than five pixels.
    assert!(factory::from_drag(ShapeKind::Rectangle, start, Pos2::new(15.0, 60.0)).is_none());
    assert!(factory::from_drag(ShapeKind::Ellipse, start, Pos2::new(60.0, 12.0)).is_none());
    assert!(factory::from_drag(ShapeKind::Ellipse, start, Pos2::new(16.0, 16.0)).is_some());
    assert!(factory::from_drag(ShapeKind::Polygon, start, Pos2::new(100.0, 100.0)).is_none());
}

#[test]
fn test_closed_polygon_needs_three_vertices() {
    let pts = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), Pos2::new(0.0, 10.0)];

    assert!(factory::closed_polygon(&pts[..2]).is_none());
    let polygon = factory::closed_polygon(&pts).expect("three vertices");
    assert_eq!(polygon.kind(), ShapeKind::Polygon);
    assert!(polygon.contains(Pos2::new(2.0, 2.0)));
}

#[test]
fn test_open_polygon_has_no_area_or_interior() {
    let open = ShapeGeometry::Polygon {
        vertices: vec![Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), Pos2::new(0.0, 10.0)],
        closed: false,
    };

    assert!(!open.contains(Pos2::new(2.0, 2.0)));
    assert_eq!(open.area(1.0), None);
}

#[test]
fn test_areas_per_kind() {
    let ellipse = ShapeGeometry::Ellipse {
        center: Pos2::ZERO,
        rx: 20.0,
        ry: 10.0,
        rotation: 1.0,
    };
    let rectangle = rect(Pos2::ZERO, 100.0, 50.0);
    let triangle = factory::closed_polygon(&[
        Pos2::new(0.0, 0.0),
        Pos2::new(100.0, 0.0),
        Pos2::new(0.0, 100.0),
    ])
    .expect("three vertices");

    let close = |a: Option<f32>, b: f32| (a.expect("area defined") - b).abs() < 1e-2;
    assert!(close(ellipse.area(0.5), 50.0 * PI));
    assert!(close(rectangle.area(0.5), 1250.0));
    assert!(close(triangle.area(0.5), 1250.0));
}

#[test]
fn test_shape_area_is_undefined_without_factor() {
    let shape = Shape::new(1, rect(Pos2::ZERO, 10.0, 10.0));
    assert_eq!(shape.area(None), None);
    assert_eq!(shape.area(Some(2.0)), Some(400.0));
}

#[test]
fn test_palette_cycles_with_ids() {
    let geometry = rect(Pos2::ZERO, 10.0, 10.0);

    assert_eq!(Shape::new(1, geometry.clone()).color(), PALETTE[0]);
    assert_eq!(Shape::new(8, geometry.clone()).color(), PALETTE[7]);
    assert_eq!(Shape::new(9, geometry).color(), PALETTE[0]);
}

#[test]
fn test_display_name() {
    let shape = Shape::new(3, rect(Pos2::ZERO, 10.0, 10.0));
    assert_eq!(shape.display_name(), "Rectangle #3");
}

#[test]
fn test_translate_moves_every_vertex() {
    let mut polygon = factory::closed_polygon(&[
        Pos2::new(0.0, 0.0),
        Pos2::new(10.0, 0.0),
        Pos2::new(0.0, 10.0),
    ])
    .expect("three vertices");
    polygon.translate(Vec2::new(5.0, -2.0));

    assert_eq!(polygon.vertex(0), Some(Pos2::new(5.0, -2.0)));
    assert_eq!(polygon.vertex(2), Some(Pos2::new(5.0, 8.0)));
    assert_eq!(polygon.vertex(3), None);
}

#[test]
fn test_extent_changes_are_clamped() {
    let mut ellipse = ShapeGeometry::Ellipse {
        center: Pos2::ZERO,
        rx: 20.0,
        ry: 10.0,
        rotation: 0.0,
    };
    ellipse.set_extent(Axis::Horizontal, Vec2::new(-1.0, 0.0));
    assert_eq!(ellipse.half_extents(), Some(Vec2::new(5.0, 10.0)));

    let mut rectangle = rect(Pos2::ZERO, 100.0, 50.0);
    rectangle.set_extent(Axis::Vertical, Vec2::new(0.0, 3.0));
    rectangle.set_extent(Axis::Horizontal, Vec2::new(-30.0, 0.0));
    assert_eq!(rectangle, rect(Pos2::ZERO, 60.0, 10.0));
}

#[test]
fn test_rotated_ellipse_bounds() {
    let ellipse = ShapeGeometry::Ellipse {
        center: Pos2::new(50.0, 50.0),
        rx: 20.0,
        ry: 10.0,
        rotation: FRAC_PI_2,
    };
    let bounds = ellipse.bounds();

    assert!((bounds.width() - 20.0).abs() < 1e-3);
    assert!((bounds.height() - 40.0).abs() < 1e-3);
}

#[test]
fn test_polygon_ignores_rotation_and_extent() {
    let mut polygon = factory::closed_polygon(&[
        Pos2::new(0.0, 0.0),
        Pos2::new(10.0, 0.0),
        Pos2::new(0.0, 10.0),
    ])
    .expect("three vertices");
    let before = polygon.clone();

    polygon.set_rotation(1.0);
    polygon.set_extent(Axis::Horizontal, Vec2::new(50.0, 0.0));
    assert_eq!(polygon, before);
    assert_eq!(polygon.center(), None);
}
