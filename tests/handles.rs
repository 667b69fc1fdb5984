use egui::{CursorIcon, Pos2};
use shape_area_calc::gizmo::{handle_at, handles_for, rotation_leader, GizmoHandle};
use shape_area_calc::shape::{factory, ShapeGeometry};
use shape_area_calc::EditorConfig;
use std::f32::consts::FRAC_PI_2;

fn rect(center: Pos2, w: f32, h: f32, rotation: f32) -> ShapeGeometry {
    ShapeGeometry::Rectangle { center, w, h, rotation }
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn test_handle_order_and_placement() {
    let geometry = rect(Pos2::new(100.0, 100.0), 100.0, 50.0, 0.0);
    let handles = handles_for(&geometry, 30.0);

    let kinds: Vec<GizmoHandle> = handles.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GizmoHandle::Center,
            GizmoHandle::AxisRight,
            GizmoHandle::AxisLeft,
            GizmoHandle::AxisBottom,
            GizmoHandle::AxisTop,
            GizmoHandle::Rotation,
        ]
    );
    assert_eq!(handles[1].pos, Pos2::new(150.0, 100.0));
    assert_eq!(handles[2].pos, Pos2::new(50.0, 100.0));
    assert_eq!(handles[3].pos, Pos2::new(100.0, 125.0));
    assert_eq!(handles[4].pos, Pos2::new(100.0, 75.0));
    assert_eq!(handles[5].pos, Pos2::new(100.0, 45.0));
}

#[test]
fn test_handles_follow_rotation() {
    let geometry = ShapeGeometry::Ellipse {
        center: Pos2::new(0.0, 0.0),
        rx: 20.0,
        ry: 10.0,
        rotation: FRAC_PI_2,
    };
    let handles = handles_for(&geometry, 30.0);

    // A quarter turn clockwise on screen sends local +x to +y.
    assert!(close(handles[1].pos, Pos2::new(0.0, 20.0)));
    assert!(close(handles[5].pos, Pos2::new(40.0, 0.0)));

    let [top, tip] = rotation_leader(&geometry, 30.0).expect("ellipse has a leader");
    assert!(close(top, Pos2::new(10.0, 0.0)));
    assert!(close(tip, handles[5].pos));
}

#[test]
fn test_polygon_has_vertex_handles_only() {
    let polygon = factory::closed_polygon(&[
        Pos2::new(0.0, 0.0),
        Pos2::new(50.0, 0.0),
        Pos2::new(0.0, 50.0),
    ])
    .expect("three vertices");
    let handles = handles_for(&polygon, 30.0);

    assert_eq!(handles.len(), 3);
    assert_eq!(handles[2].kind, GizmoHandle::Vertex(2));
    assert_eq!(handles[2].pos, Pos2::new(0.0, 50.0));
    assert!(rotation_leader(&polygon, 30.0).is_none());
}

#[test]
fn test_pick_radius_boundary() {
    let config = EditorConfig::default();
    assert_eq!(config.pick_radius(), 12.0);
    let geometry = rect(Pos2::new(100.0, 100.0), 100.0, 100.0, 0.0);

    let hit = handle_at(Pos2::new(112.0, 100.0), &geometry, &config).expect("on the boundary");
    assert_eq!(hit.kind, GizmoHandle::Center);
    assert!(handle_at(Pos2::new(112.01, 100.0), &geometry, &config).is_none());
}

#[test]
fn test_overlapping_handles_resolve_in_order() {
    let config = EditorConfig::default();
    // Handles of a small rectangle all crowd around its center.
    let geometry = rect(Pos2::new(50.0, 50.0), 10.0, 10.0, 0.0);

    let hit = handle_at(Pos2::new(54.0, 50.0), &geometry, &config).expect("near several");
    assert_eq!(hit.kind, GizmoHandle::Center);

    let far_right = handle_at(Pos2::new(66.0, 50.0), &geometry, &config).expect("right only");
    assert_eq!(far_right.kind, GizmoHandle::AxisRight);

    let polygon = factory::closed_polygon(&[
        Pos2::new(0.0, 0.0),
        Pos2::new(4.0, 0.0),
        Pos2::new(100.0, 100.0),
    ])
    .expect("three vertices");
    let vertex = handle_at(Pos2::new(2.0, 0.0), &polygon, &config).expect("two vertices close");
    assert_eq!(vertex.kind, GizmoHandle::Vertex(0));
}

#[test]
fn test_handle_names_and_cursors() {
    assert_eq!(GizmoHandle::AxisRight.name(), "axis-right");
    assert_eq!(GizmoHandle::Vertex(2).name(), "vertex-2");
    assert_eq!(GizmoHandle::Rotation.cursor_icon(), CursorIcon::Grab);
    assert_eq!(GizmoHandle::Center.cursor_icon(), CursorIcon::Move);
    assert_eq!(GizmoHandle::AxisTop.cursor_icon(), CursorIcon::PointingHand);
}
