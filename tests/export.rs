use egui::Pos2;
use image::{Rgba, RgbaImage};
use shape_area_calc::error::ExportError;
use shape_area_calc::export::{render_overlay, save_overlay, AreaReport};
use shape_area_calc::shape::PALETTE;
use shape_area_calc::{EditorContext, ShapeKind};

/// Rectangle #1 (100 x 50 px) and a right triangle #2 at 1 px = 0.5 µm.
fn measured_editor() -> EditorContext {
    let mut editor = EditorContext::default();
    editor.load_image(400, 300);
    editor.set_real_length(100.0);
    editor.begin_calibration();
    editor.on_pointer_down(Pos2::new(0.0, 200.0));
    editor.on_pointer_down(Pos2::new(200.0, 200.0));

    editor.set_active_kind(ShapeKind::Rectangle);
    editor.begin_add_shape();
    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    editor.on_pointer_up(Pos2::new(110.0, 60.0));

    editor.set_active_kind(ShapeKind::Polygon);
    editor.begin_add_shape();
    for p in [Pos2::new(200.0, 0.0), Pos2::new(300.0, 0.0), Pos2::new(200.0, 100.0)] {
        editor.on_pointer_down(p);
    }
    editor.on_double_click(Pos2::new(200.0, 100.0));
    editor
}

#[test]
fn test_text_report_layout() {
    let editor = measured_editor();
    let report = AreaReport::from_editor(&editor, Some("cells.png")).unwrap();

    let expected = [
        "ShapeAreaCalc - Area Report",
        "===========================",
        "Scale: 100 µm  (1 px = 0.5000 µm)",
        "Image: cells.png",
        "",
        "#1  Rectangle  1,250.00 µm²",
        "#2  Polygon    1,250.00 µm²",
        "---------------------------",
        "Total:      2,500.00 µm²",
    ]
    .join("\n");
    assert_eq!(report.to_text(), expected);
}

#[test]
fn test_undefined_scale_reports_dashes() {
    let mut editor = measured_editor();
    editor.set_real_length(0.0);
    let report = AreaReport::from_editor(&editor, None).unwrap();
    let text = report.to_text();

    assert!(report.scale.is_none());
    assert!(!text.contains("Scale:"));
    assert!(!text.contains("Image:"));
    assert!(text.contains("#1  Rectangle  —"));
    assert!(text.ends_with("Total:      —"));
}

#[test]
fn test_empty_editor_has_nothing_to_export() {
    let editor = EditorContext::default();
    assert!(matches!(
        AreaReport::from_editor(&editor, None),
        Err(ExportError::NothingToExport)
    ));
}

#[test]
fn test_json_report() {
    let editor = measured_editor();
    let report = AreaReport::from_editor(&editor, Some("cells.png")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["image"], "cells.png");
    assert_eq!(value["unit"], "µm");
    assert_eq!(value["scale"]["factor"], 0.5);
    assert_eq!(value["shapes"][0]["kind"], "Rectangle");
    assert_eq!(value["shapes"][1]["id"], 2);
    assert_eq!(value["total"], 2500.0);
}

#[test]
fn test_reports_written_to_disk() {
    let editor = measured_editor();
    let report = AreaReport::from_editor(&editor, None).unwrap();
    let dir = std::env::temp_dir();
    let txt = dir.join(format!("shape_area_calc_{}.txt", std::process::id()));
    let json = dir.join(format!("shape_area_calc_{}.json", std::process::id()));

    report.save_text(&txt).unwrap();
    report.save_json(&json).unwrap();

    assert_eq!(std::fs::read_to_string(&txt).unwrap(), report.to_text());
    assert!(std::fs::read_to_string(&json).unwrap().contains("\"Polygon\""));
    let _ = std::fs::remove_file(txt);
    let _ = std::fs::remove_file(json);
}

#[test]
fn test_overlay_paints_fill_and_outline() {
    let editor = measured_editor();
    let base = RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 255]));
    let out = render_overlay(&base, &editor);

    // Untouched background.
    assert_eq!(*out.get_pixel(380, 150), Rgba([0, 0, 0, 255]));

    // Interior gets a faint tint of the shape's palette color.
    let inside = out.get_pixel(60, 35);
    assert!(inside[1] > 0 && inside[1] < 40);

    // Edges get the full color.
    let edge = out.get_pixel(10, 35);
    let color = PALETTE[0];
    assert_eq!((edge[0], edge[1], edge[2]), (color.r(), color.g(), color.b()));

    // Selection is not highlighted: the last shape keeps its own color.
    let polygon_edge = out.get_pixel(250, 0);
    let second = PALETTE[1];
    assert_eq!((polygon_edge[0], polygon_edge[1], polygon_edge[2]), (second.r(), second.g(), second.b()));
}

#[test]
fn test_overlay_png_written() {
    let editor = measured_editor();
    let base = RgbaImage::from_pixel(400, 300, Rgba([255, 255, 255, 255]));
    let path = std::env::temp_dir().join(format!("shape_area_calc_{}.png", std::process::id()));

    save_overlay(&path, &base, &editor).unwrap();
    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (400, 300));
    let _ = std::fs::remove_file(path);
}
