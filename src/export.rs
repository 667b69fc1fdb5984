//! Area reports and the annotated image export.

use std::path::Path;

use egui::{pos2, Color32, Pos2};
use image::{Rgba, RgbaImage};
use serde::Serialize;

use crate::calibration::to_precision;
use crate::error::ExportError;
use crate::shape::{Shape, ShapeGeometry, ShapeId, ShapeKind};
use crate::state::EditorContext;

pub const REPORT_TITLE: &str = "ShapeAreaCalc - Area Report";
pub const TEXT_REPORT_FILE: &str = "shapes_area_report.txt";
pub const JSON_REPORT_FILE: &str = "shapes_area_report.json";
pub const OVERLAY_FILE: &str = "shapes_export.png";

/// Opacity of a shape's fill on the image.
pub const FILL_ALPHA: f32 = 0.1;
const OUTLINE_WIDTH: f32 = 2.0;
/// Calibration line and points.
pub const SCALE_COLOR: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
const SCALE_POINT_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportScale {
    pub real_length: f32,
    /// Physical units per pixel.
    pub factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub area: Option<f32>,
}

/// Snapshot of every shape's area, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub image: Option<String>,
    pub unit: String,
    pub scale: Option<ReportScale>,
    pub shapes: Vec<ReportEntry>,
    pub total: Option<f32>,
}

impl AreaReport {
    pub fn from_editor(editor: &EditorContext, image_name: Option<&str>) -> Result<Self, ExportError> {
        if editor.shapes().is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let calibration = editor.calibration();
        let scale = calibration.factor().map(|factor| ReportScale {
            real_length: calibration.real_length(),
            factor,
        });
        let shapes = editor
            .shapes()
            .iter()
            .map(|shape| ReportEntry {
                id: shape.id(),
                kind: shape.kind(),
                area: editor.area_of(shape.id()),
            })
            .collect();

        Ok(Self {
            image: image_name.map(str::to_owned),
            unit: calibration.unit().to_owned(),
            scale,
            shapes,
            total: editor.total_area(),
        })
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![REPORT_TITLE.to_owned(), "=".repeat(REPORT_TITLE.len())];
        if let Some(scale) = &self.scale {
            lines.push(format!(
                "Scale: {} {unit}  (1 px = {} {unit})",
                scale.real_length,
                to_precision(scale.factor, 4),
                unit = self.unit
            ));
        }
        if let Some(image) = &self.image {
            lines.push(format!("Image: {image}"));
        }
        lines.push(String::new());

        for entry in &self.shapes {
            lines.push(format!(
                "#{}  {:<10} {}",
                entry.id,
                entry.kind.label(),
                format_area(entry.area, &self.unit)
            ));
        }
        lines.push("-".repeat(REPORT_TITLE.len()));
        lines.push(format!("Total:      {}", format_area(self.total, &self.unit)));
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_text(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_text())?;
        log::info!("Wrote text report to {}", path.display());
        Ok(())
    }

    pub fn save_json(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Wrote JSON report to {}", path.display());
        Ok(())
    }
}

/// `1,234.57 µm²`, or `—` when there is no area.
pub fn format_area(area: Option<f32>, unit: &str) -> String {
    match area {
        Some(a) => format!("{} {unit}²", format_thousands(a)),
        None => "—".to_owned(),
    }
}

/// Two decimals with comma thousands separators.
pub fn format_thousands(value: f32) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Paint the calibration line and every shape onto a copy of `image`.
/// Nothing is highlighted as selected.
pub fn render_overlay(image: &RgbaImage, editor: &EditorContext) -> RgbaImage {
    let mut out = image.clone();

    let (p1, p2) = editor.calibration().points();
    if let (Some(a), Some(b)) = (p1, p2) {
        stroke_segment(&mut out, a, b, OUTLINE_WIDTH, SCALE_COLOR);
    }
    for p in [p1, p2].into_iter().flatten() {
        stamp_disc(&mut out, p, SCALE_POINT_RADIUS, SCALE_COLOR, 1.0);
    }

    for shape in editor.shapes() {
        paint_shape(&mut out, shape);
    }
    out
}

pub fn save_overlay(path: &Path, image: &RgbaImage, editor: &EditorContext) -> Result<(), ExportError> {
    if editor.shapes().is_empty() {
        return Err(ExportError::NothingToExport);
    }
    render_overlay(image, editor).save(path)?;
    log::info!("Wrote annotated image to {}", path.display());
    Ok(())
}

fn paint_shape(img: &mut RgbaImage, shape: &Shape) {
    let color = shape.color();
    let geometry = shape.geometry();
    let bounds = geometry.bounds();
    let (w, h) = (img.width() as f32, img.height() as f32);

    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = bounds.max.x.ceil().min(w) as u32;
    let y1 = bounds.max.y.ceil().min(h) as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            if geometry.contains(pos2(x as f32 + 0.5, y as f32 + 0.5)) {
                blend(img, x, y, color, FILL_ALPHA);
            }
        }
    }

    let outline = geometry.outline(128);
    let closed = !matches!(geometry, ShapeGeometry::Polygon { closed: false, .. });
    for pair in outline.windows(2) {
        stroke_segment(img, pair[0], pair[1], OUTLINE_WIDTH, color);
    }
    if closed {
        if let (Some(&first), Some(&last)) = (outline.first(), outline.last()) {
            stroke_segment(img, last, first, OUTLINE_WIDTH, color);
        }
    }
}

fn stroke_segment(img: &mut RgbaImage, a: Pos2, b: Pos2, width: f32, color: Color32) {
    let steps = ((b - a).length() * 2.0).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a.lerp(b, i as f32 / steps as f32);
        stamp_disc(img, p, width / 2.0, color, 1.0);
    }
}

fn stamp_disc(img: &mut RgbaImage, center: Pos2, radius: f32, color: Color32, alpha: f32) {
    let r = radius.max(0.5);
    let x0 = (center.x - r).floor().max(0.0) as u32;
    let y0 = (center.y - r).floor().max(0.0) as u32;
    let x1 = ((center.x + r).ceil().max(0.0) as u32).min(img.width());
    let y1 = ((center.y + r).ceil().max(0.0) as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            if pos2(x as f32 + 0.5, y as f32 + 0.5).distance(center) <= r {
                blend(img, x, y, color, alpha);
            }
        }
    }
}

fn blend(img: &mut RgbaImage, x: u32, y: u32, color: Color32, alpha: f32) {
    let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
    let mix = |under: u8, over: u8| (under as f32 * (1.0 - alpha) + over as f32 * alpha).round() as u8;
    img.put_pixel(
        x,
        y,
        Rgba([mix(r, color.r()), mix(g, color.g()), mix(b, color.b()), a.max((alpha * 255.0) as u8)]),
    );
}
