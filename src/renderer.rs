// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Pos2, Rect, Shape as PaintShape, Stroke};

use crate::export::{FILL_ALPHA, SCALE_COLOR};
use crate::gizmo::{self, GizmoHandle, Handle};
use crate::image::LoadedImage;
use crate::input::CanvasTransform;
use crate::shape::{Shape, ShapeGeometry};
use crate::state::{EditorContext, EditorMode, HoverTarget};

/// Outline color of the selected shape.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
const HANDLE_COLOR: Color32 = Color32::WHITE;
const HANDLE_HOVER: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);
const ELLIPSE_SEGMENTS: usize = 72;
const DASH: (f32, f32) = (6.0, 4.0);

#[derive(Default)]
pub struct Renderer {
    texture: Option<egui::TextureHandle>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload `image` as the canvas background, replacing the previous one.
    pub fn set_image(&mut self, ctx: &egui::Context, image: &LoadedImage) {
        self.texture = Some(ctx.load_texture(
            image.name(),
            image.to_color_image(),
            egui::TextureOptions::LINEAR,
        ));
    }

    pub fn clear_image(&mut self) {
        self.texture = None;
    }

    /// Paint the image, the calibration, all shapes, the selected shape's
    /// handles and any in-progress preview.
    pub fn render(&self, painter: &Painter, transform: &CanvasTransform, editor: &EditorContext) {
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                transform.image_rect(),
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        self.render_calibration(painter, transform, editor);

        for shape in editor.shapes() {
            let selected = editor.selected_id() == Some(shape.id());
            paint_shape(painter, transform, shape, selected);
        }

        if let Some(shape) = editor.selected_shape() {
            self.render_handles(painter, transform, editor, shape);
        }

        self.render_previews(painter, transform, editor);
    }

    /// Magnified view of the scene around the pointer.
    pub fn render_zoom_lens(&self, painter: &Painter, transform: &CanvasTransform, editor: &EditorContext) {
        let (Some(pointer), Some([w, h])) = (editor.pointer(), editor.image_size()) else {
            return;
        };
        let config = editor.config();
        let canvas = transform.canvas_rect();
        let lens_rect = Rect::from_min_size(
            Pos2::new(canvas.right() - config.zoom_lens_size - 8.0, canvas.top() + 8.0),
            egui::vec2(config.zoom_lens_size, config.zoom_lens_size),
        );
        let lens = CanvasTransform::focused(
            lens_rect,
            egui::vec2(w as f32, h as f32),
            pointer,
            transform.scale() * config.zoom_level,
        );

        let clipped = painter.with_clip_rect(lens_rect);
        clipped.rect_filled(lens_rect, 0.0, Color32::BLACK);
        self.render(&clipped, &lens, editor);

        let guide = Stroke::new(1.0, Color32::from_white_alpha(128));
        let c = lens_rect.center();
        clipped.line_segment([Pos2::new(c.x, lens_rect.top()), Pos2::new(c.x, lens_rect.bottom())], guide);
        clipped.line_segment([Pos2::new(lens_rect.left(), c.y), Pos2::new(lens_rect.right(), c.y)], guide);
        painter.rect_stroke(lens_rect, 4.0, Stroke::new(2.0, Color32::WHITE));
    }

    fn render_calibration(&self, painter: &Painter, transform: &CanvasTransform, editor: &EditorContext) {
        let (p1, p2) = editor.calibration().points();
        let stroke = Stroke::new(2.0, SCALE_COLOR);

        match (p1, p2) {
            (Some(a), Some(b)) => {
                painter.line_segment([transform.to_screen(a), transform.to_screen(b)], stroke);
            }
            (Some(a), None) if editor.mode() == EditorMode::SettingScale2 => {
                if let Some(pointer) = editor.pointer() {
                    let path = [transform.to_screen(a), transform.to_screen(pointer)];
                    painter.extend(PaintShape::dashed_line(&path, stroke, DASH.0, DASH.1));
                }
            }
            _ => {}
        }
        for p in [p1, p2].into_iter().flatten() {
            painter.circle_filled(transform.to_screen(p), 4.0, SCALE_COLOR);
        }
    }

    fn render_handles(
        &self,
        painter: &Painter,
        transform: &CanvasTransform,
        editor: &EditorContext,
        shape: &Shape,
    ) {
        let config = editor.config();
        let hs = transform.len_to_screen(config.handle_size).max(4.0);
        let hovered = match editor.interaction().hover() {
            Some(HoverTarget::Handle { shape: id, handle }) if id == shape.id() => Some(handle),
            _ => None,
        };
        let outline = Stroke::new(2.0, Color32::BLACK);

        if let Some([top, tip]) = gizmo::rotation_leader(shape.geometry(), config.rotation_handle_distance) {
            let color = if hovered == Some(GizmoHandle::Rotation) { HANDLE_HOVER } else { HANDLE_COLOR };
            let path = [transform.to_screen(top), transform.to_screen(tip)];
            painter.extend(PaintShape::dashed_line(&path, Stroke::new(1.0, color), 4.0, 4.0));
        }

        for Handle { kind, pos } in editor.selected_handles() {
            let color = if hovered == Some(kind) { HANDLE_HOVER } else { HANDLE_COLOR };
            let p = transform.to_screen(pos);
            match kind {
                GizmoHandle::Center => {
                    let stroke = Stroke::new(2.0, color);
                    painter.line_segment([p - egui::vec2(hs, 0.0), p + egui::vec2(hs, 0.0)], stroke);
                    painter.line_segment([p - egui::vec2(0.0, hs), p + egui::vec2(0.0, hs)], stroke);
                }
                GizmoHandle::Rotation => {
                    painter.circle(p, hs, color, outline);
                }
                GizmoHandle::Vertex(_) => {
                    painter.circle(p, 5.0, color, Stroke::new(1.5, Color32::BLACK));
                }
                GizmoHandle::AxisRight
                | GizmoHandle::AxisLeft
                | GizmoHandle::AxisBottom
                | GizmoHandle::AxisTop => {
                    let rect = Rect::from_center_size(p, egui::vec2(hs, hs));
                    painter.rect_filled(rect, 0.0, color);
                    painter.rect_stroke(rect, 0.0, outline);
                }
            }
        }
    }

    fn render_previews(&self, painter: &Painter, transform: &CanvasTransform, editor: &EditorContext) {
        let stroke = Stroke::new(2.0, editor.next_color());

        if let Some(preview) = editor.draw_preview() {
            let mut path: Vec<Pos2> = preview
                .outline(ELLIPSE_SEGMENTS)
                .into_iter()
                .map(|p| transform.to_screen(p))
                .collect();
            if let Some(&first) = path.first() {
                path.push(first);
            }
            painter.extend(PaintShape::dashed_line(&path, stroke, DASH.0, DASH.1));
        }

        if editor.mode() == EditorMode::DrawingPolygon {
            let points = editor.interaction().poly_points();
            let mut path: Vec<Pos2> = points.iter().map(|p| transform.to_screen(*p)).collect();
            if !path.is_empty() {
                if let Some(pointer) = editor.pointer() {
                    path.push(transform.to_screen(pointer));
                }
            }
            if path.len() > 1 {
                painter.extend(PaintShape::dashed_line(&path, stroke, DASH.0, DASH.1));
            }
            for p in points {
                painter.circle_filled(transform.to_screen(*p), 4.0, stroke.color);
            }
        }
    }
}

fn paint_shape(painter: &Painter, transform: &CanvasTransform, shape: &Shape, selected: bool) {
    let color = if selected { HIGHLIGHT } else { shape.color() };
    let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (FILL_ALPHA * 255.0) as u8);
    let stroke = Stroke::new(if selected { 3.0 } else { 2.0 }, color);

    let points: Vec<Pos2> = shape
        .geometry()
        .outline(ELLIPSE_SEGMENTS)
        .into_iter()
        .map(|p| transform.to_screen(p))
        .collect();

    match shape.geometry() {
        ShapeGeometry::Polygon { closed: false, .. } => {
            painter.add(PaintShape::line(points, stroke));
        }
        ShapeGeometry::Polygon { .. } => {
            fill_polygon(painter, &points, fill);
            painter.add(PaintShape::closed_line(points, stroke));
        }
        ShapeGeometry::Ellipse { .. } | ShapeGeometry::Rectangle { .. } => {
            painter.add(PaintShape::convex_polygon(points, fill, stroke));
        }
    }
}

/// Even-odd scanline fill; polygons may be concave or self-intersecting.
fn fill_polygon(painter: &Painter, points: &[Pos2], fill: Color32) {
    if points.len() < 3 {
        return;
    }
    let bounds = Rect::from_points(points);
    let stroke = Stroke::new(1.0, fill);
    let mut crossings = Vec::new();

    let mut y = bounds.top().floor() + 0.5;
    while y < bounds.bottom() {
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y > y) != (b.y > y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            painter.line_segment([Pos2::new(span[0], y), Pos2::new(span[1], y)], stroke);
        }
        y += 1.0;
    }
}
