use egui::{Pos2, Rect, Vec2};

/// Maps between screen points and image pixels for an image fitted into
/// the canvas with its aspect ratio preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    canvas: Rect,
    /// Screen rectangle the image occupies.
    image_rect: Rect,
    /// Screen points per image pixel.
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(canvas: Rect, image_size: Vec2) -> Self {
        let scale = if image_size.x > 0.0 && image_size.y > 0.0 {
            (canvas.width() / image_size.x).min(canvas.height() / image_size.y)
        } else {
            1.0
        };
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let image_rect = Rect::from_center_size(canvas.center(), image_size * scale);
        Self {
            canvas,
            image_rect,
            scale,
        }
    }

    /// Magnified view with image point `focus` at the center of `canvas`.
    pub fn focused(canvas: Rect, image_size: Vec2, focus: Pos2, scale: f32) -> Self {
        let min = canvas.center() - focus.to_vec2() * scale;
        Self {
            canvas,
            image_rect: Rect::from_min_size(min, image_size * scale),
            scale,
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas
    }

    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_image(&self, screen: Pos2) -> Pos2 {
        Pos2::ZERO + (screen - self.image_rect.min) / self.scale
    }

    pub fn to_screen(&self, image: Pos2) -> Pos2 {
        self.image_rect.min + image.to_vec2() * self.scale
    }

    /// Image-space length expressed in screen points.
    pub fn len_to_screen(&self, len: f32) -> f32 {
        len * self.scale
    }
}
