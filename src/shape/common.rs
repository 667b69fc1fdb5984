use egui::Color32;

/// A drag box must exceed this many pixels on both sides to become a shape.
pub const MIN_DRAW_EXTENT: f32 = 5.0;
/// Lower bound for ellipse semi-axes while resizing.
pub const MIN_ELLIPSE_RADIUS: f32 = 5.0;
/// Lower bound for rectangle width/height while resizing.
pub const MIN_RECT_EXTENT: f32 = 10.0;
/// Vertices needed before a polygon can be closed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Colors handed out to shapes in creation order, cycling.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x10, 0xb9, 0x81),
    Color32::from_rgb(0xef, 0x44, 0x44),
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0xf5, 0x9e, 0x0b),
    Color32::from_rgb(0x8b, 0x5c, 0xf6),
    Color32::from_rgb(0xec, 0x48, 0x99),
    Color32::from_rgb(0x14, 0xb8, 0xa6),
    Color32::from_rgb(0xf9, 0x73, 0x16),
];

/// Palette slot for the shape created with `id` (ids start at 1).
pub fn palette_index(id: usize) -> usize {
    id.saturating_sub(1) % PALETTE.len()
}
