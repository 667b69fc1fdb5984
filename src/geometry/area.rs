use egui::Pos2;

/// Shoelace sum over the closed ring, halved. Positive for rings that run
/// clockwise on screen (y down), negative for the reverse order.
///
/// Self-intersecting rings yield the algebraic sum of their lobes.
pub fn signed_polygon_area(vertices: &[Pos2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        sum += vj.x * vi.y - vi.x * vj.y;
        j = i;
    }
    sum / 2.0
}

/// Unsigned area of the closed ring, in square pixels.
pub fn polygon_area(vertices: &[Pos2]) -> f32 {
    signed_polygon_area(vertices).abs()
}

/// Area of the ring with every coordinate multiplied by `factor` first.
pub fn scaled_polygon_area(vertices: &[Pos2], factor: f32) -> f32 {
    let scaled: Vec<Pos2> = vertices
        .iter()
        .map(|p| Pos2::new(p.x * factor, p.y * factor))
        .collect();
    polygon_area(&scaled)
}
