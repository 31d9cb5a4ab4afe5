use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::types::{Point2D, Viewport};

/// Inset kept between the polygon's circumscribed circle and the canvas edge.
pub const DEFAULT_CANVAS_MARGIN: f64 = 30.0;

/// Generates the outline of a regular polygon inscribed in a circle.
///
/// Vertex 0 sits directly above `center` (angle offset −π/2) and the
/// sequence follows the boundary, so edges connect `i` to `(i + 1) % sides`.
/// With y growing downward this walks clockwise on screen.
#[must_use]
pub fn generate_vertices(sides: u32, center: Point2D, radius: f64) -> Vec<Point2D> {
    let n = f64::from(sides);
    (0..sides)
        .map(|i| {
            let angle = TAU * f64::from(i) / n - FRAC_PI_2;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Circumradius that keeps the polygon `margin` pixels inside the canvas.
#[must_use]
pub fn radius_for_canvas(width: f64, height: f64, margin: f64) -> f64 {
    width.min(height) / 2.0 - margin
}

/// Vertices for a polygon centered on `viewport` and inset by `margin`.
#[must_use]
pub fn generate_canvas_vertices(sides: u32, viewport: Viewport, margin: f64) -> Vec<Point2D> {
    let radius = radius_for_canvas(
        f64::from(viewport.width),
        f64::from(viewport.height),
        margin,
    );
    generate_vertices(sides, viewport.center(), radius)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CANVAS_MARGIN, generate_vertices, radius_for_canvas};
    use crate::core::types::Point2D;

    #[test]
    fn default_canvas_radius_matches_reference_layout() {
        assert_eq!(radius_for_canvas(300.0, 300.0, DEFAULT_CANVAS_MARGIN), 120.0);
        assert_eq!(radius_for_canvas(400.0, 300.0, DEFAULT_CANVAS_MARGIN), 120.0);
    }

    #[test]
    fn first_vertex_is_above_center() {
        let center = Point2D::new(150.0, 150.0);
        let vertices = generate_vertices(5, center, 120.0);
        assert!((vertices[0].x - 150.0).abs() <= 1e-9);
        assert!((vertices[0].y - 30.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_sides_yield_no_vertices() {
        assert!(generate_vertices(0, Point2D::new(0.0, 0.0), 1.0).is_empty());
    }
}
