use approx::assert_abs_diff_eq;
use polygon_calc::core::{
    DEFAULT_CANVAS_MARGIN, Point2D, Viewport, generate_canvas_vertices, generate_vertices,
    radius_for_canvas,
};

#[test]
fn square_vertices_start_at_top_and_walk_the_boundary() {
    let center = Point2D::new(0.0, 0.0);
    let vertices = generate_vertices(4, center, 10.0);

    let expected = [(0.0, -10.0), (10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)];
    assert_eq!(vertices.len(), expected.len());
    for (vertex, (x, y)) in vertices.iter().zip(expected) {
        assert_abs_diff_eq!(vertex.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(vertex.y, y, epsilon = 1e-9);
    }
}

#[test]
fn consecutive_vertices_form_equal_edges() {
    let vertices = generate_vertices(7, Point2D::new(5.0, -3.0), 42.0);
    let first_edge = vertices[0].distance_to(vertices[1]);
    for index in 0..vertices.len() {
        let next = (index + 1) % vertices.len();
        assert_abs_diff_eq!(
            vertices[index].distance_to(vertices[next]),
            first_edge,
            epsilon = 1e-9
        );
    }
}

#[test]
fn canvas_vertices_use_reference_radius() {
    let viewport = Viewport::new(300, 300);
    let vertices = generate_canvas_vertices(6, viewport, DEFAULT_CANVAS_MARGIN);

    assert_eq!(vertices.len(), 6);
    for vertex in &vertices {
        assert_abs_diff_eq!(
            vertex.distance_to(Point2D::new(150.0, 150.0)),
            120.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn radius_uses_shorter_canvas_side() {
    assert_eq!(radius_for_canvas(500.0, 200.0, 30.0), 70.0);
    assert_eq!(radius_for_canvas(200.0, 500.0, 0.0), 100.0);
}

#[test]
fn zero_radius_collapses_to_center() {
    let center = Point2D::new(3.0, 4.0);
    let vertices = generate_vertices(5, center, 0.0);
    assert!(vertices.iter().all(|vertex| *vertex == center));
}
