pub mod polygon;
pub mod types;
pub mod vertices;

pub use polygon::{
    MIN_SIDES, PolygonMetrics, PolygonSpec, compute, compute_from_text, parse_polygon_input,
};
pub use types::{Point2D, Viewport};
pub use vertices::{
    DEFAULT_CANVAS_MARGIN, generate_canvas_vertices, generate_vertices, radius_for_canvas,
};
