use crate::error::PolygonResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless use.
///
/// Frames are still validated so invalid geometry surfaces without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_polygon_vertex_count: usize,
    pub last_dot_count: usize,
    pub last_line_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PolygonResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_polygon_vertex_count = frame
            .polygons
            .iter()
            .map(|polygon| polygon.vertices.len())
            .sum();
        self.last_dot_count = frame.dots.len();
        self.last_line_count = frame.lines.len();
        Ok(())
    }
}
