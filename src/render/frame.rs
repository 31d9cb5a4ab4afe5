use crate::core::Viewport;
use crate::error::{PolygonError, PolygonResult};
use crate::render::{DotPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive};

/// Backend-agnostic scene for one canvas draw pass.
///
/// Backends paint layers in field order: rects, polygons, dots, lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub dots: Vec<DotPrimitive>,
    pub lines: Vec<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            polygons: Vec::new(),
            dots: Vec::new(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_dot(mut self, dot: DotPrimitive) -> Self {
        self.dots.push(dot);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    pub fn validate(&self) -> PolygonResult<()> {
        if !self.viewport.is_valid() {
            return Err(PolygonError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.polygons.is_empty()
            && self.dots.is_empty()
            && self.lines.is_empty()
    }
}
