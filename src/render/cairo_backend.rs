use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};

use crate::error::{PolygonError, PolygonResult};
use crate::render::{Color, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub dots_drawn: usize,
    pub lines_drawn: usize,
}

/// Extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit's drawing-area callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PolygonResult<()>;
}

/// Cairo renderer backend.
///
/// Supports offscreen rendering into an owned image surface through
/// `Renderer::render` and in-place rendering through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PolygonResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PolygonError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface contents as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> PolygonResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            PolygonError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            PolygonError::InvalidData(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PolygonResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for polygon in &frame.polygons {
            draw_polygon(context, polygon)?;
            stats.polygons_drawn += 1;
        }

        for dot in &frame.dots {
            context.new_path();
            context.arc(dot.center.x, dot.center.y, dot.radius, 0.0, TAU);
            apply_color(context, dot.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill dot", err))?;
            stats.dots_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PolygonResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PolygonResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> PolygonResult<()> {
    context.new_path();
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> PolygonResult<()> {
    context.new_path();
    let mut vertices = polygon.vertices.iter();
    if let Some(first) = vertices.next() {
        context.move_to(first.x, first.y);
    }
    for vertex in vertices {
        context.line_to(vertex.x, vertex.y);
    }
    context.close_path();

    apply_color(context, polygon.fill_color);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
    apply_color(context, polygon.stroke_color);
    context.set_line_width(polygon.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polygon", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PolygonError {
    PolygonError::InvalidData(format!("{prefix}: {err}"))
}
