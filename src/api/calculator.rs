use tracing::{debug, trace};

use crate::error::PolygonResult;
use crate::render::{RenderFrame, Renderer};

use super::canvas_frame_builder::build_canvas_frame;
use super::validation::validate_calculator_config;
use super::{CalculatorConfig, PresentationState};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `PolygonCalculator` owns the input fields, the displayed results and the
/// canvas state, and hands materialized frames to its renderer.
pub struct PolygonCalculator<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: CalculatorConfig,
    pub(super) state: PresentationState,
}

impl<R: Renderer> PolygonCalculator<R> {
    /// Creates a calculator with blank fields and an empty canvas.
    pub fn new(renderer: R, config: CalculatorConfig) -> PolygonResult<Self> {
        let config = validate_calculator_config(config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            margin = config.margin,
            "polygon calculator initialized"
        );
        Ok(Self {
            renderer,
            config,
            state: PresentationState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    #[must_use]
    pub fn area_label(&self) -> &str {
        &self.state.area_label
    }

    #[must_use]
    pub fn perimeter_label(&self) -> &str {
        &self.state.perimeter_label
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn build_render_frame(&self) -> PolygonResult<RenderFrame> {
        let frame = build_canvas_frame(&self.state, &self.config);
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> PolygonResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            polygons = frame.polygons.len(),
            dots = frame.dots.len(),
            lines = frame.lines.len(),
            "render canvas frame"
        );
        self.renderer.render(&frame)
    }

    /// Renders the canvas into an external cairo context, such as a host
    /// toolkit's draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PolygonResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
