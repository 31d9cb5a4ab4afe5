use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_CANVAS_MARGIN, Viewport};
use crate::error::{PolygonError, PolygonResult};

use super::RenderStyle;

/// Side count above which the canvas is left blank while metrics still
/// update.
pub const DEFAULT_MAX_VISUALIZED_SIDES: u32 = 10_000;

/// Public calculator bootstrap configuration.
///
/// Serializable so hosts can keep canvas setup in a file instead of wiring it
/// by hand. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_show_spokes")]
    pub show_spokes: bool,
    #[serde(default = "default_max_visualized_sides")]
    pub max_visualized_sides: u32,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl CalculatorConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: default_margin(),
            show_spokes: default_show_spokes(),
            max_visualized_sides: default_max_visualized_sides(),
            render_style: RenderStyle::default(),
        }
    }

    /// Sets the inset between the polygon's circumcircle and the canvas edge.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Toggles center-to-vertex spoke lines.
    #[must_use]
    pub fn with_spokes(mut self, show_spokes: bool) -> Self {
        self.show_spokes = show_spokes;
        self
    }

    #[must_use]
    pub fn with_max_visualized_sides(mut self, max_visualized_sides: u32) -> Self {
        self.max_visualized_sides = max_visualized_sides;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, render_style: RenderStyle) -> Self {
        self.render_style = render_style;
        self
    }

    /// Circumradius of drawn polygons for this canvas.
    #[must_use]
    pub fn polygon_radius(self) -> f64 {
        crate::core::radius_for_canvas(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
            self.margin,
        )
    }

    pub fn to_json_pretty(self) -> PolygonResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PolygonError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PolygonResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PolygonError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

fn default_margin() -> f64 {
    DEFAULT_CANVAS_MARGIN
}

fn default_show_spokes() -> bool {
    true
}

fn default_max_visualized_sides() -> u32 {
    DEFAULT_MAX_VISUALIZED_SIDES
}
