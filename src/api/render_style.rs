use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Palette and stroke metrics for the polygon canvas.
///
/// Defaults reproduce the reference calculator window: light-gray canvas with
/// a black border, light-blue polygon outlined in blue, red vertex markers and
/// gray spokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub polygon_fill_color: Color,
    pub polygon_stroke_color: Color,
    pub polygon_stroke_width: f64,
    pub vertex_marker_color: Color,
    pub vertex_marker_radius: f64,
    /// Center marker while a polygon is drawn.
    pub center_marker_color: Color,
    /// Center marker on an empty canvas.
    pub idle_center_marker_color: Color,
    pub center_marker_radius: f64,
    pub spoke_color: Color,
    pub spoke_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::LIGHT_GRAY,
            border_color: Color::BLACK,
            border_width: 2.0,
            polygon_fill_color: Color::LIGHT_BLUE,
            polygon_stroke_color: Color::BLUE,
            polygon_stroke_width: 3.0,
            vertex_marker_color: Color::RED,
            vertex_marker_radius: 3.0,
            center_marker_color: Color::BLACK,
            idle_center_marker_color: Color::RED,
            center_marker_radius: 2.0,
            spoke_color: Color::GRAY,
            spoke_width: 1.0,
        }
    }
}
