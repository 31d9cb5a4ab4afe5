use crate::render::{DotPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame};

use super::{CalculatorConfig, PresentationState};

/// Materializes the canvas for the current presentation state.
///
/// An empty canvas carries the background, border and idle center marker.
/// A drawn polygon adds the filled outline, vertex markers, the center marker
/// and, when enabled, spokes painted last so they sit above the markers.
pub(super) fn build_canvas_frame(state: &PresentationState, config: &CalculatorConfig) -> RenderFrame {
    let style = config.render_style;
    let viewport = config.viewport;
    let center = viewport.center();

    let frame = RenderFrame::new(viewport).with_rect(
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            style.background_color,
        )
        .with_border(style.border_width, style.border_color),
    );

    let Some(visualization) = &state.visualization else {
        return frame.with_dot(DotPrimitive::new(
            center,
            style.center_marker_radius,
            style.idle_center_marker_color,
        ));
    };

    let mut frame = frame.with_polygon(PolygonPrimitive::new(
        visualization.vertices.clone(),
        style.polygon_fill_color,
        style.polygon_stroke_width,
        style.polygon_stroke_color,
    ));

    frame.dots.extend(visualization.vertices.iter().map(|vertex| {
        DotPrimitive::new(*vertex, style.vertex_marker_radius, style.vertex_marker_color)
    }));
    frame.dots.push(DotPrimitive::new(
        visualization.center,
        style.center_marker_radius,
        style.center_marker_color,
    ));

    if config.show_spokes {
        frame.lines.extend(visualization.vertices.iter().map(|vertex| {
            LinePrimitive::between(
                visualization.center,
                *vertex,
                style.spoke_width,
                style.spoke_color,
            )
        }));
    }

    frame
}
