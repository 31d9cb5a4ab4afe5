use crate::core::MIN_SIDES;
use crate::error::{PolygonError, PolygonResult};

use super::{CalculatorConfig, RenderStyle};

pub(super) fn validate_calculator_config(config: CalculatorConfig) -> PolygonResult<CalculatorConfig> {
    if !config.viewport.is_valid() {
        return Err(PolygonError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    if !config.margin.is_finite() || config.margin < 0.0 {
        return Err(PolygonError::InvalidData(
            "canvas margin must be finite and >= 0".to_owned(),
        ));
    }
    if config.polygon_radius() <= 0.0 {
        return Err(PolygonError::InvalidData(format!(
            "canvas margin {} leaves no room for a polygon on a {}x{} canvas",
            config.margin, config.viewport.width, config.viewport.height
        )));
    }

    if config.max_visualized_sides < MIN_SIDES {
        return Err(PolygonError::InvalidData(format!(
            "max visualized sides must be >= {MIN_SIDES}"
        )));
    }

    validate_render_style(config.render_style)?;
    Ok(config)
}

pub(super) fn validate_render_style(style: RenderStyle) -> PolygonResult<RenderStyle> {
    for color in [
        style.background_color,
        style.border_color,
        style.polygon_fill_color,
        style.polygon_stroke_color,
        style.vertex_marker_color,
        style.center_marker_color,
        style.idle_center_marker_color,
        style.spoke_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("polygon_stroke_width", style.polygon_stroke_width),
        ("vertex_marker_radius", style.vertex_marker_radius),
        ("center_marker_radius", style.center_marker_radius),
        ("spoke_width", style.spoke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PolygonError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.border_width.is_finite() || style.border_width < 0.0 {
        return Err(PolygonError::InvalidData(
            "render style `border_width` must be finite and >= 0".to_owned(),
        ));
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::{validate_calculator_config, validate_render_style};
    use crate::api::{CalculatorConfig, RenderStyle};
    use crate::core::Viewport;
    use crate::render::Color;

    #[test]
    fn margin_consuming_canvas_is_rejected() {
        let config = CalculatorConfig::new(Viewport::new(100, 100)).with_margin(50.0);
        let err = validate_calculator_config(config).expect_err("zero radius must fail");
        assert!(format!("{err}").contains("leaves no room"));
    }

    #[test]
    fn zero_size_canvas_is_rejected() {
        let config = CalculatorConfig::new(Viewport::new(0, 300));
        assert!(validate_calculator_config(config).is_err());
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        let style = RenderStyle {
            spoke_color: Color::rgb(1.5, 0.0, 0.0),
            ..RenderStyle::default()
        };
        let err = validate_render_style(style).expect_err("channel > 1 must fail");
        assert!(format!("{err}").contains("color channel"));
    }

    #[test]
    fn zero_border_width_is_allowed() {
        let style = RenderStyle {
            border_width: 0.0,
            ..RenderStyle::default()
        };
        assert!(validate_render_style(style).is_ok());
    }

    #[test]
    fn small_visualization_cap_is_rejected() {
        let config = CalculatorConfig::default().with_max_visualized_sides(2);
        let err = validate_calculator_config(config).expect_err("cap below 3 must fail");
        assert!(format!("{err}").contains("max visualized sides"));
    }
}
