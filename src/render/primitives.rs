use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{PolygonError, PolygonResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb8(0x80, 0x80, 0x80);
    pub const LIGHT_GRAY: Self = Self::from_rgb8(0xD3, 0xD3, 0xD3);
    pub const LIGHT_BLUE: Self = Self::from_rgb8(0xAD, 0xD8, 0xE6);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> PolygonResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PolygonError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(width: f64, what: &str) -> PolygonResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(PolygonError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub const fn between(from: Point2D, to: Point2D, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    pub fn validate(self) -> PolygonResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PolygonError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Axis-aligned filled rectangle with an optional border.
///
/// A `border_width` of zero disables the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> PolygonResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PolygonError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(PolygonError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(PolygonError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Closed polygon outline, filled then stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<Point2D>,
    pub fill_color: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(
        vertices: Vec<Point2D>,
        fill_color: Color,
        stroke_width: f64,
        stroke_color: Color,
    ) -> Self {
        Self {
            vertices,
            fill_color,
            stroke_width,
            stroke_color,
        }
    }

    pub fn validate(&self) -> PolygonResult<()> {
        if self.vertices.len() < 3 {
            return Err(PolygonError::InvalidData(format!(
                "polygon primitive needs at least 3 vertices, got {}",
                self.vertices.len()
            )));
        }
        if !self.vertices.iter().all(|vertex| vertex.is_finite()) {
            return Err(PolygonError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "polygon")?;
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Filled circular marker, used for vertices and the center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPrimitive {
    pub center: Point2D,
    pub radius: f64,
    pub color: Color,
}

impl DotPrimitive {
    #[must_use]
    pub const fn new(center: Point2D, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn validate(self) -> PolygonResult<()> {
        if !self.center.is_finite() {
            return Err(PolygonError::InvalidData(
                "dot center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PolygonError::InvalidData(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
