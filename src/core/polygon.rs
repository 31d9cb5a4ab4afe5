use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputReason, PolygonError, PolygonResult};

/// Smallest side count that forms a polygon.
pub const MIN_SIDES: u32 = 3;

/// Validated regular-polygon input.
///
/// Only constructed through [`PolygonSpec::new`] or [`parse_polygon_input`],
/// so `sides >= 3` and `side_length` is finite and `> 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec {
    sides: u32,
    side_length: f64,
}

impl PolygonSpec {
    /// Range-checks `sides` first, then `side_length`.
    ///
    /// A length whose area or perimeter overflows `f64` is rejected as not a
    /// number, so metrics are always finite.
    pub fn new(sides: i32, side_length: f64) -> PolygonResult<Self> {
        if !side_length.is_finite() {
            return Err(PolygonError::InvalidInput(InvalidInputReason::NotANumber));
        }
        let sides = u32::try_from(sides)
            .ok()
            .filter(|&sides| sides >= MIN_SIDES)
            .ok_or(PolygonError::InvalidInput(InvalidInputReason::TooFewSides))?;
        if side_length <= 0.0 {
            return Err(PolygonError::InvalidInput(
                InvalidInputReason::NonPositiveLength,
            ));
        }

        let spec = Self { sides, side_length };
        let metrics = spec.metrics();
        if !metrics.area.is_finite() || !metrics.perimeter.is_finite() {
            return Err(PolygonError::InvalidInput(InvalidInputReason::NotANumber));
        }
        Ok(spec)
    }

    #[must_use]
    pub fn sides(self) -> u32 {
        self.sides
    }

    #[must_use]
    pub fn side_length(self) -> f64 {
        self.side_length
    }

    #[must_use]
    pub fn perimeter(self) -> f64 {
        f64::from(self.sides) * self.side_length
    }

    /// Closed-form area `n·s² / (4·tan(π/n))`.
    ///
    /// `π/n` lies in `(0, π/3]`, so the tangent is finite and positive.
    #[must_use]
    pub fn area(self) -> f64 {
        let n = f64::from(self.sides);
        (n * self.side_length.powi(2)) / (4.0 * (PI / n).tan())
    }

    #[must_use]
    pub fn metrics(self) -> PolygonMetrics {
        PolygonMetrics {
            area: self.area(),
            perimeter: self.perimeter(),
        }
    }
}

/// Derived measurements of one regular polygon. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonMetrics {
    pub area: f64,
    pub perimeter: f64,
}

/// Validates numeric input and returns area/perimeter.
pub fn compute(sides: i32, side_length: f64) -> PolygonResult<PolygonMetrics> {
    Ok(PolygonSpec::new(sides, side_length)?.metrics())
}

/// Parses raw field text into a validated spec.
///
/// Both fields are parsed (after trimming) before any range check, so a
/// non-numeric field always wins over an out-of-range one.
pub fn parse_polygon_input(sides_text: &str, side_length_text: &str) -> PolygonResult<PolygonSpec> {
    let sides = sides_text.trim().parse::<i32>();
    let side_length = side_length_text.trim().parse::<f64>();

    match (sides, side_length) {
        (Ok(sides), Ok(side_length)) => PolygonSpec::new(sides, side_length),
        _ => Err(PolygonError::InvalidInput(InvalidInputReason::NotANumber)),
    }
}

/// Parses raw field text and computes metrics in one step.
pub fn compute_from_text(
    sides_text: &str,
    side_length_text: &str,
) -> PolygonResult<PolygonMetrics> {
    Ok(parse_polygon_input(sides_text, side_length_text)?.metrics())
}
