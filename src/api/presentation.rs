use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{Point2D, PolygonMetrics};
use crate::error::{InvalidInputReason, PolygonError};

pub const AREA_LABEL_PREFIX: &str = "Area: ";
pub const PERIMETER_LABEL_PREFIX: &str = "Perimeter: ";
pub const ERROR_NOTIFICATION_TITLE: &str = "Error";

/// Area label rounded to two decimals for display.
#[must_use]
pub fn format_area_label(area: f64) -> String {
    format!("{AREA_LABEL_PREFIX}{} square units", format_two_decimals(area))
}

/// Perimeter label rounded to two decimals for display.
#[must_use]
pub fn format_perimeter_label(perimeter: f64) -> String {
    format!("{PERIMETER_LABEL_PREFIX}{} units", format_two_decimals(perimeter))
}

/// Rounds the shortest decimal representation of `value` half away from zero,
/// so `0.125` displays as `0.13`.
///
/// Magnitudes outside `Decimal` range carry no fractional digits in `f64`
/// and are formatted directly.
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        Err(_) => format!("{value:.2}"),
    }
}

/// Geometry currently drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub sides: u32,
    pub center: Point2D,
    pub radius: f64,
    pub vertices: Vec<Point2D>,
}

/// Everything a host needs to present the calculator.
///
/// Held explicitly by `PolygonCalculator` and handed to the frame builder
/// after every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationState {
    pub sides_text: String,
    pub side_length_text: String,
    pub area_label: String,
    pub perimeter_label: String,
    pub metrics: Option<PolygonMetrics>,
    pub visualization: Option<Visualization>,
}

impl PresentationState {
    pub(super) fn show_metrics(&mut self, metrics: PolygonMetrics) {
        self.area_label = format_area_label(metrics.area);
        self.perimeter_label = format_perimeter_label(metrics.perimeter);
        self.metrics = Some(metrics);
    }

    /// Whether the state matches a freshly started or cleared calculator.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            sides_text: String::new(),
            side_length_text: String::new(),
            area_label: AREA_LABEL_PREFIX.to_owned(),
            perimeter_label: PERIMETER_LABEL_PREFIX.to_owned(),
            metrics: None,
            visualization: None,
        }
    }
}

/// Blocking error message a host shows when input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotification {
    pub title: String,
    pub message: String,
}

impl ErrorNotification {
    #[must_use]
    pub fn from_reason(reason: InvalidInputReason) -> Self {
        Self {
            title: ERROR_NOTIFICATION_TITLE.to_owned(),
            message: reason.user_message().to_owned(),
        }
    }

    /// Input errors carry their user-facing message; anything else falls back
    /// to the error's display text.
    #[must_use]
    pub fn from_error(err: &PolygonError) -> Self {
        match err.input_reason() {
            Some(reason) => Self::from_reason(reason),
            None => Self {
                title: ERROR_NOTIFICATION_TITLE.to_owned(),
                message: err.to_string(),
            },
        }
    }
}

/// Result of a Calculate action after errors were caught at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Computed(PolygonMetrics),
    Rejected(ErrorNotification),
}

impl CalculationOutcome {
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ErrorNotification, format_area_label, format_perimeter_label, format_two_decimals,
    };
    use crate::error::{InvalidInputReason, PolygonError};

    #[test]
    fn labels_round_to_two_decimals() {
        assert_eq!(format_area_label(0.4330127018922193), "Area: 0.43 square units");
        assert_eq!(format_perimeter_label(20.0), "Perimeter: 20.00 units");
    }

    #[test]
    fn exact_ties_round_half_up() {
        assert_eq!(format_two_decimals(0.125), "0.13");
        assert_eq!(format_two_decimals(4.125), "4.13");
        assert_eq!(format_two_decimals(2.675), "2.68");
        assert_eq!(format_two_decimals(0.124), "0.12");
    }

    #[test]
    fn whole_and_huge_values_keep_two_decimals() {
        assert_eq!(format_two_decimals(7.0), "7.00");
        assert_eq!(format_two_decimals(0.0), "0.00");
        assert_eq!(format_two_decimals(1e30), format!("{:.2}", 1e30));
    }

    #[test]
    fn non_input_error_uses_display_text() {
        let err = PolygonError::InvalidData("boom".to_owned());
        let notification = ErrorNotification::from_error(&err);
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.message, "invalid data: boom");
    }

    #[test]
    fn input_error_uses_user_message() {
        let err = PolygonError::InvalidInput(InvalidInputReason::TooFewSides);
        let notification = ErrorNotification::from_error(&err);
        assert_eq!(notification.message, "Number of sides must be 3 or more!");
    }
}
