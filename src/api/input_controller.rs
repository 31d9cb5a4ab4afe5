use tracing::{debug, warn};

use crate::core::{PolygonMetrics, PolygonSpec, generate_vertices, parse_polygon_input};
use crate::error::PolygonResult;
use crate::render::Renderer;

use super::{
    CalculationOutcome, ErrorNotification, PolygonCalculator, PresentationState, Visualization,
};

impl<R: Renderer> PolygonCalculator<R> {
    /// Replaces the "number of sides" field text.
    pub fn set_sides_text(&mut self, text: impl Into<String>) {
        self.state.sides_text = text.into();
    }

    /// Replaces the "side length" field text.
    pub fn set_side_length_text(&mut self, text: impl Into<String>) {
        self.state.side_length_text = text.into();
    }

    #[must_use]
    pub fn sides_text(&self) -> &str {
        &self.state.sides_text
    }

    #[must_use]
    pub fn side_length_text(&self) -> &str {
        &self.state.side_length_text
    }

    /// Calculates from the current field texts.
    ///
    /// On success the labels and canvas reflect the new polygon. On rejection
    /// nothing changes: earlier results and drawing stay on screen.
    pub fn calculate(&mut self) -> PolygonResult<PolygonMetrics> {
        let spec = match parse_polygon_input(&self.state.sides_text, &self.state.side_length_text)
        {
            Ok(spec) => spec,
            Err(err) => {
                debug!(
                    error = %err,
                    sides_text = %self.state.sides_text,
                    side_length_text = %self.state.side_length_text,
                    "rejected polygon input"
                );
                return Err(err);
            }
        };

        let metrics = spec.metrics();
        self.state.show_metrics(metrics);
        self.state.visualization = self.visualize(spec);
        debug!(
            sides = spec.sides(),
            side_length = spec.side_length(),
            area = metrics.area,
            perimeter = metrics.perimeter,
            "computed polygon metrics"
        );
        Ok(metrics)
    }

    /// Sets both fields, then calculates.
    pub fn calculate_from(
        &mut self,
        sides_text: impl Into<String>,
        side_length_text: impl Into<String>,
    ) -> PolygonResult<PolygonMetrics> {
        self.set_sides_text(sides_text);
        self.set_side_length_text(side_length_text);
        self.calculate()
    }

    /// Calculate action with rejections turned into a notification.
    pub fn submit(&mut self) -> CalculationOutcome {
        match self.calculate() {
            Ok(metrics) => CalculationOutcome::Computed(metrics),
            Err(err) => CalculationOutcome::Rejected(ErrorNotification::from_error(&err)),
        }
    }

    /// Clear action: blank fields, bare labels, empty canvas.
    pub fn clear(&mut self) {
        self.state = PresentationState::default();
        debug!("cleared polygon calculator");
    }

    fn visualize(&self, spec: PolygonSpec) -> Option<Visualization> {
        if spec.sides() > self.config.max_visualized_sides {
            warn!(
                sides = spec.sides(),
                max_visualized_sides = self.config.max_visualized_sides,
                "skipping polygon visualization"
            );
            return None;
        }

        let center = self.config.viewport.center();
        let radius = self.config.polygon_radius();
        Some(Visualization {
            sides: spec.sides(),
            center,
            radius,
            vertices: generate_vertices(spec.sides(), center, radius),
        })
    }
}
