mod calculator;
mod calculator_config;
mod canvas_frame_builder;
mod input_controller;
mod presentation;
mod render_style;
mod snapshot;
mod validation;

pub use calculator::PolygonCalculator;
pub use calculator_config::{CalculatorConfig, DEFAULT_MAX_VISUALIZED_SIDES};
pub use presentation::{
    AREA_LABEL_PREFIX, CalculationOutcome, ERROR_NOTIFICATION_TITLE, ErrorNotification,
    PERIMETER_LABEL_PREFIX, PresentationState, Visualization, format_area_label,
    format_perimeter_label, format_two_decimals,
};
pub use render_style::RenderStyle;
pub use snapshot::{
    PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1, PresentationSnapshot, PresentationSnapshotJsonContractV1,
};
