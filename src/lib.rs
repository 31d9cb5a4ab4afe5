//! polygon-calc: regular polygon area/perimeter calculator.
//!
//! `core` holds the toolkit-independent geometry (metrics and vertex
//! generation), `api` the calculator session a host drives from its input
//! fields, and `render` a backend-agnostic canvas frame with headless and
//! Cairo renderers.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CalculatorConfig, PolygonCalculator};
pub use error::{InvalidInputReason, PolygonError, PolygonResult};
