use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PolygonError, PolygonResult};
use crate::render::Renderer;

use super::{PolygonCalculator, PresentationState};

pub const PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// headless tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    pub viewport: Viewport,
    pub show_spokes: bool,
    pub state: PresentationState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PresentationSnapshot,
}

impl PresentationSnapshot {
    pub fn to_json_pretty(&self) -> PolygonResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PolygonError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> PolygonResult<String> {
        let payload = PresentationSnapshotJsonContractV1 {
            schema_version: PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PolygonError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PolygonResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PresentationSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PresentationSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                PolygonError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PolygonError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> PolygonCalculator<R> {
    #[must_use]
    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            viewport: self.config.viewport,
            show_spokes: self.config.show_spokes,
            state: self.state.clone(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> PolygonResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
