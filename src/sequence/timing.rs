use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Millis,
    error::{ProofGraphError, ProofGraphResult},
};

/// Slot spacing and edge lag for staged reveals.
///
/// Entry `k` of a schedule reveals its vertex at `k * unit` and its edge `edge_offset` later
/// (or later still, when an endpoint is revealed after slot `k`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Spacing between consecutive schedule slots.
    pub unit: Millis,
    /// Lag of an edge behind the vertex it is paired with.
    pub edge_offset: Millis,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            unit: Millis(600),
            edge_offset: Millis(250),
        }
    }
}

impl Timing {
    pub fn new(unit: Millis, edge_offset: Millis) -> ProofGraphResult<Self> {
        let t = Self { unit, edge_offset };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> ProofGraphResult<()> {
        // A zero offset would reveal an edge in the same instant as its endpoint.
        if self.edge_offset.0 == 0 {
            return Err(ProofGraphError::validation("edge_offset must be > 0 ms"));
        }
        if self.unit.0 == 0 {
            return Err(ProofGraphError::validation("unit must be > 0 ms"));
        }
        Ok(())
    }

    /// Read a JSON timing file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> ProofGraphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read timing config '{}'", path.display()))?;
        let t: Self = serde_json::from_str(&s)?;
        t.validate()?;
        Ok(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/timing.rs"]
mod tests;
