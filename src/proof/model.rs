use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{ProofGraphError, ProofGraphResult},
    graph::model::GraphState,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An authored proof: narrative text plus one graph snapshot per step.
///
/// Proof content is consumed, never produced, by this crate. Field names follow the
/// camelCase JSON the content is authored in (`graphState`, `fullProof`).
pub struct Proof {
    /// Stable identifier, e.g. `longest-path-cycle`.
    pub id: String,
    /// Theorem name.
    pub title: String,
    /// One-paragraph statement.
    pub description: String,
    /// Optional full written proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_proof: Option<String>,
    /// Steps in presentation order.
    pub steps: Vec<ProofStep>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One step of a proof.
pub struct ProofStep {
    /// Short heading.
    pub title: String,
    /// What the step shows.
    pub description: String,
    /// Complete graph snapshot for this step.
    pub graph_state: GraphState,
}

impl Proof {
    pub fn from_json_str(s: &str) -> ProofGraphResult<Self> {
        let proof: Self = serde_json::from_str(s)?;
        proof.validate()?;
        Ok(proof)
    }

    pub fn from_path(path: &Path) -> ProofGraphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read proof '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn step(&self, index: usize) -> Option<&ProofStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Authoring checks: ids unique within each step, opacities in range.
    ///
    /// Edges whose endpoints do not resolve are allowed; they are logged and skipped at render
    /// time.
    pub fn validate(&self) -> ProofGraphResult<()> {
        if self.id.trim().is_empty() {
            return Err(ProofGraphError::content("proof id must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(ProofGraphError::content(format!(
                "proof '{}' has an empty title",
                self.id
            )));
        }
        if self.steps.is_empty() {
            return Err(ProofGraphError::content(format!(
                "proof '{}' has no steps",
                self.id
            )));
        }

        for (i, step) in self.steps.iter().enumerate() {
            let g = &step.graph_state;

            let mut seen = BTreeSet::new();
            for v in &g.vertices {
                if !seen.insert(v.id.as_str()) {
                    return Err(ProofGraphError::content(format!(
                        "proof '{}' step {i}: duplicate vertex id '{}'",
                        self.id, v.id
                    )));
                }
                check_opacity(&self.id, i, &v.id, v.opacity)?;
            }

            let mut seen = BTreeSet::new();
            for e in &g.edges {
                if !seen.insert(e.id.as_str()) {
                    return Err(ProofGraphError::content(format!(
                        "proof '{}' step {i}: duplicate edge id '{}'",
                        self.id, e.id
                    )));
                }
                check_opacity(&self.id, i, &e.id, e.opacity)?;
            }

            for e in g.dangling_edges() {
                tracing::debug!(proof = %self.id, step = i, edge = %e.id, "edge endpoint missing");
            }
        }

        Ok(())
    }
}

fn check_opacity(proof: &str, step: usize, id: &str, opacity: f64) -> ProofGraphResult<()> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(ProofGraphError::content(format!(
            "proof '{proof}' step {step}: '{id}' opacity {opacity} outside [0, 1]"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/proof/model.rs"]
mod tests;
