use crate::{
    foundation::error::{ProofGraphError, ProofGraphResult},
    proof::model::Proof,
};

const BUILTIN: &[(&str, &str)] = &[
    (
        "longest-path-cycle",
        include_str!("../../data/proofs/longest_path_cycle.json"),
    ),
    (
        "tree-two-leaves",
        include_str!("../../data/proofs/tree_two_leaves.json"),
    ),
];

/// Ids of the proofs bundled with the crate, in menu order.
pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(id, _)| *id)
}

/// Parse one bundled proof by id.
pub fn builtin(id: &str) -> ProofGraphResult<Proof> {
    let (_, src) = BUILTIN
        .iter()
        .find(|(key, _)| *key == id)
        .ok_or_else(|| ProofGraphError::validation(format!("unknown proof '{id}'")))?;
    Proof::from_json_str(src)
}

/// Parse every bundled proof.
pub fn builtins() -> ProofGraphResult<Vec<Proof>> {
    builtin_ids().map(builtin).collect()
}

/// Resolve a CLI-style reference: a bundled id, or else a path to a proof JSON file.
pub fn resolve(reference: &str) -> ProofGraphResult<Proof> {
    if builtin_ids().any(|id| id == reference) {
        return builtin(reference);
    }
    let path = std::path::Path::new(reference);
    if path.exists() {
        return Proof::from_path(path);
    }
    Err(ProofGraphError::validation(format!(
        "'{reference}' is neither a built-in proof nor a file"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/proof/catalog.rs"]
mod tests;
