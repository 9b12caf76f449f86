/// Convenience result type used across proofgraph.
pub type ProofGraphResult<T> = Result<T, ProofGraphError>;

/// Top-level error taxonomy used by the loading, configuration and navigation APIs.
///
/// The diff/sequencing engine itself never fails; errors only surface at the edges where
/// authored content or user configuration enters the crate.
#[derive(thiserror::Error, Debug)]
pub enum ProofGraphError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or inconsistent proof content.
    #[error("content error: {0}")]
    Content(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProofGraphError {
    /// Build a [`ProofGraphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProofGraphError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`ProofGraphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ProofGraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
