/// Convenience result type used across ppdeck.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by deck, store and archive APIs.
///
/// Placement resolution never produces errors; malformed layout data falls back to defaults.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Invalid caller-provided data or a refused editing operation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Fatal structural failure while opening a project archive.
    #[error("invalid project file: {0}")]
    InvalidProject(String),

    /// A single binary asset could not be read or materialized.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::InvalidProject`] value.
    pub fn invalid_project(msg: impl Into<String>) -> Self {
        Self::InvalidProject(msg.into())
    }

    /// Build a [`DeckError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a fatal archive-structure failure.
    pub fn is_invalid_project(&self) -> bool {
        matches!(self, Self::InvalidProject(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
