/// Crate-wide result alias.
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors produced while aggregating, laying out or rendering a waveform.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// The view window or the data fetched for it cannot be drawn.
    #[error("invalid view: {0}")]
    InvalidView(String),

    /// A numeric precondition was violated (e.g. a logarithm of a non-positive value).
    #[error("domain error: {0}")]
    Domain(String),

    /// Malformed input that is not tied to the view window.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Build a [`WaveError::InvalidView`].
    pub fn invalid_view(msg: impl Into<String>) -> Self {
        Self::InvalidView(msg.into())
    }

    /// Build a [`WaveError::Domain`].
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`WaveError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WaveError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
