use thiserror::Error;

/// Failures surfaced to the host. Every other transition is total.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("invalid countdown config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RoundError {
    fn from(err: serde_json::Error) -> Self {
        RoundError::InvalidSnapshot(err.to_string())
    }
}
