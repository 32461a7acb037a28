use thiserror::Error;

/// Failures surfaced by the snapshot codec.
///
/// Gesture handling never fails; rejected gestures are reported through
/// [`crate::PointerOutcome::Ignored`] instead.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to parse sensor layout: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode sensor layout: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidRadius { name: &'static str, value: f32 },
    #[error("sensor #{index} has a non-finite position")]
    InvalidPosition { index: usize },
}

pub type BoardResult<T> = Result<T, BoardError>;
