use thiserror::Error;

/// Errors of the numeric helpers and the cumomer transform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Error when a transform buffer does not have power-of-two length
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error when a range specification such as `1-3,5` is malformed
    #[error("Invalid range specification '{spec}': {reason}")]
    InvalidRange { spec: String, reason: String },

    /// Error when an integer result does not fit its type
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}
