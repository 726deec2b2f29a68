use thiserror::Error;

/// Errors raised while validating or resolving density configuration.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A rate or ratio field lies outside [0, 1].
    #[error("rate out of range for {field}: {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
    /// Fan-out bounds are impossible to satisfy.
    #[error("fan-out bounds invalid: min {min} > max {max}")]
    FanOutBounds { min: usize, max: usize },
    /// A weighted distribution is malformed.
    #[error("invalid distribution: {0}")]
    Distribution(String),
    /// The preset document is malformed beyond what serde typing catches.
    #[error("invalid preset: {0}")]
    Preset(String),
}
