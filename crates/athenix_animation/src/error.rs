//! Animation configuration errors

use thiserror::Error;

/// Errors raised when an animation is configured with values it cannot play.
///
/// Playback itself never fails; these only come out of constructors that
/// validate caller-supplied configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Timed animations need a non-zero duration
    #[error("{what} duration must be greater than zero")]
    ZeroDuration { what: &'static str },

    /// Scale targets must stay inside the press/pulse envelope
    #[error("scale {value} is outside the allowed range {min}..={max}")]
    ScaleOutOfRange { value: f32, min: f32, max: f32 },

    /// Slide distance must be finite and non-negative
    #[error("slide distance {0} must be finite and non-negative")]
    InvalidDistance(f32),
}

/// Result type for animation configuration
pub type Result<T> = std::result::Result<T, AnimationError>;
