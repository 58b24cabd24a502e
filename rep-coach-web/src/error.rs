//! Error types
//!
//! Bad frames are never errors here: a blurry or partial pose is reported
//! as status text by the analyzers. These types only cover configuration
//! mistakes and malformed input from the host.

use thiserror::Error;

/// Invalid coach configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{exercise} down threshold ({down}) must be below its up threshold ({up})")]
    InvertedThresholds {
        exercise: &'static str,
        down: f32,
        up: f32,
    },

    #[error("smoothing history must hold at least one frame")]
    EmptyHistory,

    #[error("readiness needs at least one frame in the start position")]
    ZeroReadyFrames,

    #[error("{name} must be within [0, 1], got {value}")]
    ConfidenceOutOfRange { name: &'static str, value: f32 },

    #[error("posture tilt margin must be within [0, 90) degrees, got {0}")]
    TiltMarginOutOfRange(f32),

    #[error("partial rep margin must be non-negative, got {0}")]
    NegativeMargin(f32),

    #[error("speech interval must be non-negative, got {0} ms")]
    NegativeSpeechInterval(f64),
}

/// Exercise label the coach does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown exercise '{0}' (expected Pushups or Squats)")]
pub struct UnknownExercise(pub String);
